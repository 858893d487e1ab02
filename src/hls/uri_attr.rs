use regex::{Captures, Regex};
use std::{borrow::Cow, sync::LazyLock};

/// `URI=` attribute in double-quoted, single-quoted or bare form.
static URI_ATTR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"URI=(?:"([^"]+)"|'([^']+)'|([^\s,]+))"#).expect("valid URI attribute regex")
});

/// Replace every `URI=` attribute of a tag line.
///
/// `rewrite` receives the raw attribute value and returns the new value,
/// which is written back double-quoted. Lines without a `URI=` attribute
/// are returned borrowed and untouched.
pub fn rewrite_uri_attributes<'a, F>(line: &'a str, rewrite: F) -> Cow<'a, str>
where
    F: Fn(&str) -> String,
{
    URI_ATTR_REGEX.replace_all(line, |caps: &Captures| {
        let value = (1..=3)
            .filter_map(|i| caps.get(i))
            .map(|m| m.as_str())
            .next()
            .unwrap_or_default();

        format!("URI=\"{}\"", rewrite(value))
    })
}
