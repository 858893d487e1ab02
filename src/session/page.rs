//! HTML scraping for the embed flow.
//!
//! The parsed document is not `Send`, so everything here is synchronous and
//! hands back owned strings before the resolver awaits again.

use crate::{Error, Result};
use scraper::{Html, Selector};
use serde::Deserialize;

/// The Inertia page object stored in `#app[data-page]`.
#[derive(Debug, Deserialize)]
struct InertiaPage {
    #[serde(default)]
    version: Option<String>,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::MalformedResponse(format!("{:?}", e)))
}

/// Read the Inertia asset version from the site's `#app` element.
pub fn extract_version(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let app_selector = selector("#app")?;

    let app = document
        .select(&app_selector)
        .next()
        .ok_or_else(|| Error::VersionResolution("app element not found".to_string()))?;

    let data_page = app
        .value()
        .attr("data-page")
        .ok_or_else(|| Error::VersionResolution("data-page not found".to_string()))?;

    let page: InertiaPage = serde_json::from_str(data_page)
        .map_err(|e| Error::MalformedResponse(format!("data-page is not valid JSON: {}", e)))?;

    match page.version {
        Some(version) if !version.is_empty() => Ok(version),
        _ => Err(Error::VersionResolution(
            "version missing from data-page".to_string(),
        )),
    }
}

/// Read the `src` of the first iframe that has one.
pub fn extract_iframe_src(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let iframe_selector = selector("iframe")?;

    document
        .select(&iframe_selector)
        .find_map(|iframe| iframe.value().attr("src").filter(|src| !src.is_empty()))
        .map(str::to_string)
        .ok_or(Error::IframeNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_version() {
        let html = r#"<html><body><div id="app" data-page="{&quot;component&quot;:&quot;Title&quot;,&quot;version&quot;:&quot;a1b2c3&quot;}"></div></body></html>"#;
        assert_eq!(extract_version(html).unwrap(), "a1b2c3");
    }

    #[test]
    fn test_missing_app_element() {
        let html = "<html><body><div id=\"root\"></div></body></html>";
        assert!(matches!(
            extract_version(html),
            Err(Error::VersionResolution(_))
        ));
    }

    #[test]
    fn test_missing_data_page() {
        let html = "<div id=\"app\"></div>";
        assert!(matches!(
            extract_version(html),
            Err(Error::VersionResolution(_))
        ));
    }

    #[test]
    fn test_missing_version_field() {
        let html = r#"<div id="app" data-page='{"component":"Title"}'></div>"#;
        assert!(matches!(
            extract_version(html),
            Err(Error::VersionResolution(_))
        ));
    }

    #[test]
    fn test_data_page_not_json() {
        let html = r#"<div id="app" data-page="not json"></div>"#;
        assert!(matches!(
            extract_version(html),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_extract_iframe_src() {
        let html = r#"<main><iframe src="https://player.test/embed/77?token=a&amp;b=1"></iframe></main>"#;
        assert_eq!(
            extract_iframe_src(html).unwrap(),
            "https://player.test/embed/77?token=a&b=1"
        );
    }

    #[test]
    fn test_skips_iframe_with_empty_src() {
        let html = r#"<iframe src=""></iframe><iframe src="https://player.test/embed/9"></iframe>"#;
        assert_eq!(
            extract_iframe_src(html).unwrap(),
            "https://player.test/embed/9"
        );
    }

    #[test]
    fn test_iframe_missing() {
        assert!(matches!(
            extract_iframe_src("<main><iframe></iframe></main>"),
            Err(Error::IframeNotFound)
        ));
        assert!(matches!(
            extract_iframe_src("<p>nothing here</p>"),
            Err(Error::IframeNotFound)
        ));
    }
}
