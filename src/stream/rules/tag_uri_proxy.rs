use super::{LineType, TransformContext, TransformRule};
use crate::hls::rewrite_uri_attributes;

/// Rule for rewriting the `URI=` attribute of #EXT-X-KEY and #EXT-X-MEDIA tags.
pub struct TagUriProxyRule;

impl TransformRule for TagUriProxyRule {
    fn matches(&self, line_type: &LineType, _context: &TransformContext) -> bool {
        *line_type == LineType::KeyOrMediaTag
    }

    fn transform(&self, line: &str, context: &TransformContext) -> String {
        rewrite_uri_attributes(line, |uri| context.proxy_url(uri)).into_owned()
    }
}
