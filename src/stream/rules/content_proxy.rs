use super::{LineType, TransformContext, TransformRule};

/// Rule for rewriting segment and nested playlist URLs.
pub struct ContentUrlProxyRule;

impl TransformRule for ContentUrlProxyRule {
    fn matches(&self, line_type: &LineType, _context: &TransformContext) -> bool {
        line_type.is_uri()
    }

    fn transform(&self, line: &str, context: &TransformContext) -> String {
        context.proxy_url(line.trim())
    }
}
