pub mod content_proxy;
pub mod tag_uri_proxy;

use super::{classifier::LineType, context::TransformContext};

pub use content_proxy::ContentUrlProxyRule;
pub use tag_uri_proxy::TagUriProxyRule;

/// Trait for transform rules.
///
/// Rules see one line at a time and must not depend on neighbouring lines:
/// the processor hands lines to them from several workers at once.
pub trait TransformRule: Send + Sync {
    /// Check if this rule should be applied.
    fn matches(&self, line_type: &LineType, context: &TransformContext) -> bool;

    /// Transform the line into exactly one output line.
    fn transform(&self, line: &str, context: &TransformContext) -> String;
}

/// Create default set of transform rules.
pub fn default_rules() -> Vec<Box<dyn TransformRule>> {
    vec![Box::new(TagUriProxyRule), Box::new(ContentUrlProxyRule)]
}
