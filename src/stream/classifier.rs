use super::policy::RewritePolicy;

/// Represents the type of a line in an M3U8 playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Tag whose `URI=` attribute is rewritten under the active policy.
    KeyOrMediaTag,
    /// Segment or nested playlist URL.
    ContentReference,
    /// Blank line, comment or any other tag.
    Passthrough,
}

impl LineType {
    pub fn is_uri(&self) -> bool {
        matches!(self, Self::ContentReference)
    }

    pub fn is_rewritable(&self) -> bool {
        !matches!(self, Self::Passthrough)
    }
}

/// Classifier for M3U8 lines.
pub struct LineClassifier;

impl LineClassifier {
    /// Classify a line from an M3U8 playlist under the given policy.
    pub fn classify(line: &str, policy: RewritePolicy) -> LineType {
        let line = line.trim();

        if line.is_empty() {
            return LineType::Passthrough;
        }

        if !line.starts_with('#') {
            return LineType::ContentReference;
        }

        let is_uri_tag = line.starts_with("#EXT-X-KEY:")
            || (policy == RewritePolicy::Main && line.starts_with("#EXT-X-MEDIA"));

        if is_uri_tag {
            LineType::KeyOrMediaTag
        } else {
            LineType::Passthrough
        }
    }
}
