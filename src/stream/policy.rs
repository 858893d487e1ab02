/// Which hop of the proxy chain a rewritten playlist points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewritePolicy {
    /// First-level playlist: references go to the secondary endpoint, percent-encoded.
    Main,
    /// Nested playlist: references go to the segment relay, appended raw.
    Secondary,
}

/// Destinations that rewritten references are routed through.
#[derive(Debug, Clone)]
pub struct ProxyTargets {
    pub secondary_endpoint: String,
    pub relay_base_url: String,
}

impl ProxyTargets {
    pub fn new(secondary_endpoint: impl Into<String>, relay_base_url: impl Into<String>) -> Self {
        Self {
            secondary_endpoint: secondary_endpoint.into(),
            relay_base_url: relay_base_url.into(),
        }
    }
}

impl RewritePolicy {
    /// Build the proxied reference for an absolute URL.
    ///
    /// The relay parses its `url` parameter raw, so the secondary form must
    /// stay unencoded.
    pub fn proxy_reference(&self, absolute: &str, targets: &ProxyTargets) -> String {
        match self {
            Self::Main => format!(
                "{}?url={}",
                targets.secondary_endpoint,
                urlencoding::encode(absolute)
            ),
            Self::Secondary => format!("{}?url={}", targets.relay_base_url, absolute),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Secondary => "secondary",
        }
    }
}
