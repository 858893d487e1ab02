use super::policy::{ProxyTargets, RewritePolicy};
use crate::hls;

/// Context for transforming a playlist.
#[derive(Debug, Clone)]
pub struct TransformContext {
    /// URL the playlist was fetched from; relative references resolve against it.
    pub base_url: String,

    pub policy: RewritePolicy,

    pub targets: ProxyTargets,
}

impl TransformContext {
    pub fn new(base_url: impl Into<String>, policy: RewritePolicy, targets: ProxyTargets) -> Self {
        Self {
            base_url: base_url.into(),
            policy,
            targets,
        }
    }

    /// Resolve a playlist reference against the playlist URL.
    pub fn resolve_url(&self, reference: &str) -> String {
        hls::resolve_url(reference, &self.base_url)
    }

    /// Resolve a reference and route it through the policy's proxy.
    pub fn proxy_url(&self, reference: &str) -> String {
        let resolved = self.resolve_url(reference);
        self.policy.proxy_reference(&resolved, &self.targets)
    }
}
