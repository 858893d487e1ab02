pub mod classifier;
pub mod context;
pub mod policy;
pub mod processor;
pub mod rules;

pub use classifier::{LineClassifier, LineType};
pub use context::TransformContext;
pub use policy::{ProxyTargets, RewritePolicy};
pub use processor::StreamProcessor;

/// Rewrite a playlist so every reference goes through the policy's proxy.
pub fn rewrite(
    document: &str,
    base_url: &str,
    policy: RewritePolicy,
    targets: ProxyTargets,
    workers: usize,
) -> String {
    let context = TransformContext::new(base_url, policy, targets);
    StreamProcessor::with_default_rules(context)
        .workers(workers)
        .process(document)
}
