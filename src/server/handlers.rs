pub mod manifest;
pub mod secondary;

pub use manifest::handle_manifest;
pub use secondary::handle_secondary;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use std::{future::Future, time::Duration};

use crate::{
    Error, Result,
    server::state::AppState,
    stream::{self, RewritePolicy},
};

pub const HLS_CONTENT_TYPE: &str = "application/vnd.apple.mpegurl";

/// Run a request's network work under one deadline shared by every fetch in it.
pub(crate) async fn with_deadline<T, F>(deadline: Duration, work: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::time::timeout(deadline, work)
        .await
        .map_err(|_| Error::DeadlineExceeded(deadline))?
}

/// Rewrite a fetched playlist off the async runtime and wrap it as an HLS response.
pub(crate) async fn rewritten_playlist(
    state: &AppState,
    content: String,
    base_url: String,
    policy: RewritePolicy,
) -> Result<Response> {
    let targets = state.proxy_targets();
    let workers = state.config.rewrite_workers;

    let transformed = tokio::task::spawn_blocking(move || {
        stream::rewrite(&content, &base_url, policy, targets, workers)
    })
    .await?;

    tracing::debug!("Transformed {} manifest:\n{}", policy.as_str(), transformed);

    Ok(([(header::CONTENT_TYPE, HLS_CONTENT_TYPE)], transformed).into_response())
}
