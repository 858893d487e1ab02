use axum::{
    extract::{Query, State},
    response::Response,
};

use super::{rewritten_playlist, with_deadline};
use crate::{
    Error, Result,
    proxy::SiteHeaders,
    server::{params::UrlParams, state::AppState},
    stream::RewritePolicy,
};

/// Handle GET /api/v1/vixcloud/manifest requests.
///
/// Resolves the session for the source page, downloads the first-level
/// playlist and points every reference at the secondary endpoint.
pub async fn handle_manifest(
    State(state): State<AppState>,
    Query(params): Query<UrlParams>,
) -> Result<Response> {
    let source_url = params.require_url()?;
    tracing::info!("Manifest request: {}", source_url);

    let (manifest_url, content) = with_deadline(state.config.request_timeout, async {
        let manifest_url = state.resolver.resolve(&source_url).await?;

        let headers = SiteHeaders::referer(&source_url);
        let content = state
            .client
            .fetch_text(&manifest_url, Some(&headers))
            .await?;

        Ok::<_, Error>((manifest_url, content))
    })
    .await?;

    rewritten_playlist(&state, content, manifest_url, RewritePolicy::Main).await
}
