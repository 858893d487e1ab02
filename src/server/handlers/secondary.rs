use axum::{
    extract::{Query, State},
    response::Response,
};

use super::{rewritten_playlist, with_deadline};
use crate::{
    Result,
    proxy::SiteHeaders,
    server::{params::UrlParams, state::AppState},
    stream::RewritePolicy,
};

/// Handle GET /api/v1/vixcloud/secondary requests.
///
/// Downloads a nested playlist and points its segments and keys at the relay.
pub async fn handle_secondary(
    State(state): State<AppState>,
    Query(params): Query<UrlParams>,
) -> Result<Response> {
    let target_url = params.require_url()?;
    tracing::info!("Secondary manifest request: {}", target_url);

    let headers = SiteHeaders::playlist(&state.config.site_origin, &state.config.user_agent);
    let content = with_deadline(
        state.config.request_timeout,
        state.client.fetch_text(&target_url, Some(&headers)),
    )
    .await?;

    rewritten_playlist(&state, content, target_url, RewritePolicy::Secondary).await
}
