use super::{credentials::SessionCredentials, page, source::SourceReference};
use crate::{
    Error, Result,
    hls::resolve_url,
    proxy::{ProxyClient, SiteHeaders},
};

/// Resolves a source URL into an authenticated playlist URL.
///
/// Every call scrapes from scratch; nothing is cached between requests.
#[derive(Clone)]
pub struct SessionResolver {
    client: ProxyClient,
}

impl SessionResolver {
    pub fn new(client: ProxyClient) -> Self {
        Self { client }
    }

    /// Resolve the playlist URL for a source, failing on the first error.
    pub async fn resolve(&self, source: &str) -> Result<String> {
        let body = match SourceReference::classify(source) {
            SourceReference::IframeEmbed { url, site_url } => {
                self.fetch_embed_page(&url, &site_url).await?
            }
            SourceReference::DirectPage(url) => self.client.fetch_text(&url, None).await?,
            SourceReference::Unsupported(url) => return Err(Error::UnsupportedSource(url)),
        };

        let credentials = SessionCredentials::extract(&body)?;
        let manifest_url = credentials.manifest_url();

        tracing::info!(
            "Resolved session for {} (fhd: {})",
            source,
            credentials.high_definition
        );
        tracing::debug!("Manifest URL: {}", manifest_url);

        Ok(manifest_url)
    }

    /// Look up the site's asset version.
    pub async fn fetch_version(&self, site_url: &str) -> Result<String> {
        let headers = SiteHeaders::site(site_url);
        let html = self
            .client
            .fetch_text(&format!("{}/request-a-title", site_url), Some(&headers))
            .await?;

        page::extract_version(&html)
    }

    /// Follow an embed URL to the player page that carries the session script.
    async fn fetch_embed_page(&self, url: &str, site_url: &str) -> Result<String> {
        let version = self.fetch_version(site_url).await?;
        tracing::debug!("Site {} version {}", site_url, version);

        let headers = SiteHeaders::inertia(&version);
        let html = self.client.fetch_text(url, Some(&headers)).await?;

        let src = resolve_url(&page::extract_iframe_src(&html)?, url);
        tracing::debug!("Embed {} -> player {}", url, src);

        self.client.fetch_text(&src, Some(&headers)).await
    }
}
