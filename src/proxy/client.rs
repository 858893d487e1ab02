use crate::{Error, Result, config::Config};
use reqwest::Client;
use std::{collections::HashMap, time::Duration};

/// HTTP client for fetching pages and playlists from upstream servers.
///
/// Cloning is cheap: every clone shares the same connection pool.
#[derive(Clone)]
pub struct ProxyClient {
    client: Client,
}

impl ProxyClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Fetch a URL and return its body as text.
    ///
    /// The HTTP status is not inspected: error pages come back as ordinary
    /// bodies. Caller headers override the client's default user agent.
    pub async fn fetch_text(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<String> {
        let mut request = self.client.get(url);

        if let Some(headers) = headers {
            for (key, value) in headers {
                request = request.header(key.as_str(), value.as_str());
            }
        }

        let response = request.send().await?;
        tracing::debug!("GET {} -> {}", url, response.status());

        Ok(response.text().await?)
    }
}
