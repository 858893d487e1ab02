use crate::stream::processor::DEFAULT_WORKERS;
use std::{env, time::Duration};

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Relay that streams segment and key bytes; `?url=` is appended verbatim.
    pub relay_base_url: String,
    /// Where main playlists send nested references; `?url=` is appended.
    pub secondary_endpoint: String,
    /// Referer and Origin sent when fetching secondary playlists.
    pub site_origin: String,
    pub user_agent: String,
    /// Deadline for all network work of a single request.
    pub request_timeout: Duration,
    pub rewrite_workers: usize,
    pub cors_allowed_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            relay_base_url: "http://localhost:8080/proxy/".to_string(),
            secondary_endpoint: "/api/v1/vixcloud/secondary".to_string(),
            site_origin: "https://vixsrc.to/".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(30),
            rewrite_workers: DEFAULT_WORKERS,
            cors_allowed_origin: "*".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(port) => port.parse()?,
            Err(_) => defaults.port,
        };

        let request_timeout = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(secs) => Duration::from_secs(secs.parse()?),
            Err(_) => defaults.request_timeout,
        };

        let rewrite_workers = match env::var("REWRITE_WORKERS") {
            Ok(workers) => workers.parse::<usize>()?.max(1),
            Err(_) => defaults.rewrite_workers,
        };

        Ok(Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port,
            relay_base_url: env::var("RELAY_BASE_URL").unwrap_or(defaults.relay_base_url),
            secondary_endpoint: env::var("SECONDARY_ENDPOINT")
                .unwrap_or(defaults.secondary_endpoint),
            site_origin: env::var("SITE_ORIGIN").unwrap_or(defaults.site_origin),
            user_agent: env::var("USER_AGENT").unwrap_or(defaults.user_agent),
            request_timeout,
            rewrite_workers,
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or(defaults.cors_allowed_origin),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
