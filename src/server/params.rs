use crate::{Error, Result};
use serde::Deserialize;

/// Query parameters shared by both manifest endpoints.
#[derive(Debug, Deserialize)]
pub struct UrlParams {
    /// Source page or playlist URL.
    #[serde(default)]
    pub url: Option<String>,
}

impl UrlParams {
    /// The `url` parameter, rejected when absent or empty.
    pub fn require_url(self) -> Result<String> {
        match self.url {
            Some(url) if !url.is_empty() => Ok(url),
            _ => Err(Error::MissingUrl),
        }
    }
}
