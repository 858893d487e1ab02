use crate::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'token':\s*'(\w+)'").expect("valid token regex"));
static EXPIRES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'expires':\s*'(\d+)'").expect("valid expires regex"));
static SERVER_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"url:\s*'([^']+)'").expect("valid server URL regex"));

const FHD_MARKER: &str = "window.canPlayFHD = true";

/// Playback credentials scraped from the player page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCredentials {
    pub token: String,
    pub expires: String,
    pub server_url: String,
    pub high_definition: bool,
}

fn first_capture(regex: &Regex, body: &str) -> Option<String> {
    regex
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

impl SessionCredentials {
    /// Extract all fields from a player page body.
    ///
    /// Each field is probed independently; when several are missing the
    /// error reported is the first of token, expires, server URL.
    pub fn extract(body: &str) -> Result<Self> {
        let token = first_capture(&TOKEN_REGEX, body);
        let expires = first_capture(&EXPIRES_REGEX, body);
        let server_url = first_capture(&SERVER_URL_REGEX, body);

        Ok(Self {
            token: token.ok_or(Error::TokenNotFound)?,
            expires: expires.ok_or(Error::ExpiresNotFound)?,
            server_url: server_url.ok_or(Error::ServerUrlNotFound)?,
            high_definition: body.contains(FHD_MARKER),
        })
    }

    /// Build the playlist URL carrying the session query parameters.
    pub fn manifest_url(&self) -> String {
        let separator = if self.server_url.contains("?b=1") {
            '&'
        } else {
            '?'
        };

        let mut url = format!(
            "{}{}token={}&expires={}",
            self.server_url, separator, self.token, self.expires
        );
        if self.high_definition {
            url.push_str("&h=1");
        }
        url
    }
}
