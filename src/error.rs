use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing URL parameter")]
    MissingUrl,

    #[error("Unsupported URL format: {0}")]
    UnsupportedSource(String),

    #[error("Failed to resolve site version: {0}")]
    VersionResolution(String),

    #[error("iframe not found")]
    IframeNotFound,

    #[error("token not found")]
    TokenNotFound,

    #[error("expires not found")]
    ExpiresNotFound,

    #[error("server URL not found")]
    ServerUrlNotFound,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Failed to fetch URL: {url} - {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("Fetch timeout for URL: {0}")]
    FetchTimeout(String),

    #[error("Request deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    #[error("Request canceled: {0}")]
    Canceled(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    code: String,
}

impl Error {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingUrl => "MISSING_URL",
            Self::UnsupportedSource(_) => "UNSUPPORTED_SOURCE",
            Self::VersionResolution(_) => "VERSION_RESOLUTION",
            Self::IframeNotFound => "IFRAME_NOT_FOUND",
            Self::TokenNotFound => "TOKEN_NOT_FOUND",
            Self::ExpiresNotFound => "EXPIRES_NOT_FOUND",
            Self::ServerUrlNotFound => "SERVER_URL_NOT_FOUND",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::FetchFailed { .. } => "FETCH_FAILED",
            Self::FetchTimeout(_) => "FETCH_TIMEOUT",
            Self::DeadlineExceeded(_) => "DEADLINE_EXCEEDED",
            Self::Canceled(_) => "CANCELED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Only a missing input is the client's fault; every core failure is a 500.
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingUrl => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::FetchTimeout(e.url().map(|u| u.to_string()).unwrap_or_default())
        } else {
            Self::FetchFailed {
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
                reason: e.to_string(),
            }
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::Canceled(e.to_string())
    }
}
