//! Errors for this crate.

use reqwest::{Response, StatusCode};
use serde_json::Value;
use std::fmt;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[derive(thiserror::Error, Debug)]
pub enum InvalidServerUrl {
    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),

    #[error("Given URL must not end with \"/\": {0}")]
    TrailingSlash(String),
}

aliri_braid::from_infallible!(InvalidServerUrl);

/// Errors representing failed interactions with a Nextcloud server.
#[derive(thiserror::Error, Debug)]
pub enum NextcloudError {
    /// Error response from a Nextcloud app endpoint.
    #[error("{0}")]
    Api(ErrorDetails),

    /// Error response from a deck endpoint.
    #[error("deck: {0}")]
    Deck(ErrorDetails),

    /// The login poll budget ran out before anyone approved the login.
    #[error("{0}")]
    PollingExhausted(ErrorDetails),

    /// Network, timeout or decoding failure without an error response from
    /// the server.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl NextcloudError {
    /// Status and context of the failed request, if the server responded.
    pub fn details(&self) -> Option<&ErrorDetails> {
        match self {
            NextcloudError::Api(details)
            | NextcloudError::Deck(details)
            | NextcloudError::PollingExhausted(details) => Some(details),
            NextcloudError::Transport(_) => None,
        }
    }

    /// Whether this error was produced from a non-2xx HTTP response, as
    /// opposed to a failure of the transport itself.
    pub fn is_status_error(&self) -> bool {
        self.details().is_some()
    }
}

/// What the server said when it rejected a request.
#[derive(Debug)]
pub struct ErrorDetails {
    pub status: StatusCode,
    pub message: String,
    pub url: String,
    pub timestamp: OffsetDateTime,
    /// The response body, JSON-decoded when possible.
    pub body: Option<Value>,
}

impl ErrorDetails {
    pub(crate) async fn from_response(res: Response) -> Self {
        let status = res.status();
        let message = status
            .canonical_reason()
            .unwrap_or("unknown reason")
            .to_string();
        let url = res.url().to_string();
        let text = res.text().await.unwrap_or_default();
        let body = if text.is_empty() {
            None
        } else {
            Some(serde_json::from_str(&text).unwrap_or(Value::String(text)))
        };
        Self {
            status,
            message,
            url,
            timestamp: OffsetDateTime::now_utc(),
            body,
        }
    }
}

impl fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timestamp = self.timestamp.format(&Rfc3339).map_err(|_| fmt::Error)?;
        write!(
            f,
            "request returned {} at {} ({}): {}",
            self.status, self.url, timestamp, self.message
        )?;
        if let Some(body) = &self.body {
            write!(f, "; body: {}", body)?;
        }
        Ok(())
    }
}

/// How a resource family turns a rejected request into its own error value.
pub(crate) type ErrorMapper = fn(ErrorDetails) -> NextcloudError;

pub(crate) fn map_api_error(details: ErrorDetails) -> NextcloudError {
    NextcloudError::Api(details)
}

/// Pass 2xx responses through; read anything else into a mapped error.
pub(crate) async fn check(
    res: Response,
    map_error: ErrorMapper,
) -> Result<Response, NextcloudError> {
    if res.status().is_success() {
        Ok(res)
    } else {
        Err(map_error(ErrorDetails::from_response(res).await))
    }
}
