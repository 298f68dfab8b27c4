//! API request errors.

use super::ErrorCategory;
use serde_json::Value;
use thiserror::Error;

/// Title of the page that replaces the screen when a request fails.
pub const API_ERROR_TITLE: &str = "API Error";

/// A failed request to the Pals API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    ///
    /// `message` is the server's `detail` when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A success response whose body is not the expected JSON.
    #[error("Unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL cannot be joined with an endpoint path.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Build the error for a non-success response from its raw body.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        ApiError::Status {
            status,
            message: detail_message(status, body),
        }
    }

    /// Title for the error page.
    pub fn title(&self) -> &'static str {
        API_ERROR_TITLE
    }

    /// Human-readable message for the error page.
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Status { status, .. } => match *status {
                401 | 403 => ErrorCategory::Auth,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Client,
            },
            ApiError::Transport { .. } => ErrorCategory::Network,
            ApiError::Decode { .. } => ErrorCategory::Server,
            ApiError::InvalidUrl(_) => ErrorCategory::Configuration,
        }
    }
}

/// Extract the human-readable message from an error response body.
///
/// The server reports failures as `{"detail": "..."}`. Request validation
/// failures carry a list of `{"msg": "..."}` records in `detail` instead;
/// their messages are joined. Anything else falls back to a generic message
/// naming the status code.
pub fn detail_message(status: u16, body: &[u8]) -> String {
    let generic = || format!("HTTP error, status={}", status);

    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return generic();
    };

    match value.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Array(records)) => {
            let messages: Vec<&str> = records
                .iter()
                .filter_map(|record| record.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                generic()
            } else {
                messages.join("; ")
            }
        }
        _ => generic(),
    }
}
