//! Error category classification.
//!
//! Categories are used for log fields and for the hint line under an error
//! page. They never drive retries: the client does not retry.

use std::fmt;

/// High-level categorization of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection refused, DNS, timeout.
    Network,

    /// The session proof was missing or rejected (401/403).
    Auth,

    /// The server failed (5xx) or answered with something unreadable.
    Server,

    /// The server rejected the request itself (other 4xx).
    Client,

    /// Missing or invalid settings.
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Auth => "auth",
            ErrorCategory::Server => "server",
            ErrorCategory::Client => "client",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and reload",
            ErrorCategory::Auth => "Reopen the app from the chat to refresh your session",
            ErrorCategory::Server => "The server may be having trouble. Please reload later",
            ErrorCategory::Client => "Reload to start again from the main menu",
            ErrorCategory::Configuration => "Check PALS_API_URL and PALS_INIT_DATA",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
