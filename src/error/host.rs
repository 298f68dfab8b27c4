//! Host bridge errors.

use thiserror::Error;

/// Why the host environment could not be brought up.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// No session proof is available, so no request could be authenticated.
    #[error("This app must be opened from the chat client (no init data was provided). Set PALS_INIT_DATA, or PALS_DEV=1 for local development.")]
    MissingInitData,

    /// The configured session proof is not a query string the server can parse.
    #[error("The provided init data is malformed: {0}")]
    MalformedInitData(String),
}
