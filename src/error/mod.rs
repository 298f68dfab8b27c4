//! Error types for the Pals client.
//!
//! Two tiers of failure exist:
//!
//! - [`ApiError`]: a single request to the API failed. The app replaces the
//!   current screen with an error page and the view that issued the request
//!   stops rendering. Nothing is retried.
//! - Anything else that escapes a session (terminal I/O, a broken host) is a
//!   `color_eyre::Report` and ends up on the diagnostic page in `main`.
//!
//! [`ErrorCategory`] gives both a coarse classification for logging.

mod api;
mod category;
mod host;

pub use api::{detail_message, ApiError, API_ERROR_TITLE};
pub use category::ErrorCategory;
pub use host::HostError;

/// Result alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
