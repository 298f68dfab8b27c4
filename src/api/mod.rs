//! HTTP client for the Pals API.
//!
//! - [`ApiClient`] sends requests with the session proof attached and turns
//!   failures into [`ApiError`](crate::error::ApiError)
//! - [`endpoints`] has one typed request builder per API route
//! - [`models`] has the response shapes

mod client;
pub mod endpoints;
pub mod models;

pub use client::{ApiClient, AUTH_HEADER, DEFAULT_TIMEOUT};
pub use endpoints::Endpoint;
