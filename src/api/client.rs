//! The API client.

use super::endpoints::{ApplyAction, Endpoint, SendFriendRequest};
use crate::domain::{RelationAction, UniqueId};
use crate::error::{ApiError, ApiResult};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Header carrying the host's session proof on every request.
pub const AUTH_HEADER: &str = "X-Telegram-Init-Data";

/// Request timeout used when the configuration does not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the Pals API.
///
/// Cheap to clone: the underlying `reqwest::Client` shares its connection
/// pool, so loads running in spawned tasks each take their own copy.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Origin of the API, e.g. `https://pals.example.com`
    base_url: String,
    /// Session proof reported by the host bridge
    init_data: String,
    /// Reusable HTTP client
    client: Client,
    /// Additional headers sent with every request
    extra_headers: Vec<(String, String)>,
}

impl ApiClient {
    /// Create a client with the default timeout.
    pub fn new(base_url: impl Into<String>, init_data: impl Into<String>) -> Self {
        Self::with_timeout(base_url, init_data, DEFAULT_TIMEOUT)
    }

    /// Create a client whose requests give up after `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        init_data: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });

        Self {
            base_url: base_url.into(),
            init_data: init_data.into(),
            client,
            extra_headers: Vec::new(),
        }
    }

    /// Add a header to every request.
    ///
    /// `Content-Type` and the session proof header cannot be overridden.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.push((name.into(), value.into()));
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> ApiResult<String> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ApiError::InvalidUrl(self.base_url.clone()));
        }
        Ok(format!("{}{}", self.base_url.trim_end_matches('/'), path))
    }

    /// Send a request and return the decoded JSON body.
    ///
    /// Returns `Ok(None)` for 204 No Content and for empty success bodies.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> ApiResult<Option<Value>> {
        let url = self.url(path)?;
        debug!(%method, %url, "API request");

        let mut builder = self.client.request(method.clone(), &url);
        for (name, value) in &self.extra_headers {
            if name.eq_ignore_ascii_case(CONTENT_TYPE.as_str())
                || name.eq_ignore_ascii_case(AUTH_HEADER)
            {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = builder
            .header(CONTENT_TYPE, "application/json")
            .header(AUTH_HEADER, self.init_data.as_str());
        if let Some(body) = body {
            builder = builder.body(body.to_string());
        }

        let response = builder.send().await.map_err(|source| {
            warn!(%method, %url, "API request did not complete: {}", source);
            ApiError::Transport {
                url: url.clone(),
                source,
            }
        })?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        if !status.is_success() {
            let err = ApiError::from_status(status.as_u16(), &bytes);
            warn!(
                %method,
                %url,
                status = status.as_u16(),
                category = %err.category(),
                "API request failed: {}",
                err
            );
            return Err(err);
        }

        if status == StatusCode::NO_CONTENT || bytes.is_empty() {
            return Ok(None);
        }

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| ApiError::Decode { url, source })
    }

    /// Send a typed request and decode its response.
    pub async fn send<E: Endpoint>(&self, endpoint: &E) -> ApiResult<E::Response> {
        let path = endpoint.path();
        let body = endpoint.body();
        let value = self.call(endpoint.method(), &path, body.as_ref()).await?;

        serde_json::from_value(value.unwrap_or(Value::Null)).map_err(|source| ApiError::Decode {
            url: self.url(&path).unwrap_or(path),
            source,
        })
    }

    /// Apply a friendship or blocking operation to `target`.
    pub async fn apply_relation(&self, action: RelationAction, target: &UniqueId) -> ApiResult<()> {
        match ApplyAction::new(action, target) {
            Some(endpoint) => self.send(&endpoint).await.map(|_| ()),
            None => self
                .send(&SendFriendRequest { target })
                .await
                .map(|_| ()),
        }
    }
}
