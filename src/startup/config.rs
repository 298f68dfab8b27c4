//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_TIMEOUT;

/// Default API origin, matching the development server.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "pals=info";

/// Configuration for a client session.
///
/// Use the builder methods to customize, or [`AppConfig::from_env`].
///
/// # Example
///
/// ```
/// use pals::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_api_url("https://pals.example.com")
///     .with_init_data("query_id=...&user=...&hash=...");
/// assert!(config.init_data.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API origin (PALS_API_URL)
    pub api_url: String,
    /// Session proof sent with every request (PALS_INIT_DATA)
    pub init_data: Option<String>,
    /// Dev mode - synthesize a mock session proof when none is set (PALS_DEV=1)
    pub dev_mode: bool,
    /// User id of the mock session (PALS_DEV_USER_ID)
    pub dev_user_id: i64,
    /// Username of the mock session (PALS_DEV_USERNAME)
    pub dev_username: String,
    /// Per-request timeout (PALS_TIMEOUT_SECS)
    pub request_timeout: Duration,
    /// tracing filter directive (PALS_LOG)
    pub log_filter: String,
    /// Log file override (PALS_LOG_FILE)
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            init_data: None,
            dev_mode: false,
            dev_user_id: 1,
            dev_username: "dev".to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_init_data(mut self, init_data: impl Into<String>) -> Self {
        self.init_data = Some(init_data.into());
        self
    }

    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value. Unset, empty and unparseable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get("PALS_API_URL") {
            config.api_url = url.trim().to_string();
        }
        config.init_data = get("PALS_INIT_DATA");
        config.dev_mode = get("PALS_DEV")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);
        if let Some(id) = get("PALS_DEV_USER_ID").and_then(|v| v.trim().parse().ok()) {
            config.dev_user_id = id;
        }
        if let Some(name) = get("PALS_DEV_USERNAME") {
            config.dev_username = name;
        }
        if let Some(secs) = get("PALS_TIMEOUT_SECS").and_then(|v| v.trim().parse::<u64>().ok()) {
            if secs > 0 {
                config.request_timeout = Duration::from_secs(secs);
            }
        }
        if let Some(filter) = get("PALS_LOG") {
            config.log_filter = filter;
        }
        config.log_file = get("PALS_LOG_FILE").map(PathBuf::from);

        config
    }

    /// Where log output goes: the override, or `<cache dir>/pals/pals.log`.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| dirs::cache_dir().map(|dir| dir.join("pals").join("pals.log")))
    }
}
