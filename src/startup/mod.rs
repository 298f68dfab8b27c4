//! Startup: configuration and logging.
//!
//! # Components
//!
//! - [`config`] - [`AppConfig`], read from the environment
//! - [`logging`] - tracing subscriber writing to a log file
//!
//! # Usage
//!
//! ```ignore
//! use pals::startup::{init_logging, AppConfig};
//!
//! let config = AppConfig::from_env();
//! init_logging(&config)?;
//! ```

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use logging::init_logging;
