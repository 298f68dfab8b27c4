//! AppMessage enum for async communication within the application.

use crate::domain::Route;
use crate::error::ApiError;
use crate::views::Rendered;
use std::any::Any;

/// Messages sent back to the UI loop by spawned tasks.
#[derive(Debug)]
pub enum AppMessage {
    /// A view load finished, successfully or not.
    ViewLoaded {
        /// Load generation the task was started with. Anything older than
        /// the app's current generation is stale.
        generation: u64,
        route: Route,
        result: Result<Rendered, ApiError>,
        /// Confirmation from a mutation that ran before the render.
        notice: Option<String>,
    },

    /// A view load panicked before it could report.
    LoadPanicked {
        generation: u64,
        route: Route,
        message: String,
    },
}

/// Text of a caught panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
