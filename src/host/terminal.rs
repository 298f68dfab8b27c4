//! Terminal host: the user's session proof comes from configuration and
//! alerts/prompts are drawn as overlays by the UI.

use super::{HostBridge, Modal, Prompt};
use crate::error::HostError;
use crate::startup::AppConfig;
use serde_json::json;
use std::collections::VecDeque;
use tracing::{debug, info};

/// Query id the API accepts without signature checks in local development.
pub const MOCK_QUERY_ID: &str = "MOCK_FOR_LOCAL_DEV";

/// Build the unsigned session proof the development server accepts.
pub fn mock_init_data(user_id: i64, username: &str) -> String {
    let user = json!({
        "id": user_id,
        "first_name": username,
        "username": username,
    });
    format!(
        "query_id={}&user={}",
        MOCK_QUERY_ID,
        urlencoding::encode(&user.to_string())
    )
}

/// Host bridge for running in a terminal.
#[derive(Debug, Clone)]
pub struct TerminalHost {
    init_data: String,
    ready: bool,
    expanded: bool,
    /// Shown overlay first; further alerts wait their turn.
    modals: VecDeque<Modal>,
}

impl TerminalHost {
    /// Create a host around an existing session proof.
    pub fn new(init_data: impl Into<String>) -> Self {
        Self {
            init_data: init_data.into(),
            ready: false,
            expanded: false,
            modals: VecDeque::new(),
        }
    }

    /// Work out the session proof from configuration.
    ///
    /// Explicit init data wins. Without it, dev mode synthesizes the mock
    /// proof. Anything else means the host capability is absent.
    pub fn detect(config: &AppConfig) -> Result<Self, HostError> {
        match config.init_data.as_deref().map(str::trim) {
            Some(init_data) if !init_data.is_empty() => {
                if !init_data.contains('=') {
                    return Err(HostError::MalformedInitData(
                        "expected a query string such as `query_id=...&user=...&hash=...`"
                            .to_string(),
                    ));
                }
                Ok(Self::new(init_data))
            }
            _ if config.dev_mode => {
                info!(
                    user_id = config.dev_user_id,
                    "No init data configured, using the development mock session"
                );
                Ok(Self::new(mock_init_data(
                    config.dev_user_id,
                    &config.dev_username,
                )))
            }
            _ => Err(HostError::MissingInitData),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Number of overlays shown or waiting.
    pub fn pending_modals(&self) -> usize {
        self.modals.len()
    }
}

impl HostBridge for TerminalHost {
    fn platform(&self) -> &str {
        "terminal"
    }

    fn ready(&mut self) {
        self.ready = true;
        info!("Host ready");
    }

    fn expand(&mut self) {
        // The alternate screen already covers the whole terminal.
        self.expanded = true;
        debug!("Host expanded");
    }

    fn init_data(&self) -> &str {
        &self.init_data
    }

    fn show_alert(&mut self, message: &str) {
        debug!(message, "Alert");
        self.modals.push_back(Modal::Alert {
            message: message.to_string(),
        });
    }

    fn show_prompt(&mut self, prompt: Prompt) {
        debug!(purpose = ?prompt.purpose, "Prompt");
        self.modals.push_back(Modal::prompt(prompt));
    }

    fn modal(&self) -> Option<&Modal> {
        self.modals.front()
    }

    fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modals.front_mut()
    }

    fn close_modal(&mut self) -> Option<Modal> {
        self.modals.pop_front()
    }
}
