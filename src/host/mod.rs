//! Host bridge abstraction.
//!
//! The client runs inside a host environment that owns the user's identity
//! and presents native prompts. [`HostBridge`] is the seam: the app asks it
//! for the session proof and hands it alerts and prompts to show. Prompt
//! answers come back through a single callback,
//! [`App::resolve_prompt`](crate::app::App::resolve_prompt).
//!
//! [`TerminalHost`] is the implementation used by the binary: alerts and
//! prompts become modal overlays drawn over the current page.

mod terminal;

pub use terminal::{mock_init_data, TerminalHost, MOCK_QUERY_ID};

use crate::domain::UniqueId;

/// What a prompt's answer will be used for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPurpose {
    /// Look up a user by id.
    Search,
    /// Replace the session user's bio.
    EditBio,
    /// Confirm deleting the conversation with a partner.
    DeleteChat(UniqueId),
}

/// The kind of input a prompt collects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Free text, at most `max_len` characters.
    Text { max_len: usize },
    /// Yes or no.
    Confirm,
}

/// A question for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub purpose: PromptPurpose,
    pub title: String,
    pub message: String,
    pub kind: PromptKind,
    /// Text the input starts with.
    pub initial: String,
}

impl Prompt {
    pub fn text(
        purpose: PromptPurpose,
        title: impl Into<String>,
        message: impl Into<String>,
        max_len: usize,
    ) -> Self {
        Self {
            purpose,
            title: title.into(),
            message: message.into(),
            kind: PromptKind::Text { max_len },
            initial: String::new(),
        }
    }

    pub fn confirm(
        purpose: PromptPurpose,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            purpose,
            title: title.into(),
            message: message.into(),
            kind: PromptKind::Confirm,
            initial: String::new(),
        }
    }

    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = initial.into();
        self
    }
}

/// The user's answer to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAnswer {
    Text(String),
    Confirmed,
    Cancelled,
}

/// An overlay currently shown by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Alert { message: String },
    Prompt { prompt: Prompt, input: String },
}

impl Modal {
    pub fn prompt(prompt: Prompt) -> Self {
        let input = prompt.initial.clone();
        Modal::Prompt { prompt, input }
    }

    /// Append a typed character to a text prompt, respecting its limit.
    pub fn push_char(&mut self, c: char) {
        if let Modal::Prompt {
            prompt:
                Prompt {
                    kind: PromptKind::Text { max_len },
                    ..
                },
            input,
        } = self
        {
            if input.chars().count() < *max_len {
                input.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Modal::Prompt { input, .. } = self {
            input.pop();
        }
    }
}

/// Capabilities the client needs from its host environment.
pub trait HostBridge: Send {
    /// Name of the host, for logs and the diagnostic page.
    fn platform(&self) -> &str;

    /// Tell the host the client finished initializing.
    fn ready(&mut self);

    /// Ask the host to give the client its full display area.
    fn expand(&mut self);

    /// Proof of the user's session, attached to every API request.
    fn init_data(&self) -> &str;

    /// Show a message the user has to acknowledge.
    fn show_alert(&mut self, message: &str);

    /// Ask the user something. The answer arrives later through the app.
    fn show_prompt(&mut self, prompt: Prompt);

    /// The overlay currently shown, if any.
    fn modal(&self) -> Option<&Modal>;

    fn modal_mut(&mut self) -> Option<&mut Modal>;

    /// Dismiss the current overlay and return it.
    fn close_modal(&mut self) -> Option<Modal>;
}
