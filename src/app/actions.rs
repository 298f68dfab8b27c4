//! Action dispatch and prompt answers.

use super::{App, Mutation};
use crate::api::endpoints::{MAX_BIO_LEN, MAX_MESSAGE_LEN};
use crate::domain::{Action, Route, SearchInput};
use crate::host::{Prompt, PromptAnswer, PromptPurpose};
use tracing::debug;

/// Longest text accepted by the search prompt.
const SEARCH_INPUT_LEN: usize = 32;

pub const INVALID_ID_ALERT: &str = "Please enter a valid 8-digit user ID.";

impl App {
    /// Perform what a binding on screen asks for.
    pub fn dispatch(&mut self, action: Action) {
        debug!(?action, "Dispatch");
        match action {
            Action::Open(route) => self.navigate_to(route),
            Action::Back => self.go_back(),
            Action::Search => self.host.show_prompt(Prompt::text(
                PromptPurpose::Search,
                "Find user",
                "Enter an 8-digit user ID",
                SEARCH_INPUT_LEN,
            )),
            Action::Apply { action, target } => {
                self.mutate(Mutation::Relation { action, target })
            }
            Action::SendMessage => self.send_message(),
            Action::React { partner, emoji } => self.mutate(Mutation::React { partner, emoji }),
            Action::DeleteChat { partner } => self.host.show_prompt(Prompt::confirm(
                PromptPurpose::DeleteChat(partner),
                "Delete chat",
                "Delete this conversation for good?",
            )),
            Action::EditBio => {
                let current = self
                    .session
                    .as_ref()
                    .map(|s| s.bio.clone())
                    .unwrap_or_default();
                self.host.show_prompt(
                    Prompt::text(
                        PromptPurpose::EditBio,
                        "Edit bio",
                        format!("Tell others about yourself (max {} characters)", MAX_BIO_LEN),
                        MAX_BIO_LEN,
                    )
                    .with_initial(current),
                );
            }
            Action::Reload => self.reload(),
            Action::Quit => self.should_quit = true,
        }
        self.mark_dirty();
    }

    /// Receive the user's answer to a prompt.
    pub fn resolve_prompt(&mut self, purpose: PromptPurpose, answer: PromptAnswer) {
        debug!(?purpose, ?answer, "Prompt answered");
        match (purpose, answer) {
            (_, PromptAnswer::Cancelled) => {}
            (PromptPurpose::Search, PromptAnswer::Text(raw)) => match SearchInput::parse(&raw) {
                SearchInput::Empty => {}
                SearchInput::Invalid(_) => self.host.show_alert(INVALID_ID_ALERT),
                SearchInput::Valid(uid) => self.navigate_to(Route::Profile { uid }),
            },
            (PromptPurpose::EditBio, PromptAnswer::Text(raw)) => {
                let bio = raw.trim().to_string();
                self.mutate(Mutation::UpdateBio { bio });
            }
            (PromptPurpose::DeleteChat(partner), PromptAnswer::Confirmed) => {
                // The conversation is gone afterwards, so render what came before it.
                let chat = Route::Chat {
                    partner: partner.clone(),
                };
                self.mutate_and_leave(Mutation::DeleteChat { partner }, chat);
            }
            (purpose, answer) => {
                debug!(?purpose, ?answer, "Ignoring answer of the wrong kind");
            }
        }
        self.mark_dirty();
    }

    /// Post the composer's draft, then reload the conversation.
    fn send_message(&mut self) {
        let Some(composer) = self
            .screen
            .as_page_mut()
            .and_then(|page| page.composer.as_mut())
        else {
            return;
        };
        if composer.disabled {
            return;
        }

        let text = composer.draft.trim().to_string();
        if text.is_empty() {
            return;
        }
        if text.chars().count() > MAX_MESSAGE_LEN {
            self.host.show_alert(&format!(
                "Message is too long (max {} characters).",
                MAX_MESSAGE_LEN
            ));
            return;
        }

        composer.draft.clear();
        composer.disabled = true;
        let partner = composer.partner.clone();
        self.mutate(Mutation::SendMessage { partner, text });
    }
}
