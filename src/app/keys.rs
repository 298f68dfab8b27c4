//! Keyboard handling for the App.

use super::App;
use crate::domain::Action;
use crate::host::{Modal, PromptAnswer, PromptKind};
use crate::views::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which key map applies to the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyMode {
    Loading,
    Error,
    Composer,
    Page,
}

/// What a key does to the open modal.
enum ModalOutcome {
    Keep,
    Dismiss,
    Type(char),
    Erase,
    Answer(PromptAnswer),
}

impl App {
    /// Handle a key press. An open modal takes every key.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.host.modal().is_some() {
            self.handle_modal_key(key);
            return;
        }

        let mode = match &self.screen {
            Screen::Loading { .. } => KeyMode::Loading,
            Screen::Error(_) => KeyMode::Error,
            Screen::Page(page) if page.composer.is_some() => KeyMode::Composer,
            Screen::Page(_) => KeyMode::Page,
        };

        match mode {
            KeyMode::Loading => match key.code {
                KeyCode::Esc => self.go_back(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            KeyMode::Error => match key.code {
                KeyCode::Char('r') => self.dispatch(Action::Reload),
                KeyCode::Char('q') | KeyCode::Esc => self.dispatch(Action::Quit),
                _ => self.handle_selection_key(key),
            },
            KeyMode::Composer => self.handle_composer_key(key),
            KeyMode::Page => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc | KeyCode::Left => self.go_back(),
                _ => self.handle_selection_key(key),
            },
        }
    }

    /// Handle bracketed paste: the text goes to an open text prompt or the
    /// chat draft, with newlines flattened to spaces.
    pub fn handle_paste(&mut self, text: &str) {
        let text = text.replace(['\r', '\n'], " ");
        self.mark_dirty();
        if let Some(modal) = self.host.modal_mut() {
            for c in text.chars() {
                modal.push_char(c);
            }
            return;
        }
        self.edit_draft(|draft| draft.push_str(&text));
    }

    fn handle_selection_key(&mut self, key: KeyEvent) {
        let count = self.targets().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                if self.selected + 1 < count {
                    self.selected += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(binding) = self.selected_target() {
                    self.dispatch(binding.action);
                }
            }
            _ => {}
        }
    }

    /// On the chat page typing goes to the draft. Enter sends a non-empty
    /// draft and otherwise activates the selected binding.
    fn handle_composer_key(&mut self, key: KeyEvent) {
        let has_draft = self
            .screen
            .as_page()
            .and_then(|page| page.composer.as_ref())
            .is_some_and(|composer| !composer.draft.trim().is_empty());

        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Enter if has_draft => self.dispatch(Action::SendMessage),
            KeyCode::Char(c) => self.edit_draft(|draft| draft.push(c)),
            KeyCode::Backspace => self.edit_draft(|draft| {
                draft.pop();
            }),
            _ => self.handle_selection_key(key),
        }
    }

    fn edit_draft(&mut self, edit: impl FnOnce(&mut String)) {
        if let Some(composer) = self
            .screen
            .as_page_mut()
            .and_then(|page| page.composer.as_mut())
        {
            if !composer.disabled {
                edit(&mut composer.draft);
            }
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        let outcome = match self.host.modal() {
            None => return,
            Some(Modal::Alert { .. }) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => ModalOutcome::Dismiss,
                _ => ModalOutcome::Keep,
            },
            Some(Modal::Prompt { prompt, input }) => match (&prompt.kind, key.code) {
                (_, KeyCode::Esc) => ModalOutcome::Answer(PromptAnswer::Cancelled),
                (PromptKind::Text { .. }, KeyCode::Enter) => {
                    ModalOutcome::Answer(PromptAnswer::Text(input.clone()))
                }
                (PromptKind::Text { .. }, KeyCode::Backspace) => ModalOutcome::Erase,
                (PromptKind::Text { .. }, KeyCode::Char(c)) => ModalOutcome::Type(c),
                (PromptKind::Confirm, KeyCode::Enter | KeyCode::Char('y' | 'Y')) => {
                    ModalOutcome::Answer(PromptAnswer::Confirmed)
                }
                (PromptKind::Confirm, KeyCode::Char('n' | 'N')) => {
                    ModalOutcome::Answer(PromptAnswer::Cancelled)
                }
                _ => ModalOutcome::Keep,
            },
        };

        match outcome {
            ModalOutcome::Keep => {}
            ModalOutcome::Dismiss => {
                self.host.close_modal();
            }
            ModalOutcome::Type(c) => {
                if let Some(modal) = self.host.modal_mut() {
                    modal.push_char(c);
                }
            }
            ModalOutcome::Erase => {
                if let Some(modal) = self.host.modal_mut() {
                    modal.backspace();
                }
            }
            ModalOutcome::Answer(answer) => {
                if let Some(Modal::Prompt { prompt, .. }) = self.host.close_modal() {
                    self.resolve_prompt(prompt.purpose, answer);
                }
            }
        }
    }
}
