//! What a view produces: a displayable page plus its action bindings.

use crate::domain::{Action, UniqueId};
use crate::error::ApiError;

/// A labelled action on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub label: String,
    pub action: Action,
}

impl Binding {
    pub fn new(label: impl Into<String>, action: Action) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// One row of a list: a user, a conversation, a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub subtitle: Option<String>,
    /// Short marker shown after the title, e.g. an unread count.
    pub badge: Option<String>,
    /// What selecting the row itself does.
    pub open: Option<Action>,
    /// Inline buttons attached to the row.
    pub actions: Vec<Binding>,
}

impl Entry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            badge: None,
            open: None,
            actions: Vec::new(),
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn opens(mut self, action: Action) -> Self {
        self.open = Some(action);
        self
    }

    pub fn action(mut self, binding: Binding) -> Self {
        self.actions.push(binding);
        self
    }
}

/// Whether a chat message was written by the session user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Sent,
    Received,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub direction: Direction,
    pub text: String,
    pub timestamp: Option<String>,
    pub reactions: Vec<String>,
}

/// Body of a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain lines of text.
    Text(Vec<String>),
    /// Placeholder shown instead of an empty list.
    Empty(String),
    /// A non-empty list of rows.
    Entries(Vec<Entry>),
    /// A non-empty conversation.
    Messages(Vec<ChatLine>),
}

impl Content {
    /// Rows, or the placeholder when there are none.
    pub fn entries_or(entries: Vec<Entry>, placeholder: impl Into<String>) -> Self {
        if entries.is_empty() {
            Content::Empty(placeholder.into())
        } else {
            Content::Entries(entries)
        }
    }

    /// Messages, or the placeholder when there are none.
    pub fn messages_or(lines: Vec<ChatLine>, placeholder: impl Into<String>) -> Self {
        if lines.is_empty() {
            Content::Empty(placeholder.into())
        } else {
            Content::Messages(lines)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: Option<String>,
    pub content: Content,
}

impl Section {
    pub fn new(content: Content) -> Self {
        Self {
            heading: None,
            content,
        }
    }

    pub fn titled(heading: impl Into<String>, content: Content) -> Self {
        Self {
            heading: Some(heading.into()),
            content,
        }
    }
}

/// Message input of the chat view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    pub partner: UniqueId,
    pub draft: String,
    /// Set while a send is in flight.
    pub disabled: bool,
}

impl Composer {
    pub fn new(partner: UniqueId) -> Self {
        Self {
            partner,
            draft: String::new(),
            disabled: false,
        }
    }
}

/// A fully rendered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub sections: Vec<Section>,
    /// Page-level buttons, shown below the sections.
    pub actions: Vec<Binding>,
    pub composer: Option<Composer>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: Vec::new(),
            actions: Vec::new(),
            composer: None,
        }
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn action(mut self, binding: Binding) -> Self {
        self.actions.push(binding);
        self
    }

    pub fn composer(mut self, composer: Composer) -> Self {
        self.composer = Some(composer);
        self
    }

    /// Everything selectable, in screen order: each row, then its inline
    /// buttons, then the page buttons.
    pub fn targets(&self) -> Vec<Binding> {
        let mut targets = Vec::new();
        for section in &self.sections {
            if let Content::Entries(entries) = &section.content {
                for entry in entries {
                    if let Some(open) = &entry.open {
                        targets.push(Binding::new(entry.title.clone(), open.clone()));
                    }
                    for binding in &entry.actions {
                        targets.push(Binding::new(
                            format!("{}: {}", binding.label, entry.title),
                            binding.action.clone(),
                        ));
                    }
                }
            }
        }
        targets.extend(self.actions.iter().cloned());
        targets
    }

    /// Labels of the page-level buttons.
    pub fn action_labels(&self) -> Vec<&str> {
        self.actions.iter().map(|b| b.label.as_str()).collect()
    }
}

/// Full-screen failure page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPage {
    pub title: String,
    pub message: String,
    pub hint: Option<String>,
    /// Trace or error chain, shown for unexpected failures.
    pub detail: Option<String>,
}

impl ErrorPage {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            hint: None,
            detail: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// The only ways out of an error page.
    pub fn targets(&self) -> Vec<Binding> {
        vec![
            Binding::new("Reload", Action::Reload),
            Binding::new("Quit", Action::Quit),
        ]
    }
}

impl From<&ApiError> for ErrorPage {
    fn from(err: &ApiError) -> Self {
        ErrorPage::new(err.title(), err.message()).with_hint(err.category().recovery_hint())
    }
}

/// What is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Placeholder while a view fetches its data.
    Loading { title: String },
    Page(Page),
    Error(ErrorPage),
}

impl Screen {
    pub fn loading(title: impl Into<String>) -> Self {
        Screen::Loading {
            title: title.into(),
        }
    }

    pub fn targets(&self) -> Vec<Binding> {
        match self {
            Screen::Loading { .. } => Vec::new(),
            Screen::Page(page) => page.targets(),
            Screen::Error(error) => error.targets(),
        }
    }

    pub fn as_page(&self) -> Option<&Page> {
        match self {
            Screen::Page(page) => Some(page),
            _ => None,
        }
    }

    pub fn as_page_mut(&mut self) -> Option<&mut Page> {
        match self {
            Screen::Page(page) => Some(page),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorPage> {
        match self {
            Screen::Error(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Screen::Loading { .. })
    }
}
