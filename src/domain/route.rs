//! Navigation routes.

use super::UniqueId;
use std::fmt;

/// Identifies which view builder renders a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    MainMenu,
    ChatList,
    Chat,
    Profile,
    Friends,
    Requests,
}

impl ViewKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKind::MainMenu => "main_menu",
            ViewKind::ChatList => "chat_list",
            ViewKind::Chat => "chat",
            ViewKind::Profile => "profile",
            ViewKind::Friends => "friends",
            ViewKind::Requests => "requests",
        }
    }
}

/// A navigation entry: a view together with the arguments it was opened with.
///
/// Two routes are the same entry when both the view and every argument are
/// equal, which is what the derived `PartialEq` compares.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    MainMenu,
    ChatList,
    Chat { partner: UniqueId },
    Profile { uid: UniqueId },
    Friends,
    Requests,
}

impl Route {
    pub fn chat(partner: impl Into<UniqueId>) -> Self {
        Route::Chat {
            partner: partner.into(),
        }
    }

    pub fn profile(uid: impl Into<UniqueId>) -> Self {
        Route::Profile { uid: uid.into() }
    }

    pub fn view(&self) -> ViewKind {
        match self {
            Route::MainMenu => ViewKind::MainMenu,
            Route::ChatList => ViewKind::ChatList,
            Route::Chat { .. } => ViewKind::Chat,
            Route::Profile { .. } => ViewKind::Profile,
            Route::Friends => ViewKind::Friends,
            Route::Requests => ViewKind::Requests,
        }
    }

    /// The arguments the view is invoked with, in order.
    pub fn args(&self) -> Vec<&str> {
        match self {
            Route::Chat { partner } => vec![partner.as_str()],
            Route::Profile { uid } => vec![uid.as_str()],
            _ => Vec::new(),
        }
    }

    /// Title shown while the view is loading.
    pub fn loading_title(&self) -> &'static str {
        match self {
            Route::MainMenu => "Pals",
            Route::ChatList => "Chats",
            Route::Chat { .. } => "Chat",
            Route::Profile { .. } => "Profile",
            Route::Friends => "Friends",
            Route::Requests => "Friend requests",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args = self.args();
        if args.is_empty() {
            write!(f, "{}", self.view().as_str())
        } else {
            write!(f, "{}({})", self.view().as_str(), args.join(", "))
        }
    }
}
