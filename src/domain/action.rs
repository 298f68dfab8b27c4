//! Actions that on-screen bindings can trigger.
//!
//! Every selectable element on a page carries an [`Action`]; the app maps
//! each variant to exactly one handler, so an unknown action cannot exist.

use super::{Route, UniqueId};

/// Friendship and blocking operations on another user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationAction {
    AddFriend,
    AcceptFriend,
    DeclineFriend,
    CancelRequest,
    Unfriend,
    Block,
    Unblock,
}

impl RelationAction {
    /// Path segment used by `POST /api/action/{action}/{uid}`.
    ///
    /// `AddFriend` has its own endpoint and returns `None`.
    pub fn action_segment(&self) -> Option<&'static str> {
        match self {
            RelationAction::AddFriend => None,
            RelationAction::AcceptFriend => Some("accept_friend"),
            RelationAction::DeclineFriend => Some("decline_friend"),
            RelationAction::CancelRequest => Some("cancel_request"),
            RelationAction::Unfriend => Some("unfriend"),
            RelationAction::Block => Some("block"),
            RelationAction::Unblock => Some("unblock"),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RelationAction::AddFriend => "Add friend",
            RelationAction::AcceptFriend => "Accept",
            RelationAction::DeclineFriend => "Decline",
            RelationAction::CancelRequest => "Cancel request",
            RelationAction::Unfriend => "Unfriend",
            RelationAction::Block => "Block",
            RelationAction::Unblock => "Unblock",
        }
    }

    /// Confirmation shown once the server accepted the action.
    pub fn confirmation(&self) -> &'static str {
        match self {
            RelationAction::AddFriend => "Friend request sent!",
            RelationAction::AcceptFriend => "Friend request accepted!",
            RelationAction::DeclineFriend => "Friend request declined.",
            RelationAction::CancelRequest => "Friend request cancelled.",
            RelationAction::Unfriend => "Removed from your friends.",
            RelationAction::Block => "User blocked.",
            RelationAction::Unblock => "User unblocked.",
        }
    }
}

/// Something a binding on screen does when activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Push a route onto the navigation stack.
    Open(Route),
    /// Pop the navigation stack.
    Back,
    /// Ask the user for an id to look up.
    Search,
    /// Apply a friendship/blocking operation, then re-render the current view.
    Apply {
        action: RelationAction,
        target: UniqueId,
    },
    /// Send the chat composer's draft.
    SendMessage,
    /// React to the last message of a conversation.
    React { partner: UniqueId, emoji: String },
    /// Delete a conversation after confirmation.
    DeleteChat { partner: UniqueId },
    /// Edit the session user's bio.
    EditBio,
    /// Drop all state and start again from the main menu.
    Reload,
    Quit,
}
