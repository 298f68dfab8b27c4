//! Relation between the session user and a viewed profile.

use super::RelationAction;
use serde::{Deserialize, Serialize};

/// The raw relation flags the server attaches to a profile response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationFlags {
    #[serde(default)]
    pub is_me: bool,
    #[serde(default)]
    pub is_friend: bool,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub sent_request: bool,
    #[serde(default)]
    pub received_request: bool,
}

/// How a viewed user relates to the session user.
///
/// Derived from [`RelationFlags`] on every profile load and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    SelfProfile,
    Blocked,
    Friend,
    RequestSent,
    RequestReceived,
    None,
}

impl Relation {
    /// Classify server flags. Several flags may be set at once; the first
    /// match in this order wins: self, blocked, friend, sent, received.
    pub fn classify(flags: &RelationFlags) -> Self {
        if flags.is_me {
            Relation::SelfProfile
        } else if flags.is_blocked {
            Relation::Blocked
        } else if flags.is_friend {
            Relation::Friend
        } else if flags.sent_request {
            Relation::RequestSent
        } else if flags.received_request {
            Relation::RequestReceived
        } else {
            Relation::None
        }
    }

    /// The actions a profile view offers for this relation.
    ///
    /// Every non-self, non-blocked relation gets exactly one friendship
    /// action group followed by `Block`.
    pub fn available_actions(&self) -> Vec<RelationAction> {
        match self {
            Relation::SelfProfile => vec![],
            Relation::Blocked => vec![RelationAction::Unblock],
            Relation::Friend => vec![RelationAction::Unfriend, RelationAction::Block],
            Relation::RequestSent => vec![RelationAction::CancelRequest, RelationAction::Block],
            Relation::RequestReceived => vec![
                RelationAction::AcceptFriend,
                RelationAction::DeclineFriend,
                RelationAction::Block,
            ],
            Relation::None => vec![RelationAction::AddFriend, RelationAction::Block],
        }
    }

    /// Short description shown on the profile page.
    pub fn describe(&self) -> &'static str {
        match self {
            Relation::SelfProfile => "This is you",
            Relation::Blocked => "You blocked this user",
            Relation::Friend => "Friends",
            Relation::RequestSent => "Friend request sent",
            Relation::RequestReceived => "Wants to be your friend",
            Relation::None => "Not connected",
        }
    }
}
