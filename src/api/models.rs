//! Response bodies returned by the Pals API.
//!
//! Fields the client never reads (internal ids, block lists) are ignored on
//! deserialization.

use crate::domain::{RelationFlags, Session, UniqueId};
use serde::{Deserialize, Serialize};

/// A user record as the server stores it (`/api/me`, `/api/friends`, requests).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub unique_id: UniqueId,
    #[serde(default = "unknown_username")]
    pub username: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub joined_date: Option<String>,
    #[serde(default)]
    pub last_active_timestamp: Option<String>,
}

fn unknown_username() -> String {
    "Unknown".to_string()
}

impl UserProfile {
    pub fn to_session(&self) -> Session {
        Session {
            username: self.username.clone(),
            unique_id: self.unique_id.clone(),
            bio: self.bio.clone(),
        }
    }
}

/// `GET /api/profile/{uid}`: the target's record plus how it relates to us.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(default)]
    pub relation: RelationFlags,
    /// Server-computed presence such as "online" or "5m ago".
    #[serde(default)]
    pub status: Option<String>,
}

/// One row of `GET /api/chats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSummary {
    pub partner_uid: UniqueId,
    #[serde(default = "unknown_username")]
    pub partner_username: String,
    #[serde(default)]
    pub last_message_text: String,
    #[serde(default)]
    pub timestamp_raw: Option<String>,
    #[serde(default)]
    pub unread_count: u32,
}

/// `GET /api/chat/{uid}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatHistory {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender_uid: UniqueId,
    #[serde(default)]
    pub receiver_uid: Option<UniqueId>,
    pub text: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
    #[serde(default)]
    pub unread: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub reactor_uid: UniqueId,
    pub emoji: String,
}

/// `GET /api/requests`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestLists {
    #[serde(default)]
    pub received: Vec<UserProfile>,
    #[serde(default)]
    pub sent: Vec<UserProfile>,
}

/// Body of mutating endpoints that answer with content instead of 204.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReply {
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_view_flattens_profile_fields() {
        let body = json!({
            "unique_id": "12345678",
            "telegram_id": 42,
            "username": "alice",
            "bio": "hi",
            "blocked_users": [],
            "relation": {"is_me": false, "is_friend": true, "is_blocked": false,
                         "sent_request": false, "received_request": false},
            "status": "online"
        });
        let view: ProfileView = serde_json::from_value(body).unwrap();
        assert_eq!(view.profile.username, "alice");
        assert_eq!(view.profile.unique_id, UniqueId::new("12345678"));
        assert!(view.relation.is_friend);
        assert_eq!(view.status.as_deref(), Some("online"));
    }

    #[test]
    fn test_missing_username_defaults_to_unknown() {
        let profile: UserProfile = serde_json::from_value(json!({"unique_id": "1"})).unwrap();
        assert_eq!(profile.username, "Unknown");
        assert_eq!(profile.bio, "");
    }

    #[test]
    fn test_chat_message_optional_fields() {
        let msg: ChatMessage =
            serde_json::from_value(json!({"sender_uid": "11111111", "text": "yo"})).unwrap();
        assert!(msg.reactions.is_empty());
        assert!(!msg.unread);
        assert!(msg.timestamp.is_none());
    }

    #[test]
    fn test_session_from_profile() {
        let profile: UserProfile = serde_json::from_value(
            json!({"unique_id": "12345678", "username": "bob", "bio": "about"}),
        )
        .unwrap();
        let session = profile.to_session();
        assert_eq!(session.username, "bob");
        assert!(session.is(&UniqueId::new("12345678")));
    }
}
