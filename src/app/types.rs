//! State-changing requests that precede a re-render.

use crate::api::endpoints::{DeleteChat, ReactToLast, SendMessage, UpdateBio};
use crate::api::ApiClient;
use crate::domain::{RelationAction, UniqueId};
use crate::error::ApiResult;

/// A write to the server. Once it succeeds, the target view is rendered
/// again from scratch; a failure ends on the error page instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Relation {
        action: RelationAction,
        target: UniqueId,
    },
    SendMessage {
        partner: UniqueId,
        text: String,
    },
    React {
        partner: UniqueId,
        emoji: String,
    },
    DeleteChat {
        partner: UniqueId,
    },
    UpdateBio {
        bio: String,
    },
}

impl Mutation {
    /// Send the write. Returns the confirmation to show, if any.
    pub async fn apply(&self, api: &ApiClient) -> ApiResult<Option<String>> {
        match self {
            Mutation::Relation { action, target } => {
                api.apply_relation(*action, target).await?;
                Ok(Some(action.confirmation().to_string()))
            }
            Mutation::SendMessage { partner, text } => {
                api.send(&SendMessage { partner, text }).await?;
                Ok(None)
            }
            Mutation::React { partner, emoji } => {
                api.send(&ReactToLast { partner, emoji }).await?;
                Ok(None)
            }
            Mutation::DeleteChat { partner } => {
                api.send(&DeleteChat { partner }).await?;
                Ok(Some("Chat deleted.".to_string()))
            }
            Mutation::UpdateBio { bio } => {
                api.send(&UpdateBio { bio }).await?;
                Ok(Some("Bio updated.".to_string()))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Relation { .. } => "relation",
            Mutation::SendMessage { .. } => "send_message",
            Mutation::React { .. } => "react",
            Mutation::DeleteChat { .. } => "delete_chat",
            Mutation::UpdateBio { .. } => "update_bio",
        }
    }
}
