//! Typed request builders, one per API route.
//!
//! Each builder knows its method, path and body, and names the shape of its
//! response. [`ApiClient::send`](super::ApiClient::send) does the rest.

use super::models::{
    ChatHistory, ChatSummary, ProfileView, RequestLists, StatusReply, UserProfile,
};
use crate::domain::{RelationAction, UniqueId};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Longest message the server accepts.
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Longest bio the server accepts.
pub const MAX_BIO_LEN: usize = 150;

/// A typed request against the Pals API.
pub trait Endpoint {
    /// Shape of a successful response body. Endpoints that may answer with
    /// 204 No Content use an `Option`.
    type Response: DeserializeOwned;

    fn method(&self) -> Method {
        Method::GET
    }

    /// Path relative to the API origin, starting with `/`.
    fn path(&self) -> String;

    fn body(&self) -> Option<Value> {
        None
    }
}

fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// `GET /api/me`
#[derive(Debug, Clone, Copy)]
pub struct GetMe;

impl Endpoint for GetMe {
    type Response = UserProfile;

    fn path(&self) -> String {
        "/api/me".to_string()
    }
}

/// `GET /api/chats`
#[derive(Debug, Clone, Copy)]
pub struct ListChats;

impl Endpoint for ListChats {
    type Response = Vec<ChatSummary>;

    fn path(&self) -> String {
        "/api/chats".to_string()
    }
}

/// `GET /api/chat/{uid}`
#[derive(Debug, Clone)]
pub struct GetChat<'a> {
    pub partner: &'a UniqueId,
}

impl Endpoint for GetChat<'_> {
    type Response = ChatHistory;

    fn path(&self) -> String {
        format!("/api/chat/{}", segment(self.partner.as_str()))
    }
}

/// `POST /api/message/{uid}` with `{text}`
#[derive(Debug, Clone)]
pub struct SendMessage<'a> {
    pub partner: &'a UniqueId,
    pub text: &'a str,
}

impl Endpoint for SendMessage<'_> {
    type Response = Option<StatusReply>;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/api/message/{}", segment(self.partner.as_str()))
    }

    fn body(&self) -> Option<Value> {
        Some(json!({ "text": self.text }))
    }
}

/// `GET /api/profile/{uid}`
#[derive(Debug, Clone)]
pub struct GetProfile<'a> {
    pub uid: &'a UniqueId,
}

impl Endpoint for GetProfile<'_> {
    type Response = ProfileView;

    fn path(&self) -> String {
        format!("/api/profile/{}", segment(self.uid.as_str()))
    }
}

/// `GET /api/friends`
#[derive(Debug, Clone, Copy)]
pub struct ListFriends;

impl Endpoint for ListFriends {
    type Response = Vec<UserProfile>;

    fn path(&self) -> String {
        "/api/friends".to_string()
    }
}

/// `GET /api/requests`
#[derive(Debug, Clone, Copy)]
pub struct ListRequests;

impl Endpoint for ListRequests {
    type Response = RequestLists;

    fn path(&self) -> String {
        "/api/requests".to_string()
    }
}

/// `POST /api/friend_request/{uid}`
#[derive(Debug, Clone)]
pub struct SendFriendRequest<'a> {
    pub target: &'a UniqueId,
}

impl Endpoint for SendFriendRequest<'_> {
    type Response = Option<StatusReply>;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!("/api/friend_request/{}", segment(self.target.as_str()))
    }
}

/// `POST /api/action/{action}/{uid}`
///
/// Built through [`ApplyAction::new`], which refuses `AddFriend`: that one
/// goes through [`SendFriendRequest`].
#[derive(Debug, Clone)]
pub struct ApplyAction<'a> {
    segment: &'static str,
    target: &'a UniqueId,
}

impl<'a> ApplyAction<'a> {
    pub fn new(action: RelationAction, target: &'a UniqueId) -> Option<Self> {
        action
            .action_segment()
            .map(|segment| Self { segment, target })
    }
}

impl Endpoint for ApplyAction<'_> {
    type Response = Option<StatusReply>;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!(
            "/api/action/{}/{}",
            self.segment,
            segment(self.target.as_str())
        )
    }
}

/// `PUT /api/me/bio` with `{bio}`
#[derive(Debug, Clone)]
pub struct UpdateBio<'a> {
    pub bio: &'a str,
}

impl Endpoint for UpdateBio<'_> {
    type Response = Option<StatusReply>;

    fn method(&self) -> Method {
        Method::PUT
    }

    fn path(&self) -> String {
        "/api/me/bio".to_string()
    }

    fn body(&self) -> Option<Value> {
        Some(json!({ "bio": self.bio }))
    }
}

/// `DELETE /api/chat/{uid}`
#[derive(Debug, Clone)]
pub struct DeleteChat<'a> {
    pub partner: &'a UniqueId,
}

impl Endpoint for DeleteChat<'_> {
    type Response = Option<StatusReply>;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/api/chat/{}", segment(self.partner.as_str()))
    }
}

/// `POST /api/react/{uid}/{emoji}`: react to the last message with a partner.
#[derive(Debug, Clone)]
pub struct ReactToLast<'a> {
    pub partner: &'a UniqueId,
    pub emoji: &'a str,
}

impl Endpoint for ReactToLast<'_> {
    type Response = Option<StatusReply>;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        format!(
            "/api/react/{}/{}",
            segment(self.partner.as_str()),
            segment(self.emoji)
        )
    }
}
