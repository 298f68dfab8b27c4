//! A single conversation with its composer.

use super::{Binding, ChatLine, Composer, Content, Direction, Page, Rendered, Section};
use crate::api::endpoints::{GetChat, GetMe, GetProfile};
use crate::api::models::ChatMessage;
use crate::api::ApiClient;
use crate::domain::{Action, Route, Session, UniqueId};
use crate::error::ApiResult;

pub const NO_MESSAGES: &str = "No messages yet. Say hi!";
pub const THUMBS_UP: &str = "👍";

/// Build the chat with `partner`.
///
/// The partner's name comes from their profile; if that lookup fails the raw
/// id is shown instead. Messages are tagged against the session user, which
/// is fetched first when no session exists yet.
pub async fn render(
    api: &ApiClient,
    session: Option<&Session>,
    partner: &UniqueId,
) -> ApiResult<Rendered> {
    let (me, fetched) = match session {
        Some(session) => (session.clone(), None),
        None => {
            let session = api.send(&GetMe).await?.to_session();
            (session.clone(), Some(session))
        }
    };

    let partner_name = match api.send(&GetProfile { uid: partner }).await {
        Ok(view) => view.profile.username,
        Err(e) => {
            tracing::debug!("Partner lookup for {} failed, showing id: {}", partner, e);
            partner.to_string()
        }
    };

    let history = api.send(&GetChat { partner }).await?;
    let page = build(&me, partner, &partner_name, &history.messages);
    Ok(Rendered {
        page,
        session: fetched,
    })
}

pub fn build(
    me: &Session,
    partner: &UniqueId,
    partner_name: &str,
    messages: &[ChatMessage],
) -> Page {
    let lines: Vec<ChatLine> = messages.iter().map(|m| line(me, m)).collect();
    let has_history = !lines.is_empty();

    let mut page = Page::new(format!("Chat with {}", partner_name))
        .section(Section::new(Content::messages_or(lines, NO_MESSAGES)))
        .composer(Composer::new(partner.clone()))
        .action(Binding::new("Send", Action::SendMessage));

    if has_history {
        page = page.action(Binding::new(
            format!("React {}", THUMBS_UP),
            Action::React {
                partner: partner.clone(),
                emoji: THUMBS_UP.to_string(),
            },
        ));
    }

    page.action(Binding::new(
        "Delete chat",
        Action::DeleteChat {
            partner: partner.clone(),
        },
    ))
    .action(Binding::new(
        "View profile",
        Action::Open(Route::profile(partner.clone())),
    ))
    .action(Binding::new("Back", Action::Back))
}

fn line(me: &Session, message: &ChatMessage) -> ChatLine {
    let direction = if me.is(&message.sender_uid) {
        Direction::Sent
    } else {
        Direction::Received
    };
    ChatLine {
        direction,
        text: message.text.clone(),
        timestamp: message.timestamp.clone(),
        reactions: message.reactions.iter().map(|r| r.emoji.clone()).collect(),
    }
}
