//! Conversation list.

use super::{preview, Binding, Content, Entry, Page, Section, PREVIEW_WIDTH};
use crate::api::endpoints::ListChats;
use crate::api::models::ChatSummary;
use crate::api::ApiClient;
use crate::domain::{Action, Route};
use crate::error::ApiResult;

pub const NO_CHATS: &str = "No chats yet. Find a user to start one.";

pub async fn render(api: &ApiClient) -> ApiResult<Page> {
    let chats = api.send(&ListChats).await?;
    Ok(build(&chats))
}

pub fn build(chats: &[ChatSummary]) -> Page {
    let entries = chats.iter().map(entry).collect();
    Page::new("Chats")
        .section(Section::new(Content::entries_or(entries, NO_CHATS)))
        .action(Binding::new("Back", Action::Back))
}

fn entry(chat: &ChatSummary) -> Entry {
    let mut entry = Entry::new(chat.partner_username.clone())
        .subtitle(preview(&chat.last_message_text, PREVIEW_WIDTH))
        .opens(Action::Open(Route::chat(chat.partner_uid.clone())));
    if chat.unread_count > 0 {
        entry = entry.badge(chat.unread_count.to_string());
    }
    entry
}
