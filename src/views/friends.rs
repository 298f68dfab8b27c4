//! Friends list.

use super::{preview, Binding, Content, Entry, Page, Section, PREVIEW_WIDTH};
use crate::api::endpoints::ListFriends;
use crate::api::models::UserProfile;
use crate::api::ApiClient;
use crate::domain::{Action, Route};
use crate::error::ApiResult;

pub const NO_FRIENDS: &str = "You have no friends yet.";

pub async fn render(api: &ApiClient) -> ApiResult<Page> {
    let friends = api.send(&ListFriends).await?;
    Ok(build(&friends))
}

pub fn build(friends: &[UserProfile]) -> Page {
    let entries = friends
        .iter()
        .map(|friend| {
            let mut entry = Entry::new(friend.username.clone())
                .opens(Action::Open(Route::profile(friend.unique_id.clone())))
                .action(Binding::new(
                    "Message",
                    Action::Open(Route::chat(friend.unique_id.clone())),
                ));
            if !friend.bio.is_empty() {
                entry = entry.subtitle(preview(&friend.bio, PREVIEW_WIDTH));
            }
            entry
        })
        .collect();

    Page::new("Friends")
        .section(Section::new(Content::entries_or(entries, NO_FRIENDS)))
        .action(Binding::new("Back", Action::Back))
}
