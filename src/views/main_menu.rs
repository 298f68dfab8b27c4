//! Main menu: greeting, own id and bio, and the entry points to every
//! other view.

use super::{Binding, Content, Page, Rendered, Section};
use crate::api::endpoints::GetMe;
use crate::api::ApiClient;
use crate::domain::{Action, Route, Session};
use crate::error::ApiResult;

/// Fetch `/api/me` and build the menu. The fetched profile becomes the session.
pub async fn render(api: &ApiClient) -> ApiResult<Rendered> {
    let me = api.send(&GetMe).await?;
    let session = me.to_session();
    Ok(Rendered {
        page: build(&session),
        session: Some(session),
    })
}

pub fn build(session: &Session) -> Page {
    let bio = if session.bio.trim().is_empty() {
        "No bio yet.".to_string()
    } else {
        session.bio.clone()
    };

    Page::new("Pals")
        .section(Section::new(Content::Text(vec![
            format!("Hello, {}!", session.username),
            format!("Your ID: {}", session.unique_id),
        ])))
        .section(Section::titled("Bio", Content::Text(vec![bio])))
        .action(Binding::new("Chats", Action::Open(Route::ChatList)))
        .action(Binding::new("Friends", Action::Open(Route::Friends)))
        .action(Binding::new("Requests", Action::Open(Route::Requests)))
        .action(Binding::new("Find user", Action::Search))
        .action(Binding::new("Edit bio", Action::EditBio))
}
