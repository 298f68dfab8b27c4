//! View builders.
//!
//! Each view fetches what it needs through the [`ApiClient`] and returns a
//! [`Page`]. Views hold no state between calls; the app decides when to run
//! them and what to do with the result.
//!
//! | Route | Builder | Fetches |
//! |-------|---------|---------|
//! | `MainMenu` | [`main_menu::render`] | `/api/me` |
//! | `ChatList` | [`chats::render`] | `/api/chats` |
//! | `Chat` | [`chat::render`] | `/api/profile/{uid}`, `/api/chat/{uid}` |
//! | `Profile` | [`profile::render`] | `/api/profile/{uid}` |
//! | `Friends` | [`friends::render`] | `/api/friends` |
//! | `Requests` | [`requests::render`] | `/api/requests` |

pub mod chat;
pub mod chats;
pub mod friends;
pub mod main_menu;
pub mod page;
pub mod profile;
pub mod requests;

pub use page::{
    Binding, ChatLine, Composer, Content, Direction, Entry, ErrorPage, Page, Screen, Section,
};

use crate::api::ApiClient;
use crate::domain::{Route, Session};
use crate::error::ApiResult;
use unicode_width::UnicodeWidthChar;

/// Display width of list previews, in terminal cells.
pub const PREVIEW_WIDTH: usize = 40;

/// Output of a view: the page, plus the session if the view (re)fetched it.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub page: Page,
    pub session: Option<Session>,
}

impl From<Page> for Rendered {
    fn from(page: Page) -> Self {
        Self {
            page,
            session: None,
        }
    }
}

/// Build the page for `route`.
pub async fn render_route(
    api: &ApiClient,
    session: Option<&Session>,
    route: &Route,
) -> ApiResult<Rendered> {
    tracing::debug!("Rendering {}", route);
    match route {
        Route::MainMenu => main_menu::render(api).await,
        Route::ChatList => chats::render(api).await.map(Rendered::from),
        Route::Chat { partner } => chat::render(api, session, partner).await,
        Route::Profile { uid } => profile::render(api, uid).await.map(Rendered::from),
        Route::Friends => friends::render(api).await.map(Rendered::from),
        Route::Requests => requests::render(api).await.map(Rendered::from),
    }
}

/// Cut `text` to `max_width` terminal cells, ending with `…` when shortened.
pub fn preview(text: &str, max_width: usize) -> String {
    let single_line = text.replace(['\n', '\r'], " ");
    let total: usize = single_line
        .chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .sum();
    if total <= max_width {
        return single_line;
    }

    let mut out = String::new();
    let mut width = 0;
    for c in single_line.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
