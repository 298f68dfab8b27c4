//! Common test utilities for integration tests.
//!
//! Builds apps wired to a wiremock server and canned API bodies.
//!
//! ```ignore
//! let server = MockServer::start().await;
//! mount_me(&server).await;
//! let mut app = test_app(&server);
//! app.start();
//! app.settle().await;
//! ```

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pals::api::ApiClient;
use pals::app::App;
use pals::host::TerminalHost;
use pals::views::{ErrorPage, Page};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Session proof used by every test app.
pub const TEST_INIT_DATA: &str = "query_id=test&user=%7B%22id%22%3A1%7D&hash=abc";

/// The session user.
pub const ME: &str = "12345678";
/// The other user most tests talk to.
pub const BOB: &str = "87654321";

pub fn test_client(server: &MockServer) -> ApiClient {
    ApiClient::new(server.uri(), TEST_INIT_DATA)
}

pub fn test_app(server: &MockServer) -> App {
    App::new(
        test_client(server),
        Box::new(TerminalHost::new(TEST_INIT_DATA)),
    )
}

pub fn user_json(uid: &str, username: &str) -> Value {
    json!({
        "unique_id": uid,
        "username": username,
        "bio": format!("{} bio", username),
        "joined_date": "2024-01-01",
    })
}

pub fn profile_json(uid: &str, username: &str, relation: Value) -> Value {
    let mut body = user_json(uid, username);
    body["relation"] = relation;
    body["status"] = json!("online");
    body
}

/// Mount `GET /api/me` for the session user "alice".
pub async fn mount_me(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(ME, "alice")))
        .mount(server)
        .await;
}

/// Mount a GET returning `body`, expected exactly `times` times.
pub async fn mount_get(server: &MockServer, route: &str, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// An app that has finished loading its main menu.
pub async fn started_app(server: &MockServer) -> App {
    let mut app = test_app(server);
    app.start();
    app.settle().await;
    app
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

pub fn current_page(app: &App) -> &Page {
    app.screen
        .as_page()
        .unwrap_or_else(|| panic!("Expected a page, got {:?}", app.screen))
}

pub fn current_error(app: &App) -> &ErrorPage {
    app.screen
        .as_error()
        .unwrap_or_else(|| panic!("Expected an error page, got {:?}", app.screen))
}
