//! Server writes triggered from views: relation actions, requests, chat
//! deletion, reactions and bio edits. Each one re-renders its view.

mod common;

use common::{
    current_page, key, mount_get, mount_me, profile_json, started_app, type_text, user_json, BOB,
    ME,
};
use crossterm::event::KeyCode;
use pals::domain::{Action, RelationAction, Route, UniqueId};
use pals::host::{Modal, PromptAnswer, PromptPurpose};
use pals::views::{profile, Content};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn alert(app: &pals::app::App) -> Option<String> {
    match app.host().modal() {
        Some(Modal::Alert { message }) => Some(message.clone()),
        _ => None,
    }
}

/// Mount a GET answering `first` once, then `then` once.
async fn mount_get_twice(server: &MockServer, route: &str, first: serde_json::Value, then: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(first))
        .up_to_n_times(1)
        .with_priority(1)
        .expect(1)
        .mount(server)
        .await;
    mount_get(server, route, then, 1).await;
}

#[tokio::test]
async fn test_add_friend_confirms_and_re_renders_profile() {
    let server = MockServer::start().await;
    mount_me(&server).await;
    let profile_path = format!("/api/profile/{}", BOB);
    mount_get_twice(
        &server,
        &profile_path,
        profile_json(BOB, "bob", json!({})),
        profile_json(BOB, "bob", json!({"sent_request": true})),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(format!("/api/friend_request/{}", BOB)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = started_app(&server).await;
    app.navigate_to(Route::profile(BOB));
    app.settle().await;
    assert_eq!(
        profile::relation_actions(current_page(&app)),
        vec![RelationAction::AddFriend, RelationAction::Block]
    );

    // "Add friend" is the first binding.
    app.handle_key(key(KeyCode::Enter));
    app.settle().await;

    assert_eq!(alert(&app).as_deref(), Some("Friend request sent!"));
    assert_eq!(
        profile::relation_actions(current_page(&app)),
        vec![RelationAction::CancelRequest, RelationAction::Block]
    );
    assert_eq!(app.nav.len(), 2);
}

#[tokio::test]
async fn test_failed_action_stops_before_re_render() {
    let server = MockServer::start().await;
    mount_me(&server).await;
    mount_get(
        &server,
        &format!("/api/profile/{}", BOB),
        profile_json(BOB, "bob", json!({"is_friend": true})),
        1,
    )
    .await;
    Mock::given(method("POST"))
        .and(path(format!("/api/action/block/{}", BOB)))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Cannot block"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = started_app(&server).await;
    app.navigate_to(Route::profile(BOB));
    app.settle().await;
    app.dispatch(Action::Apply {
        action: RelationAction::Block,
        target: UniqueId::new(BOB),
    });
    app.settle().await;

    let error = app.screen.as_error().expect("error page");
    assert_eq!(error.message, "Cannot block");
    assert!(alert(&app).is_none());
}

#[tokio::test]
async fn test_accepting_request_re_fetches_lists() {
    let server = MockServer::start().await;
    mount_me(&server).await;
    mount_get_twice(
        &server,
        "/api/requests",
        json!({"received": [user_json(BOB, "bob")], "sent": []}),
        json!({"received": [], "sent": []}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(format!("/api/action/accept_friend/{}", BOB)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = started_app(&server).await;
    app.navigate_to(Route::Requests);
    app.settle().await;

    // Targets: the row itself, then Accept, Decline, Back.
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.selected_target().map(|b| b.label), Some("Accept: bob".to_string()));
    app.handle_key(key(KeyCode::Enter));
    app.settle().await;

    assert_eq!(alert(&app).as_deref(), Some("Friend request accepted!"));
    let page = current_page(&app);
    assert!(matches!(page.sections[0].content, Content::Empty(_)));
    assert!(matches!(page.sections[1].content, Content::Empty(_)));
}

#[tokio::test]
async fn test_delete_chat_asks_first_then_returns_to_previous_view() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(ME, "alice")))
        .expect(2)
        .mount(&server)
        .await;
    mount_get(
        &server,
        &format!("/api/profile/{}", BOB),
        profile_json(BOB, "bob", json!({})),
        1,
    )
    .await;
    mount_get(
        &server,
        &format!("/api/chat/{}", BOB),
        json!({"messages": [{"sender_uid": BOB, "text": "hi"}]}),
        1,
    )
    .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/chat/{}", BOB)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = started_app(&server).await;
    app.navigate_to(Route::chat(BOB));
    app.settle().await;

    app.dispatch(Action::DeleteChat {
        partner: UniqueId::new(BOB),
    });
    assert!(matches!(app.host().modal(), Some(Modal::Prompt { .. })));
    app.handle_key(key(KeyCode::Char('y')));
    app.settle().await;

    assert_eq!(alert(&app).as_deref(), Some("Chat deleted."));
    assert_eq!(app.nav.len(), 1);
    assert_eq!(current_page(&app).title, "Pals");
}

/// Mount the profile and history GETs a chat with bob loads.
async fn mount_bob_chat(server: &MockServer) {
    mount_get(
        server,
        &format!("/api/profile/{}", BOB),
        profile_json(BOB, "bob", json!({})),
        1,
    )
    .await;
    mount_get(
        server,
        &format!("/api/chat/{}", BOB),
        json!({"messages": [{"sender_uid": BOB, "text": "hi"}]}),
        1,
    )
    .await;
}

#[tokio::test]
async fn test_delete_chat_keeps_history_until_it_succeeds() {
    let server = MockServer::start().await;
    mount_me(&server).await;
    mount_get_twice(
        &server,
        "/api/chats",
        json!([{"partner_uid": BOB, "partner_username": "bob",
            "last_message_text": "hi", "unread_count": 0}]),
        json!([]),
    )
    .await;
    mount_bob_chat(&server).await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/chat/{}", BOB)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = started_app(&server).await;
    app.navigate_to(Route::ChatList);
    app.settle().await;
    app.navigate_to(Route::chat(BOB));
    app.settle().await;

    app.resolve_prompt(
        PromptPurpose::DeleteChat(UniqueId::new(BOB)),
        PromptAnswer::Confirmed,
    );
    assert!(app.busy);
    assert_eq!(app.nav.top(), Some(&Route::chat(BOB)));
    app.settle().await;

    assert_eq!(alert(&app).as_deref(), Some("Chat deleted."));
    let history: Vec<&Route> = app.nav.iter().collect();
    assert_eq!(history, vec![&Route::MainMenu, &Route::ChatList]);
    assert_eq!(current_page(&app).title, "Chats");
    assert!(matches!(current_page(&app).sections[0].content, Content::Empty(_)));
}

#[tokio::test]
async fn test_back_during_delete_leaves_the_chat_only() {
    let server = MockServer::start().await;
    mount_me(&server).await;
    mount_get(&server, "/api/chats", json!([]), 2).await;
    mount_bob_chat(&server).await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/chat/{}", BOB)))
        .respond_with(ResponseTemplate::new(204).set_delay(Duration::from_millis(300)))
        .mount(&server)
        .await;

    let mut app = started_app(&server).await;
    app.navigate_to(Route::ChatList);
    app.settle().await;
    app.navigate_to(Route::chat(BOB));
    app.settle().await;

    app.dispatch(Action::DeleteChat {
        partner: UniqueId::new(BOB),
    });
    app.handle_key(key(KeyCode::Char('y')));
    assert!(app.busy);
    assert_eq!(current_page(&app).title, "Chat with bob");

    app.handle_key(key(KeyCode::Esc));
    app.settle().await;

    let history: Vec<&Route> = app.nav.iter().collect();
    assert_eq!(history, vec![&Route::MainMenu, &Route::ChatList]);
    assert_eq!(current_page(&app).title, "Chats");

    // The aborted delete never reports back.
    tokio::time::sleep(Duration::from_millis(400)).await;
    app.drain_messages();
    assert_eq!(app.nav.len(), 2);
    assert!(app.host().modal().is_none());
}

#[tokio::test]
async fn test_failed_delete_keeps_chat_on_stack() {
    let server = MockServer::start().await;
    mount_me(&server).await;
    mount_bob_chat(&server).await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/chat/{}", BOB)))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = started_app(&server).await;
    app.navigate_to(Route::chat(BOB));
    app.settle().await;
    app.resolve_prompt(
        PromptPurpose::DeleteChat(UniqueId::new(BOB)),
        PromptAnswer::Confirmed,
    );
    app.settle().await;

    assert!(app.screen.as_error().is_some());
    assert_eq!(app.nav.top(), Some(&Route::chat(BOB)));
    assert_eq!(app.nav.len(), 2);
}

#[tokio::test]
async fn test_declining_delete_keeps_chat() {
    let server = MockServer::start().await;
    mount_me(&server).await;
    mount_get(
        &server,
        &format!("/api/profile/{}", BOB),
        profile_json(BOB, "bob", json!({})),
        1,
    )
    .await;
    mount_get(&server, &format!("/api/chat/{}", BOB), json!({"messages": []}), 1).await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/chat/{}", BOB)))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = started_app(&server).await;
    app.navigate_to(Route::chat(BOB));
    app.settle().await;
    app.dispatch(Action::DeleteChat {
        partner: UniqueId::new(BOB),
    });
    app.handle_key(key(KeyCode::Char('n')));

    assert!(app.host().modal().is_none());
    assert_eq!(app.nav.top(), Some(&Route::chat(BOB)));
    assert!(!app.is_loading());
}

#[tokio::test]
async fn test_react_posts_and_reloads_chat() {
    let server = MockServer::start().await;
    mount_me(&server).await;
    mount_get(
        &server,
        &format!("/api/profile/{}", BOB),
        profile_json(BOB, "bob", json!({})),
        2,
    )
    .await;
    mount_get_twice(
        &server,
        &format!("/api/chat/{}", BOB),
        json!({"messages": [{"sender_uid": BOB, "text": "hi"}]}),
        json!({"messages": [{"sender_uid": BOB, "text": "hi",
            "reactions": [{"reactor_uid": ME, "emoji": "👍"}]}]}),
    )
    .await;
    Mock::given(method("POST"))
        .and(path(format!("/api/react/{}/%F0%9F%91%8D", BOB)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = started_app(&server).await;
    app.navigate_to(Route::chat(BOB));
    app.settle().await;
    let react = current_page(&app)
        .actions
        .iter()
        .find(|b| b.label.starts_with("React"))
        .map(|b| b.action.clone())
        .expect("react binding");
    app.dispatch(react);
    app.settle().await;

    let Content::Messages(lines) = &current_page(&app).sections[0].content else {
        panic!("Expected messages");
    };
    assert_eq!(lines[0].reactions, vec!["👍".to_string()]);
}

#[tokio::test]
async fn test_edit_bio_prefills_and_updates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(ME, "alice")))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/me/bio"))
        .and(body_json(json!({"bio": "alice bio!"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut app = started_app(&server).await;
    app.dispatch(Action::EditBio);
    match app.host().modal() {
        Some(Modal::Prompt { prompt, input }) => {
            assert_eq!(prompt.purpose, PromptPurpose::EditBio);
            assert_eq!(input, "alice bio");
        }
        other => panic!("Expected bio prompt, got {:?}", other),
    }
    type_text(&mut app, "! ");
    app.handle_key(key(KeyCode::Enter));
    app.settle().await;

    assert_eq!(alert(&app).as_deref(), Some("Bio updated."));
    assert_eq!(current_page(&app).title, "Pals");
}

#[tokio::test]
async fn test_cancelled_bio_edit_sends_nothing() {
    let server = MockServer::start().await;
    mount_me(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/me/bio"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = started_app(&server).await;
    app.resolve_prompt(PromptPurpose::EditBio, PromptAnswer::Cancelled);
    assert!(!app.is_loading());
}
