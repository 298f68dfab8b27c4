//! View builder tests against a wiremock API.

mod common;

use common::{mount_get, mount_me, profile_json, test_client, user_json, BOB, ME};
use pals::domain::{RelationAction, Route, Session, UniqueId};
use pals::views::{self, profile, Content, Direction};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn alice() -> Session {
    Session {
        username: "alice".to_string(),
        unique_id: UniqueId::new(ME),
        bio: String::new(),
    }
}

#[tokio::test]
async fn test_main_menu_creates_session() {
    let server = MockServer::start().await;
    mount_me(&server).await;

    let rendered = views::render_route(&test_client(&server), None, &Route::MainMenu)
        .await
        .unwrap();
    let session = rendered.session.expect("main menu returns the session");
    assert_eq!(session.unique_id, UniqueId::new(ME));
    assert_eq!(
        rendered.page.action_labels(),
        vec!["Chats", "Friends", "Requests", "Find user", "Edit bio"]
    );
}

#[tokio::test]
async fn test_friend_profile_offers_unfriend_and_block() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        &format!("/api/profile/{}", BOB),
        profile_json(BOB, "bob", json!({"is_friend": true})),
        1,
    )
    .await;

    let rendered = views::render_route(&test_client(&server), None, &Route::profile(BOB))
        .await
        .unwrap();
    assert_eq!(
        profile::relation_actions(&rendered.page),
        vec![RelationAction::Unfriend, RelationAction::Block]
    );
}

#[tokio::test]
async fn test_blocked_profile_offers_only_unblock() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        &format!("/api/profile/{}", BOB),
        profile_json(BOB, "bob", json!({"is_blocked": true, "is_friend": true})),
        1,
    )
    .await;

    let rendered = views::render_route(&test_client(&server), None, &Route::profile(BOB))
        .await
        .unwrap();
    assert_eq!(
        profile::relation_actions(&rendered.page),
        vec![RelationAction::Unblock]
    );
}

#[tokio::test]
async fn test_zero_chats_render_placeholder_not_empty_list() {
    let server = MockServer::start().await;
    mount_get(&server, "/api/chats", json!([]), 1).await;

    let rendered = views::render_route(&test_client(&server), None, &Route::ChatList)
        .await
        .unwrap();
    assert_eq!(rendered.page.sections.len(), 1);
    assert!(matches!(
        rendered.page.sections[0].content,
        Content::Empty(_)
    ));
}

#[tokio::test]
async fn test_chat_list_entries_open_conversations() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/api/chats",
        json!([{
            "partner_uid": BOB,
            "partner_username": "bob",
            "last_message_text": "see you",
            "timestamp_raw": "2024-05-01T10:00:00",
            "unread_count": 2
        }]),
        1,
    )
    .await;

    let rendered = views::render_route(&test_client(&server), None, &Route::ChatList)
        .await
        .unwrap();
    let Content::Entries(entries) = &rendered.page.sections[0].content else {
        panic!("Expected entries");
    };
    assert_eq!(entries[0].title, "bob");
    assert_eq!(entries[0].subtitle.as_deref(), Some("see you"));
    assert_eq!(entries[0].badge.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_chat_falls_back_to_raw_id_when_profile_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/profile/{}", BOB)))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "not found"})))
        .mount(&server)
        .await;
    mount_get(
        &server,
        &format!("/api/chat/{}", BOB),
        json!({"messages": [
            {"sender_uid": ME, "text": "hi"},
            {"sender_uid": BOB, "text": "hey", "reactions": [{"reactor_uid": ME, "emoji": "👍"}]}
        ]}),
        1,
    )
    .await;

    let session = alice();
    let rendered = views::render_route(
        &test_client(&server),
        Some(&session),
        &Route::chat(BOB),
    )
    .await
    .unwrap();

    assert_eq!(rendered.page.title, format!("Chat with {}", BOB));
    assert!(rendered.session.is_none());
    let Content::Messages(lines) = &rendered.page.sections[0].content else {
        panic!("Expected messages");
    };
    assert_eq!(lines[0].direction, Direction::Sent);
    assert_eq!(lines[1].direction, Direction::Received);
    assert_eq!(lines[1].reactions, vec!["👍".to_string()]);
}

#[tokio::test]
async fn test_chat_without_session_fetches_me_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json(ME, "alice")))
        .expect(1)
        .mount(&server)
        .await;
    mount_get(
        &server,
        &format!("/api/profile/{}", BOB),
        profile_json(BOB, "bob", json!({"is_friend": true})),
        1,
    )
    .await;
    mount_get(
        &server,
        &format!("/api/chat/{}", BOB),
        json!({"messages": [{"sender_uid": ME, "text": "hi"}]}),
        1,
    )
    .await;

    let rendered = views::render_route(&test_client(&server), None, &Route::chat(BOB))
        .await
        .unwrap();
    assert_eq!(rendered.page.title, "Chat with bob");
    assert_eq!(
        rendered.session.map(|s| s.unique_id),
        Some(UniqueId::new(ME))
    );
    let Content::Messages(lines) = &rendered.page.sections[0].content else {
        panic!("Expected messages");
    };
    assert_eq!(lines[0].direction, Direction::Sent);
}

#[tokio::test]
async fn test_chat_history_failure_is_an_error() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        &format!("/api/profile/{}", BOB),
        profile_json(BOB, "bob", json!({})),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/chat/{}", BOB)))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"detail": "blocked"})))
        .mount(&server)
        .await;

    let session = alice();
    let err = views::render_route(&test_client(&server), Some(&session), &Route::chat(BOB))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "blocked");
}

#[tokio::test]
async fn test_requests_view_sections() {
    let server = MockServer::start().await;
    mount_get(
        &server,
        "/api/requests",
        json!({"received": [user_json(BOB, "bob")], "sent": []}),
        1,
    )
    .await;

    let rendered = views::render_route(&test_client(&server), None, &Route::Requests)
        .await
        .unwrap();
    let page = rendered.page;
    assert_eq!(page.sections[0].heading.as_deref(), Some("Received"));
    assert_eq!(page.sections[1].heading.as_deref(), Some("Sent"));
    assert!(matches!(page.sections[0].content, Content::Entries(_)));
    assert!(matches!(page.sections[1].content, Content::Empty(_)));
}
