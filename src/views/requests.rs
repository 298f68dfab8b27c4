//! Incoming and outgoing friend requests.

use super::{Binding, Content, Entry, Page, Section};
use crate::api::endpoints::ListRequests;
use crate::api::models::{RequestLists, UserProfile};
use crate::api::ApiClient;
use crate::domain::{Action, RelationAction, Route};
use crate::error::ApiResult;

pub const NO_RECEIVED: &str = "No incoming requests.";
pub const NO_SENT: &str = "No outgoing requests.";

pub async fn render(api: &ApiClient) -> ApiResult<Page> {
    let lists = api.send(&ListRequests).await?;
    Ok(build(&lists))
}

pub fn build(lists: &RequestLists) -> Page {
    let received = lists
        .received
        .iter()
        .map(|user| {
            entry(user, &[RelationAction::AcceptFriend, RelationAction::DeclineFriend])
        })
        .collect();
    let sent = lists
        .sent
        .iter()
        .map(|user| entry(user, &[RelationAction::CancelRequest]))
        .collect();

    Page::new("Friend requests")
        .section(Section::titled(
            "Received",
            Content::entries_or(received, NO_RECEIVED),
        ))
        .section(Section::titled("Sent", Content::entries_or(sent, NO_SENT)))
        .action(Binding::new("Back", Action::Back))
}

fn entry(user: &UserProfile, actions: &[RelationAction]) -> Entry {
    actions.iter().fold(
        Entry::new(user.username.clone())
            .subtitle(format!("ID: {}", user.unique_id))
            .opens(Action::Open(Route::profile(user.unique_id.clone()))),
        |entry, &action| {
            entry.action(Binding::new(
                action.label(),
                Action::Apply {
                    action,
                    target: user.unique_id.clone(),
                },
            ))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UniqueId;

    fn user(uid: &str, name: &str) -> UserProfile {
        UserProfile {
            unique_id: UniqueId::new(uid),
            username: name.to_string(),
            bio: String::new(),
            joined_date: None,
            last_active_timestamp: None,
        }
    }

    #[test]
    fn test_each_empty_list_gets_its_own_placeholder() {
        let page = build(&RequestLists::default());
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[0].content, Content::Empty(NO_RECEIVED.to_string()));
        assert_eq!(page.sections[1].content, Content::Empty(NO_SENT.to_string()));
    }

    #[test]
    fn test_received_and_sent_actions() {
        let lists = RequestLists {
            received: vec![user("11112222", "bob")],
            sent: vec![user("33334444", "carol")],
        };
        let page = build(&lists);
        let Content::Entries(received) = &page.sections[0].content else {
            panic!("Expected received entries");
        };
        let Content::Entries(sent) = &page.sections[1].content else {
            panic!("Expected sent entries");
        };
        let labels = |e: &Entry| e.actions.iter().map(|b| b.label.clone()).collect::<Vec<_>>();
        assert_eq!(labels(&received[0]), vec!["Accept", "Decline"]);
        assert_eq!(labels(&sent[0]), vec!["Cancel request"]);
    }
}
