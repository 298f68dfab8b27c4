//! Another user's (or one's own) profile, with the actions their relation
//! allows.

use super::{Binding, Content, Page, Section};
use crate::api::endpoints::GetProfile;
use crate::api::models::ProfileView;
use crate::api::ApiClient;
use crate::domain::{Action, Relation, RelationAction, UniqueId};
use crate::error::ApiResult;

pub async fn render(api: &ApiClient, uid: &UniqueId) -> ApiResult<Page> {
    let view = api.send(&GetProfile { uid }).await?;
    Ok(build(&view))
}

pub fn build(view: &ProfileView) -> Page {
    let profile = &view.profile;
    let relation = Relation::classify(&view.relation);

    let mut details = vec![format!("ID: {}", profile.unique_id)];
    if let Some(status) = &view.status {
        details.push(format!("Last seen: {}", status));
    }
    if let Some(joined) = &profile.joined_date {
        details.push(format!("Joined: {}", joined));
    }
    details.push(relation.describe().to_string());

    let bio = if profile.bio.trim().is_empty() {
        "No bio.".to_string()
    } else {
        profile.bio.clone()
    };

    let mut page = Page::new(profile.username.clone())
        .section(Section::new(Content::Text(details)))
        .section(Section::titled("Bio", Content::Text(vec![bio])));

    for action in relation.available_actions() {
        page = page.action(Binding::new(
            action.label(),
            Action::Apply {
                action,
                target: profile.unique_id.clone(),
            },
        ));
    }
    page
}

/// The relation actions offered on a built profile page, in order.
pub fn relation_actions(page: &Page) -> Vec<RelationAction> {
    page.actions
        .iter()
        .filter_map(|b| match &b.action {
            Action::Apply { action, .. } => Some(*action),
            _ => None,
        })
        .collect()
}
