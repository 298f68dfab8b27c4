//! The session user.

use super::UniqueId;

/// Identity of the user the session proof belongs to, as the server sees it.
///
/// Replaced every time the main menu loads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub unique_id: UniqueId,
    pub bio: String,
}

impl Session {
    pub fn is(&self, uid: &UniqueId) -> bool {
        &self.unique_id == uid
    }
}
