//! Navigation history.
//!
//! A plain stack of entries. It records where the user has been; loading the
//! view for an entry is the app's job.

use tracing::debug;

/// Ordered history of navigation entries, modified only at the tail.
#[derive(Debug, Clone)]
pub struct NavigationStack<T> {
    entries: Vec<T>,
}

impl<T> Default for NavigationStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NavigationStack<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The entry currently shown, if any.
    pub fn top(&self) -> Option<&T> {
        self.entries.last()
    }

    /// Remove the current entry and return the one that becomes current.
    pub fn pop(&mut self) -> Option<&T> {
        self.entries.pop();
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries from the oldest to the current one.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.entries.iter()
    }
}

impl<T: PartialEq + std::fmt::Debug> NavigationStack<T> {
    /// Push `entry` unless it is equal to the current top.
    ///
    /// Returns `true` when the entry was pushed. Repeated requests for the
    /// entry already on top (a double tap) leave the stack untouched.
    pub fn push_unless_top(&mut self, entry: T) -> bool {
        if self.top() == Some(&entry) {
            debug!(?entry, "Ignoring navigation to the current entry");
            return false;
        }
        self.entries.push(entry);
        true
    }
}
