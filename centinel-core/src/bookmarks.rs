//! Player bookmark store.

use std::rc::Rc;

use crate::artifact::Entry;

/// Ordered collection of bookmarked entries.
///
/// Entries are shared references into the artifact tree, never copies.
/// Insertion order is preserved and duplicates are permitted.
#[derive(Debug, Default)]
pub struct BookmarkStore {
    entries: Vec<Rc<Entry>>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry unconditionally.
    pub fn add(&mut self, entry: Rc<Entry>) {
        self.entries.push(entry);
    }

    /// Read view of the bookmarks in insertion order.
    pub fn entries(&self) -> &[Rc<Entry>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
