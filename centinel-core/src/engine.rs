//! Navigation engine: the command state machine over the artifact tree.
//!
//! The engine owns the current location (a path from the tree root to the
//! entry on display), the unlock state, and the bookmark store. Input
//! adapters feed it abstract [`Command`]s; renderers read back the
//! [`View`] for the resulting state. Every command completes synchronously
//! and every malformed command is absorbed as a non-fatal [`Outcome`].

use std::rc::Rc;

use crate::artifact::{ArtifactTree, Entry, EntryKind};
use crate::bookmarks::BookmarkStore;
use crate::unlock::{UnlockError, UnlockState};

/// Abstract navigation commands, produced by an input adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pop the last path element. A no-op at the root.
    Back,
    /// Open the 1-based child of the current directory or bookmark list.
    Select(usize),
    /// Answer a pending password prompt.
    SubmitPassword(String),
    /// Bookmark the file entry currently on display.
    ToggleBookmark,
    /// Switch to the bookmark listing.
    ViewBookmarks,
}

/// Per-command status reported back to the caller.
///
/// Only tree loading can fail fatally; everything here is a state report.
/// Rejections (`InvalidSelection`, `PasswordRejected`, `NoFurtherLevels`)
/// leave the engine exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The path advanced into the selected entry.
    Entered,
    /// The path popped back one element.
    BackedUp,
    /// `Back` at the root: nothing to pop.
    AtRoot,
    /// The selected directory is locked; a password is now pending.
    PasswordRequired,
    /// Password accepted and the deferred navigation completed.
    Unlocked,
    /// Password mismatch; back to the prior view, level unchanged.
    PasswordRejected,
    /// No level beyond the current one is defined.
    NoFurtherLevels,
    /// The current file entry was added to the bookmarks.
    Bookmarked,
    /// Switched to the bookmark listing.
    BookmarksOpened,
    /// Index out of range, selection on a non-directory, or bookmark of a
    /// directory. State unchanged.
    InvalidSelection,
    /// Command had no effect in the current state.
    Unchanged,
}

/// One element of the navigation path: a real tree entry or the synthetic
/// bookmarks marker.
#[derive(Debug, Clone)]
pub enum PathNode {
    Entry(Rc<Entry>),
    Bookmarks,
}

/// A single row of a directory or bookmark listing, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub name: String,
    pub is_directory: bool,
    pub locked: bool,
}

/// What a renderer should draw for the current engine state.
#[derive(Debug)]
pub enum View<'a> {
    /// A numbered directory or bookmark listing under a header line.
    Listing {
        header: String,
        rows: Vec<ListingRow>,
    },
    /// A text artifact. Pagination is the renderer's job.
    Text { name: &'a str, contents: &'a str },
    /// An image artifact. Pixel display is the renderer's job.
    Image {
        name: &'a str,
        width: usize,
        height: usize,
        bytes: &'a [u8],
    },
    /// A pending unlock: prompt for the password gating `target`.
    PasswordPrompt { target: &'a str, level: u8 },
}

/// The navigation state machine. One instance per session; owns exactly one
/// [`UnlockState`] and one [`BookmarkStore`].
pub struct NavigationEngine {
    tree: ArtifactTree,
    path: Vec<PathNode>,
    unlock: UnlockState,
    bookmarks: BookmarkStore,
    /// Locked directory awaiting a password before its deferred push.
    pending: Option<Rc<Entry>>,
}

impl NavigationEngine {
    /// Engine positioned at the tree root with the built-in password table.
    pub fn new(tree: ArtifactTree) -> Self {
        Self::with_unlock_state(tree, UnlockState::new())
    }

    /// Engine with a caller-supplied unlock state.
    pub fn with_unlock_state(tree: ArtifactTree, unlock: UnlockState) -> Self {
        let root = Rc::clone(tree.root());
        NavigationEngine {
            tree,
            path: vec![PathNode::Entry(root)],
            unlock,
            bookmarks: BookmarkStore::new(),
            pending: None,
        }
    }

    /// Apply one command to completion and report what happened.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Back => self.back(),
            Command::Select(index) => self.select(index),
            Command::SubmitPassword(text) => self.submit_password(&text),
            Command::ToggleBookmark => self.toggle_bookmark(),
            Command::ViewBookmarks => self.view_bookmarks(),
        }
    }

    fn back(&mut self) -> Outcome {
        // A pending prompt never advanced the path; abandoning it returns
        // to the prior view without popping.
        if self.pending.take().is_some() {
            return Outcome::BackedUp;
        }
        if self.path.len() > 1 {
            self.path.pop();
            Outcome::BackedUp
        } else {
            Outcome::AtRoot
        }
    }

    fn select(&mut self, index: usize) -> Outcome {
        self.pending = None;

        if index == 0 {
            return Outcome::InvalidSelection;
        }

        let child = match self.path.last() {
            Some(PathNode::Bookmarks) => self.bookmarks.entries().get(index - 1).cloned(),
            Some(PathNode::Entry(entry)) => match entry.kind() {
                EntryKind::Directory { children, .. } => children.get(index - 1).cloned(),
                // File entries have no children to index.
                _ => None,
            },
            None => None,
        };

        let Some(child) = child else {
            return Outcome::InvalidSelection;
        };

        if let Some(required) = child.required_level() {
            if required > self.unlock.level() {
                self.pending = Some(child);
                return Outcome::PasswordRequired;
            }
        }

        self.path.push(PathNode::Entry(child));
        Outcome::Entered
    }

    fn submit_password(&mut self, candidate: &str) -> Outcome {
        let Some(target) = self.pending.take() else {
            // Only meaningful while a prompt is pending.
            return Outcome::Unchanged;
        };

        match self.unlock.attempt_unlock(candidate) {
            Ok(true) => {
                let required = target.required_level().unwrap_or(1);
                if required > self.unlock.level() {
                    // Another gate still stands between the player and the
                    // target; keep the prompt pending for the next level.
                    self.pending = Some(target);
                    Outcome::PasswordRequired
                } else {
                    self.path.push(PathNode::Entry(target));
                    Outcome::Unlocked
                }
            }
            Ok(false) => Outcome::PasswordRejected,
            Err(UnlockError::NoFurtherLevels(_)) => Outcome::NoFurtherLevels,
        }
    }

    fn toggle_bookmark(&mut self) -> Outcome {
        self.pending = None;
        match self.path.last() {
            Some(PathNode::Entry(entry)) if !entry.is_directory() => {
                self.bookmarks.add(Rc::clone(entry));
                Outcome::Bookmarked
            }
            _ => Outcome::InvalidSelection,
        }
    }

    fn view_bookmarks(&mut self) -> Outcome {
        self.pending = None;
        if matches!(self.path.last(), Some(PathNode::Bookmarks)) {
            return Outcome::Unchanged;
        }
        self.path.push(PathNode::Bookmarks);
        Outcome::BookmarksOpened
    }

    /// The renderer contract for the current state.
    pub fn current_view(&self) -> View<'_> {
        if let Some(pending) = &self.pending {
            return View::PasswordPrompt {
                target: pending.name(),
                level: self.unlock.level() + 1,
            };
        }

        match self.path.last() {
            Some(PathNode::Bookmarks) => View::Listing {
                header: "Bookmarks".to_string(),
                rows: self
                    .bookmarks
                    .entries()
                    .iter()
                    .map(|e| self.listing_row(e))
                    .collect(),
            },
            Some(PathNode::Entry(entry)) => match entry.kind() {
                EntryKind::Directory { children, .. } => View::Listing {
                    header: self.path_string(),
                    rows: children.iter().map(|e| self.listing_row(e)).collect(),
                },
                EntryKind::Text { contents } => View::Text {
                    name: entry.name(),
                    contents,
                },
                EntryKind::Image {
                    bytes,
                    width,
                    height,
                } => View::Image {
                    name: entry.name(),
                    width: *width,
                    height: *height,
                    bytes,
                },
            },
            // The path is seeded with the root and Back stops at length 1.
            None => View::Listing {
                header: String::new(),
                rows: Vec::new(),
            },
        }
    }

    fn listing_row(&self, entry: &Rc<Entry>) -> ListingRow {
        let locked = entry
            .required_level()
            .is_some_and(|level| level > self.unlock.level());
        ListingRow {
            name: entry.name().to_string(),
            is_directory: entry.is_directory(),
            locked,
        }
    }

    /// The `/`-joined display-name path from root to the current entry.
    pub fn path_string(&self) -> String {
        let mut out = String::new();
        for node in &self.path {
            out.push('/');
            match node {
                PathNode::Entry(entry) => out.push_str(entry.name()),
                PathNode::Bookmarks => out.push_str("bookmarks"),
            }
        }
        out
    }

    /// The navigation path, root first. Always at least one element.
    pub fn path(&self) -> &[PathNode] {
        &self.path
    }

    /// The entry currently on display, if the tail is a real entry.
    pub fn current_entry(&self) -> Option<&Rc<Entry>> {
        match self.path.last() {
            Some(PathNode::Entry(entry)) => Some(entry),
            _ => None,
        }
    }

    /// The locked directory awaiting a password, if any.
    pub fn pending_target(&self) -> Option<&Rc<Entry>> {
        self.pending.as_ref()
    }

    pub fn unlock_level(&self) -> u8 {
        self.unlock.level()
    }

    pub fn bookmarks(&self) -> &BookmarkStore {
        &self.bookmarks
    }

    pub fn tree(&self) -> &ArtifactTree {
        &self.tree
    }
}
