//! CENTINEL navigation-and-access-control engine.
//!
//! This crate is the core of a terminal file-browsing game: a fixed,
//! recursively loaded tree of text and image "artifacts", some subtrees
//! gated behind a password-derived unlock level, with player bookmarks.
//!
//! It provides:
//! - An immutable-after-load artifact tree ([`ArtifactTree`])
//! - The unlock-level state machine ([`UnlockState`])
//! - An ordered bookmark store ([`BookmarkStore`])
//! - The navigation command protocol ([`NavigationEngine`])
//!
//! Terminal rendering and keyboard acquisition live in the front-end crate;
//! everything here is synchronous, single-threaded, and free of I/O after
//! the initial load.
//!
//! # Quick Start
//!
//! ```no_run
//! use centinel_core::{ArtifactTree, Command, NavigationEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tree = ArtifactTree::load("1documents")?;
//!     let mut engine = NavigationEngine::new(tree);
//!
//!     let outcome = engine.apply(Command::Select(1));
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod artifact;
pub mod bookmarks;
pub mod engine;
pub mod unlock;

// Primary public API
pub use artifact::{ArtifactTree, Entry, EntryKind, LoadError};
pub use bookmarks::BookmarkStore;
pub use engine::{Command, ListingRow, NavigationEngine, Outcome, PathNode, View};
pub use unlock::{UnlockError, UnlockState};
