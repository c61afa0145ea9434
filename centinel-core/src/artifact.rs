//! Artifact tree model and filesystem loader.
//!
//! On disk, every artifact name carries a single leading type-tag character
//! (`1documents`, `2archive`, `mnote.txt`). The tag is stripped for display;
//! for directories the full on-disk name also selects the unlock level.
//! Suffix dispatch: `.txt` is a text artifact, `.png` is an image artifact,
//! anything else is treated as a nested directory and recursed into.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

/// Error type for artifact tree loading. Any failure aborts the whole load;
/// no partial tree is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("artifact root not found: {0}")]
    RootMissing(PathBuf),
    #[error("artifact root is not a directory: {0}")]
    RootNotDirectory(PathBuf),
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid image artifact {path}")]
    Image {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },
    #[error("artifact name is not valid UTF-8: {0}")]
    NonUtf8Name(PathBuf),
    #[error("artifact name {0:?} is empty after stripping its type tag")]
    UntaggedName(String),
    #[error("duplicate artifact name {name:?} in {dir}")]
    DuplicateName { name: String, dir: PathBuf },
}

/// Payload variants of an artifact entry.
#[derive(Debug)]
pub enum EntryKind {
    /// A readable text artifact, fully loaded at tree-build time.
    Text { contents: String },
    /// An image artifact: raw bytes plus header-parsed dimensions.
    Image {
        bytes: Vec<u8>,
        width: usize,
        height: usize,
    },
    /// A navigable directory of further artifacts.
    Directory {
        children: Vec<Rc<Entry>>,
        required_level: u8,
    },
}

/// A single artifact in the game world: a text file, an image, or a
/// directory. Entries are immutable after load and shared by reference
/// (the navigation path and the bookmark store alias tree nodes via `Rc`).
#[derive(Debug)]
pub struct Entry {
    name: String,
    kind: EntryKind,
}

impl Entry {
    /// Build a text entry. Used by the loader and by tests that assemble
    /// trees without touching the filesystem.
    pub fn text(name: impl Into<String>, contents: impl Into<String>) -> Rc<Entry> {
        Rc::new(Entry {
            name: name.into(),
            kind: EntryKind::Text {
                contents: contents.into(),
            },
        })
    }

    /// Build an image entry from raw bytes and known dimensions.
    pub fn image(name: impl Into<String>, bytes: Vec<u8>, width: usize, height: usize) -> Rc<Entry> {
        Rc::new(Entry {
            name: name.into(),
            kind: EntryKind::Image {
                bytes,
                width,
                height,
            },
        })
    }

    /// Build a directory entry with pre-populated children.
    pub fn directory(
        name: impl Into<String>,
        required_level: u8,
        children: Vec<Rc<Entry>>,
    ) -> Rc<Entry> {
        Rc::new(Entry {
            name: name.into(),
            kind: EntryKind::Directory {
                children,
                required_level,
            },
        })
    }

    /// Display name, with the on-disk type tag already stripped.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &EntryKind {
        &self.kind
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory { .. })
    }

    /// Children of a directory entry, `None` for file entries.
    pub fn children(&self) -> Option<&[Rc<Entry>]> {
        match &self.kind {
            EntryKind::Directory { children, .. } => Some(children),
            _ => None,
        }
    }

    /// Unlock level required to view this entry's children, `None` for
    /// file entries.
    pub fn required_level(&self) -> Option<u8> {
        match &self.kind {
            EntryKind::Directory { required_level, .. } => Some(*required_level),
            _ => None,
        }
    }
}

/// The fixed artifact hierarchy, built once at startup by recursively
/// walking the artifact root. Never mutated afterwards.
#[derive(Debug)]
pub struct ArtifactTree {
    root: Rc<Entry>,
}

impl ArtifactTree {
    /// Recursively load the tree rooted at `root_path`.
    ///
    /// Children are sorted by raw on-disk name before the tag is stripped,
    /// and every subtree is fully populated before this returns. The loader
    /// joins paths explicitly and never changes the process working
    /// directory.
    pub fn load(root_path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let root_path = root_path.as_ref();
        if !root_path.exists() {
            return Err(LoadError::RootMissing(root_path.to_path_buf()));
        }
        if !root_path.is_dir() {
            return Err(LoadError::RootNotDirectory(root_path.to_path_buf()));
        }

        let raw_name = root_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| LoadError::NonUtf8Name(root_path.to_path_buf()))?;

        let root = load_directory(root_path, raw_name)?;
        Ok(ArtifactTree { root })
    }

    /// Wrap an already-built root entry. Lets callers (and tests) assemble
    /// trees programmatically.
    pub fn from_root(root: Rc<Entry>) -> Self {
        ArtifactTree { root }
    }

    pub fn root(&self) -> &Rc<Entry> {
        &self.root
    }
}

/// Map an on-disk directory name to its required unlock level.
fn lock_level_for(raw_name: &str) -> u8 {
    match raw_name {
        "2archive" => 2,
        "3message" => 3,
        _ => 1,
    }
}

/// Strip the single-character type tag from an on-disk name.
fn strip_tag(raw_name: &str) -> Result<&str, LoadError> {
    let mut chars = raw_name.chars();
    chars.next();
    let stripped = chars.as_str();
    if stripped.is_empty() {
        return Err(LoadError::UntaggedName(raw_name.to_string()));
    }
    Ok(stripped)
}

fn load_directory(path: &Path, raw_name: &str) -> Result<Rc<Entry>, LoadError> {
    let display_name = strip_tag(raw_name)?.to_string();
    let required_level = lock_level_for(raw_name);

    let read_dir = fs::read_dir(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut raw_names = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let os_name = dir_entry.file_name();
        let raw = os_name
            .to_str()
            .ok_or_else(|| LoadError::NonUtf8Name(path.join(&os_name)))?
            .to_string();
        raw_names.push(raw);
    }
    raw_names.sort();

    let mut children: Vec<Rc<Entry>> = Vec::with_capacity(raw_names.len());
    for raw in &raw_names {
        let child_path = path.join(raw);
        let child = if raw.ends_with(".txt") {
            load_text(&child_path, raw)?
        } else if raw.ends_with(".png") {
            load_image(&child_path, raw)?
        } else {
            load_directory(&child_path, raw)?
        };

        if children.iter().any(|c| c.name() == child.name()) {
            return Err(LoadError::DuplicateName {
                name: child.name().to_string(),
                dir: path.to_path_buf(),
            });
        }
        children.push(child);
    }

    Ok(Entry::directory(display_name, required_level, children))
}

fn load_text(path: &Path, raw_name: &str) -> Result<Rc<Entry>, LoadError> {
    let display_name = strip_tag(raw_name)?.to_string();
    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Entry::text(display_name, contents))
}

fn load_image(path: &Path, raw_name: &str) -> Result<Rc<Entry>, LoadError> {
    let display_name = strip_tag(raw_name)?.to_string();
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let size = imagesize::blob_size(&bytes).map_err(|source| LoadError::Image {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Entry::image(display_name, bytes, size.width, size.height))
}
