//! Directory listing entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    pub fn is_directory(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// One entry of the current directory listing.
///
/// `path` is the unique key within the listing and the identifier used
/// for every host operation on the entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirEntry {
    pub path: String,
    pub name: String,
    pub kind: EntryKind,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mtime: Option<DateTime<Utc>>,
    /// Revision that last touched the entry.
    #[serde(default)]
    pub revision: Option<i64>,
    #[serde(default)]
    pub author: Option<String>,
}

impl DirEntry {
    pub fn new(path: impl Into<String>, name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            kind,
            size: 0,
            mtime: None,
            revision: None,
            author: None,
        }
    }
}
