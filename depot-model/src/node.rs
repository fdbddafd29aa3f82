//! Tree node shapes pushed by the host.

use serde::{Deserialize, Serialize};

/// Node category. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A calendar grouping node in the revision log.
    Date,
    /// A single revision in the log.
    Revision,
    Directory,
    File,
}

impl Category {
    pub fn is_directory(self) -> bool {
        matches!(self, Category::Directory)
    }
}

/// Change-state tag for diff views.
///
/// Only meaningful on `Directory` and `File` nodes; `Date` and `Revision`
/// nodes always carry `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeState {
    #[default]
    None,
    Added,
    Modified,
    Deleted,
}

/// Per-side properties of a compare-tree node.
///
/// Each field is independently absent when the entry does not exist on
/// that side of the comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareProps {
    pub size: Option<String>,
    pub mtime: Option<String>,
    pub checksum: Option<String>,
}

impl CompareProps {
    /// Display form of one property, with the compare pane's "-" fallback
    /// for absent values.
    pub fn display(value: Option<&str>) -> &str {
        value.unwrap_or("-")
    }

    pub fn size_display(&self) -> &str {
        Self::display(self.size.as_deref())
    }

    pub fn mtime_display(&self) -> &str {
        Self::display(self.mtime.as_deref())
    }

    pub fn checksum_display(&self) -> &str {
        Self::display(self.checksum.as_deref())
    }
}

/// One flat record of a tree snapshot, as the host delivers it.
///
/// A snapshot is an ordered list of these; parent links express the
/// hierarchy. Sibling order in the snapshot is irrelevant, the view
/// applies its own ordering policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Stable identifier, unique within the tree.
    pub id: String,
    /// Parent node id, `None` for roots.
    #[serde(default)]
    pub parent: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub change: ChangeState,
    /// Primary display text and sort key.
    pub label: String,
    /// Secondary display text (commit comment). Excluded from ordering.
    #[serde(default)]
    pub annotation: String,
    /// Whether the node should start expanded.
    #[serde(default)]
    pub opened: bool,
    #[serde(default)]
    pub source_props: CompareProps,
    #[serde(default)]
    pub target_props: CompareProps,
}

impl NodeSnapshot {
    /// Minimal snapshot record; compare props default to absent.
    pub fn new(id: impl Into<String>, parent: Option<&str>, category: Category, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: parent.map(str::to_string),
            category,
            change: ChangeState::None,
            label: label.into(),
            annotation: String::new(),
            opened: false,
            source_props: CompareProps::default(),
            target_props: CompareProps::default(),
        }
    }
}
