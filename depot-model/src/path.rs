//! Repository paths and navigation snapshots.

use serde::{Deserialize, Serialize};

/// A slash-separated path inside the repository, relative to its root.
///
/// The empty path is the repository root. Segments never contain '/'.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryPath {
    segments: Vec<String>,
}

impl RepositoryPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a slash-separated path string. Empty segments are skipped,
    /// so "/a//b/" and "a/b" are the same path.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, or "/" for the root.
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("/")
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn resolve(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self { segments }
    }

    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Breadcrumb segments from the root down to this path, each carrying
    /// the stored path string it navigates to. The root is included.
    pub fn breadcrumbs(&self) -> Vec<PathSegment> {
        let mut out = vec![PathSegment {
            label: "/".to_string(),
            path: String::new(),
        }];
        let mut prefix = String::new();
        for segment in &self.segments {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(segment);
            out.push(PathSegment {
                label: segment.clone(),
                path: prefix.clone(),
            });
        }
        out
    }
}

impl std::fmt::Display for RepositoryPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.segments.join("/"))
    }
}

/// One breadcrumb segment with the path it navigates to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    pub label: String,
    pub path: String,
}

/// Navigation state reported by the host for the current view.
///
/// Drives enablement of the previous/next/parent controls and the
/// breadcrumb contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSnapshot {
    pub has_previous: bool,
    pub has_next: bool,
    pub has_parent: bool,
    pub segments: Vec<PathSegment>,
}
