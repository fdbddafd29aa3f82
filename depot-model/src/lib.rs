//! Shared data model for the depot repository browser.
//!
//! Everything the view layer and the host boundary agree on lives here:
//! tree node snapshots, directory entries, repository paths, entry-name
//! validation, and the `HostDataService` trait that the embedding
//! application implements against its repository backend.

pub mod entry;
pub mod error;
pub mod host;
pub mod node;
pub mod path;
pub mod validate;

pub use entry::{DirEntry, EntryKind};
pub use error::{HostError, NameError, SnapshotError};
pub use host::{HostDataService, HostResult};
pub use node::{Category, ChangeState, CompareProps, NodeSnapshot};
pub use path::{NavSnapshot, PathSegment, RepositoryPath};
pub use validate::{validate_name, NameRules, FORBIDDEN_CHARACTERS, MAX_NAME_LEN};
