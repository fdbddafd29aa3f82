//! The host data service boundary.

use async_trait::async_trait;

use crate::entry::DirEntry;
use crate::error::HostError;
use crate::node::NodeSnapshot;
use crate::path::NavSnapshot;

pub type HostResult<T> = Result<T, HostError>;

/// Everything the view layer asks of the host.
///
/// Queries return snapshot-shaped data that is pushed into a view model.
/// Mutating operations are fire-and-forget from the engine's point of
/// view: their outcome arrives later as a fresh snapshot push. Bulk
/// operations take the full path list so the host can report progress
/// against the total count.
#[async_trait]
pub trait HostDataService: Send + Sync {
    // Content and tree queries
    async fn list_entries(&self) -> HostResult<Vec<DirEntry>>;
    async fn load_log_tree(&self, rebuild: bool) -> HostResult<Vec<NodeSnapshot>>;
    async fn load_compare_tree(&self) -> HostResult<Vec<NodeSnapshot>>;
    /// Direct children of one directory node, for lazy tree population.
    async fn dir_children(&self, path: &str) -> HostResult<Vec<NodeSnapshot>>;

    // Mutating operations
    async fn create_dir(&self, name: &str) -> HostResult<()>;
    async fn rename_entry(&self, path: &str, new_name: &str) -> HostResult<()>;
    async fn delete_entries(&self, paths: &[String]) -> HostResult<()>;
    async fn copy_entries(&self, paths: &[String], is_move: bool) -> HostResult<()>;
    async fn download_entries(&self, paths: &[String]) -> HostResult<()>;
    async fn upload_files(&self) -> HostResult<()>;
    async fn upload_dir(&self) -> HostResult<()>;

    // Navigation
    async fn nav_state(&self) -> HostResult<NavSnapshot>;
    async fn go_path(&self, path: &str) -> HostResult<()>;
    async fn go_previous(&self) -> HostResult<()>;
    async fn go_next(&self) -> HostResult<()>;
    async fn go_parent(&self) -> HostResult<()>;
    async fn go_search(&self, pattern: &str) -> HostResult<()>;

    /// Synchronous yes/no prompt, used before destructive operations.
    fn confirm(&self, message: &str) -> bool;
}
