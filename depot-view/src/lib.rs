//! Surface-agnostic view-state engine for the depot repository browser.
//!
//! Owns the state behind the three repository views (directory content
//! table, revision log tree, compare tree) plus the breadcrumb bar and
//! drag/drop target resolution. The engine never draws anything: a
//! rendering surface reads its state after each event and pushes user
//! gestures and host snapshot completions back in.
//!
//! All mutation happens on discrete handler invocations; asynchronous
//! host completions are delivered through generation-guarded `apply_*`
//! calls so stale results are discarded.

pub mod breadcrumb;
pub mod classify;
pub mod intent;
pub mod order;
pub mod surface;
pub mod table;
pub mod tree;

pub use breadcrumb::{BreadcrumbState, Segment};
pub use classify::{classify, NodeStyle};
pub use intent::HostIntent;
pub use order::{compare_labels, compare_nodes, Collation};
pub use surface::{resolve_drop_target, DragTracker, DropTarget, Rect, RowRegion, Surface};
pub use table::{
    Column, ColumnLayout, DisplayState, SortDirection, SortState, TableViewModel, VirtualRowOutcome,
};
pub use tree::{
    Generation, HierarchyViewModel, PopulationMode, SelectOutcome, TreeConfig, TreeNode,
};
