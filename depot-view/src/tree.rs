//! Hierarchy view model behind the log and compare trees.
//!
//! One implementation covers both population modes: eager trees receive
//! the whole node set in a single snapshot, lazy trees receive roots
//! only and fetch a node's direct children when it is first expanded.

use std::collections::HashMap;

use depot_model::{Category, ChangeState, CompareProps, HostError, NodeSnapshot, SnapshotError};

use crate::classify::{classify, NodeStyle};
use crate::order::compare_nodes;

/// How a tree's node set is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationMode {
    /// All levels arrive in one snapshot.
    Eager,
    /// Roots arrive up front, children on demand at expansion time.
    Lazy,
}

/// Per-tree configuration, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    pub mode: PopulationMode,
    /// Whether selecting a node known to have no children still toggles
    /// its expand state. The two historical tree variants disagreed on
    /// this, so it stays an explicit flag rather than a silent pick.
    pub toggle_childless: bool,
}

impl TreeConfig {
    pub fn eager() -> Self {
        Self {
            mode: PopulationMode::Eager,
            toggle_childless: false,
        }
    }

    pub fn lazy() -> Self {
        Self {
            mode: PopulationMode::Lazy,
            toggle_childless: true,
        }
    }
}

/// Token identifying one load cycle. Results delivered with a stale
/// generation are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Generation(u64);

impl Generation {
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Child storage for one node.
#[derive(Debug, Clone, PartialEq)]
enum ChildSlot {
    /// Children present, ordered by policy.
    Resolved(Vec<TreeNode>),
    /// Lazy node whose children have not been fetched yet.
    Unresolved,
    /// A fetch confirmed there are no children.
    Leaf,
}

/// A materialised tree node, owned by its `HierarchyViewModel`.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: String,
    pub category: Category,
    pub change: ChangeState,
    pub label: String,
    pub annotation: String,
    pub expanded: bool,
    pub source_props: CompareProps,
    pub target_props: CompareProps,
    children: ChildSlot,
}

impl TreeNode {
    fn from_snapshot(record: NodeSnapshot, children: ChildSlot) -> Self {
        Self {
            id: record.id,
            category: record.category,
            change: record.change,
            label: record.label,
            annotation: record.annotation,
            expanded: record.opened,
            source_props: record.source_props,
            target_props: record.target_props,
            children,
        }
    }

    /// Materialised children, ordered. Empty for unresolved and leaf nodes.
    pub fn children(&self) -> &[TreeNode] {
        match &self.children {
            ChildSlot::Resolved(children) => children,
            _ => &[],
        }
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    /// Whether a lazy fetch is still pending for this node.
    pub fn is_unresolved(&self) -> bool {
        matches!(self.children, ChildSlot::Unresolved)
    }

    /// Known to have no children. Unresolved nodes are not leaves: their
    /// child count is simply unknown yet.
    pub fn is_leaf(&self) -> bool {
        match &self.children {
            ChildSlot::Resolved(children) => children.is_empty(),
            ChildSlot::Unresolved => false,
            ChildSlot::Leaf => true,
        }
    }

    pub fn style(&self) -> NodeStyle {
        classify(self.category, self.change)
    }
}

/// Outcome of a transient node selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The node's expand state flipped.
    Toggled { expanded: bool },
    /// The node's children must be fetched before it can expand.
    /// Deliver the result through `apply_children` with this generation.
    FetchChildren { generation: Generation },
    /// Nothing to do.
    Ignored,
}

/// Owns one tree's node set and its open/close state.
///
/// Selection is transient: selecting a node only drives expand/collapse
/// (and, for compare trees, surfaces the node's property bags through
/// `compare_props`), it never leaves a persistent highlight.
#[derive(Debug)]
pub struct HierarchyViewModel {
    config: TreeConfig,
    roots: Vec<TreeNode>,
    generation: Generation,
    dirty: bool,
}

impl HierarchyViewModel {
    pub fn new(config: TreeConfig) -> Self {
        Self {
            config,
            roots: Vec::new(),
            generation: Generation::default(),
            dirty: false,
        }
    }

    pub fn config(&self) -> TreeConfig {
        self.config
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn roots(&self) -> &[TreeNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&TreeNode> {
        find(&self.roots, id)
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.node(id).is_some_and(|n| n.expanded)
    }

    /// Source and target property bags of a compare-tree node.
    pub fn compare_props(&self, id: &str) -> Option<(&CompareProps, &CompareProps)> {
        self.node(id).map(|n| (&n.source_props, &n.target_props))
    }

    /// Replace the whole node set from a flat snapshot.
    ///
    /// Malformed records are dropped with a warning instead of aborting
    /// the load. Invalidates any in-flight child fetch.
    pub fn load(&mut self, snapshot: Vec<NodeSnapshot>) {
        self.generation = self.generation.next();
        self.roots = assemble(snapshot, self.config.mode);
        self.dirty = true;
    }

    /// Transient selection of one node; see the type-level docs.
    pub fn select(&mut self, node_id: &str) -> SelectOutcome {
        let toggle_childless = self.config.toggle_childless;
        let generation = self.generation;
        let Some(node) = find_mut(&mut self.roots, node_id) else {
            return SelectOutcome::Ignored;
        };
        let toggles = match &node.children {
            ChildSlot::Unresolved => return SelectOutcome::FetchChildren { generation },
            ChildSlot::Resolved(children) => !children.is_empty() || toggle_childless,
            ChildSlot::Leaf => toggle_childless,
        };
        if !toggles {
            return SelectOutcome::Ignored;
        }
        node.expanded = !node.expanded;
        self.dirty = true;
        SelectOutcome::Toggled {
            expanded: node.expanded,
        }
    }

    /// Deliver the result of a lazy child fetch requested by `select`.
    ///
    /// A failed fetch leaves the node unresolved and collapsed so a later
    /// selection retries it. An empty result marks the node as a leaf.
    pub fn apply_children(
        &mut self,
        generation: Generation,
        parent_id: &str,
        result: Result<Vec<NodeSnapshot>, HostError>,
    ) {
        if generation != self.generation {
            log::debug!("[tree] discarding stale children for {parent_id}");
            return;
        }
        let mode = self.config.mode;
        let Some(node) = find_mut(&mut self.roots, parent_id) else {
            log::debug!("[tree] children arrived for unknown node {parent_id}");
            return;
        };
        match result {
            Err(error) => {
                log::warn!("[tree] fetching children of {parent_id} failed: {error}");
            }
            Ok(records) if records.is_empty() => {
                node.children = ChildSlot::Leaf;
                self.dirty = true;
            }
            Ok(records) => {
                // Records parented on the fetched node become roots of the
                // attached subtree; deeper levels may come along too.
                let records = records
                    .into_iter()
                    .map(|mut record| {
                        if record.parent.as_deref() == Some(parent_id) {
                            record.parent = None;
                        }
                        record
                    })
                    .collect();
                node.children = ChildSlot::Resolved(assemble(records, mode));
                node.expanded = true;
                self.dirty = true;
            }
        }
    }

    /// Expand every materialised node. Does not fetch unresolved lazy
    /// children.
    pub fn expand_all(&mut self) {
        fn walk(nodes: &mut [TreeNode]) {
            for node in nodes {
                if let ChildSlot::Resolved(children) = &mut node.children {
                    if !children.is_empty() {
                        node.expanded = true;
                    }
                    walk(children);
                }
            }
        }
        walk(&mut self.roots);
        self.dirty = true;
    }

    /// Collapse every materialised node.
    pub fn collapse_all(&mut self) {
        fn walk(nodes: &mut [TreeNode]) {
            for node in nodes {
                node.expanded = false;
                if let ChildSlot::Resolved(children) = &mut node.children {
                    walk(children);
                }
            }
        }
        walk(&mut self.roots);
        self.dirty = true;
    }

    /// Release all node state and invalidate in-flight fetches. Safe to
    /// call when nothing is materialised.
    pub fn destroy(&mut self) {
        self.generation = self.generation.next();
        if self.roots.is_empty() {
            return;
        }
        self.roots.clear();
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

/// Build an ordered node forest from flat snapshot records.
fn assemble(snapshot: Vec<NodeSnapshot>, mode: PopulationMode) -> Vec<TreeNode> {
    let mut seen = std::collections::HashSet::new();
    let mut records = Vec::with_capacity(snapshot.len());
    for record in snapshot {
        if !seen.insert(record.id.clone()) {
            let error = SnapshotError::DuplicateId { id: record.id };
            log::warn!("[tree] dropping record: {error}");
            continue;
        }
        records.push(record);
    }

    let mut children_of: HashMap<String, Vec<NodeSnapshot>> = HashMap::new();
    let mut root_records = Vec::new();
    for record in records {
        match record.parent.clone() {
            None => root_records.push(record),
            Some(parent) if seen.contains(&parent) => {
                children_of.entry(parent).or_default().push(record);
            }
            Some(parent) => {
                let error = SnapshotError::UnknownParent {
                    id: record.id,
                    parent,
                };
                log::warn!("[tree] dropping record: {error}");
            }
        }
    }

    let mut roots: Vec<TreeNode> = root_records
        .into_iter()
        .map(|record| build(record, &mut children_of, mode))
        .collect();
    sort_siblings(&mut roots);

    if !children_of.is_empty() {
        let unreachable: usize = children_of.values().map(Vec::len).sum();
        log::debug!("[tree] {unreachable} record(s) unreachable from any root");
    }
    roots
}

fn build(
    record: NodeSnapshot,
    children_of: &mut HashMap<String, Vec<NodeSnapshot>>,
    mode: PopulationMode,
) -> TreeNode {
    let mut children: Vec<TreeNode> = children_of
        .remove(&record.id)
        .unwrap_or_default()
        .into_iter()
        .map(|child| build(child, children_of, mode))
        .collect();
    sort_siblings(&mut children);
    let slot = match mode {
        PopulationMode::Eager => ChildSlot::Resolved(children),
        // In a lazy tree, a node without supplied children has simply not
        // been fetched yet.
        PopulationMode::Lazy if children.is_empty() => ChildSlot::Unresolved,
        PopulationMode::Lazy => ChildSlot::Resolved(children),
    };
    TreeNode::from_snapshot(record, slot)
}

fn sort_siblings(nodes: &mut [TreeNode]) {
    nodes.sort_by(|a, b| compare_nodes(a.category, &a.label, b.category, &b.label));
}

fn find<'a>(nodes: &'a [TreeNode], id: &str) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find(node.children(), id) {
            return Some(found);
        }
    }
    None
}

fn find_mut<'a>(nodes: &'a mut [TreeNode], id: &str) -> Option<&'a mut TreeNode> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let ChildSlot::Resolved(children) = &mut node.children
            && let Some(found) = find_mut(children, id)
        {
            return Some(found);
        }
    }
    None
}
