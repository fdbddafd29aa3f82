//! View model behind the directory content table.

mod columns;

pub use columns::{Column, ColumnLayout, SortDirection, SortState, RESIZE_HANDLE_WIDTH};

use std::cmp::Ordering;
use std::collections::HashSet;

use depot_model::{validate_name, DirEntry, EntryKind, HostError, NameError, NameRules};

use crate::intent::HostIntent;
use crate::order::compare_labels;
use crate::tree::Generation;

/// What the table area should currently render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// A load is in flight; show the busy placeholder, not "empty".
    Loading,
    /// The directory loaded and has no entries.
    Empty,
    /// Rows are available.
    Ready,
}

/// Result of asking for the transient "new directory" row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualRowOutcome {
    /// The row was inserted; focus its name editor.
    Created,
    /// One already exists; focus that instead of inserting another.
    Focused,
}

#[derive(Debug)]
struct RenameSession {
    path: String,
    original_name: String,
}

/// Owns the flat entry list for the current directory together with
/// sort state, column layout, the selection set and the two editing
/// sessions (rename, virtual new-directory row).
///
/// Data-changing gestures emit a [`HostIntent`] instead of touching the
/// host; the host's asynchronous answer comes back as a fresh entry
/// load through `begin_load`/`apply_entries`.
#[derive(Debug)]
pub struct TableViewModel {
    layout: ColumnLayout,
    rules: NameRules,
    sort: Option<SortState>,
    display: DisplayState,
    rows: Vec<DirEntry>,
    selected: HashSet<String>,
    rename: Option<RenameSession>,
    virtual_row: bool,
    generation: Generation,
    dirty: bool,
}

impl TableViewModel {
    pub fn new(layout: ColumnLayout) -> Self {
        Self {
            layout,
            rules: NameRules::default(),
            sort: None,
            display: DisplayState::Empty,
            rows: Vec::new(),
            selected: HashSet::new(),
            rename: None,
            virtual_row: false,
            generation: Generation::default(),
            dirty: false,
        }
    }

    /// Name validation applied to rename and create commits.
    pub fn set_name_rules(&mut self, rules: NameRules) {
        self.rules = rules;
    }

    // ---------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------

    /// Enter the loading display state and hand out the generation the
    /// matching `apply_entries` must carry. Editing sessions and the
    /// selection do not survive a reload.
    pub fn begin_load(&mut self) -> Generation {
        self.generation = self.generation.next();
        self.display = DisplayState::Loading;
        self.rows.clear();
        self.selected.clear();
        self.rename = None;
        self.virtual_row = false;
        self.dirty = true;
        self.generation
    }

    /// Deliver the result of a directory listing.
    pub fn apply_entries(
        &mut self,
        generation: Generation,
        result: Result<Vec<DirEntry>, HostError>,
    ) {
        if generation != self.generation {
            log::debug!("[table] discarding stale entry list");
            return;
        }
        match result {
            Err(error) => {
                log::warn!("[table] loading entries failed: {error}");
            }
            Ok(entries) => {
                self.rows = entries;
                self.resort();
                self.display = if self.rows.is_empty() {
                    DisplayState::Empty
                } else {
                    DisplayState::Ready
                };
                self.dirty = true;
            }
        }
    }

    pub fn display_state(&self) -> DisplayState {
        self.display
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[DirEntry] {
        &self.rows
    }

    fn row(&self, path: &str) -> Option<&DirEntry> {
        self.rows.iter().find(|r| r.path == path)
    }

    // ---------------------------------------------------------------
    // Sorting
    // ---------------------------------------------------------------

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    /// Set the sort, inferring omitted parts from the active indicator
    /// and falling back to ascending-by-name when none is active.
    pub fn set_sort(&mut self, key: Option<&str>, direction: Option<SortDirection>) {
        let key = key
            .map(str::to_owned)
            .or_else(|| self.sort.as_ref().map(|s| s.key.clone()))
            .unwrap_or_else(|| "name".to_owned());
        let direction = direction
            .or(self.sort.as_ref().map(|s| s.direction))
            .unwrap_or(SortDirection::Ascending);
        self.sort = Some(SortState { key, direction });
        self.resort();
        self.dirty = true;
    }

    /// Sort toggle for a header click. A click right after a moving
    /// resize drag is swallowed.
    pub fn header_clicked(&mut self, key: &str) {
        if self.layout.take_sort_suppression() {
            return;
        }
        let direction = match &self.sort {
            Some(sort) if sort.key == key => sort.direction.invert(),
            _ => SortDirection::first_for(key),
        };
        self.set_sort(Some(key), Some(direction));
    }

    fn resort(&mut self) {
        let sort = self.sort.clone().unwrap_or(SortState {
            key: "name".to_owned(),
            direction: SortDirection::Ascending,
        });
        sort_entries(&mut self.rows, &sort);
    }

    // ---------------------------------------------------------------
    // Selection
    // ---------------------------------------------------------------

    pub fn toggle_select(&mut self, path: &str, checked: bool) {
        if self.row(path).is_none() {
            return;
        }
        if checked {
            self.selected.insert(path.to_owned());
        } else {
            self.selected.remove(path);
        }
        self.dirty = true;
    }

    /// Select or deselect every materialised row.
    pub fn select_all(&mut self, checked: bool) {
        self.selected.clear();
        if checked {
            self.selected.extend(self.rows.iter().map(|r| r.path.clone()));
        }
        self.dirty = true;
    }

    /// Plain row click: selects only that row.
    pub fn click_row(&mut self, path: &str) {
        if self.row(path).is_none() {
            return;
        }
        self.selected.clear();
        self.selected.insert(path.to_owned());
        self.dirty = true;
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.selected.contains(path)
    }

    /// Selected paths in display order.
    pub fn selected_paths(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|r| self.selected.contains(&r.path))
            .map(|r| r.path.clone())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn all_selected(&self) -> bool {
        !self.rows.is_empty() && self.selected.len() == self.rows.len()
    }

    /// Gates the rename action.
    pub fn exactly_one_selected(&self) -> bool {
        self.selected.len() == 1
    }

    // ---------------------------------------------------------------
    // Rename session
    // ---------------------------------------------------------------

    /// Put the single selected row into rename mode.
    pub fn begin_rename(&mut self) -> bool {
        if !self.exactly_one_selected() {
            return false;
        }
        let Some((path, original_name)) = self
            .selected_paths()
            .first()
            .and_then(|path| self.row(path))
            .map(|entry| (entry.path.clone(), entry.name.clone()))
        else {
            return false;
        };
        self.rename = Some(RenameSession {
            path,
            original_name,
        });
        self.dirty = true;
        true
    }

    /// Path of the row currently in rename mode.
    pub fn renaming_path(&self) -> Option<&str> {
        self.rename.as_ref().map(|s| s.path.as_str())
    }

    /// Commit the rename editor's text.
    ///
    /// An invalid name leaves the session open for correction and never
    /// reaches the host. An empty name keeps editing; the unchanged
    /// name just closes the session.
    pub fn commit_rename(&mut self, new_name: &str) -> Result<Option<HostIntent>, NameError> {
        let Some(session) = &self.rename else {
            return Ok(None);
        };
        let name = new_name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        if name == session.original_name {
            self.rename = None;
            self.dirty = true;
            return Ok(None);
        }
        validate_name(name, self.rules)?;
        let path = session.path.clone();
        self.rename = None;
        self.dirty = true;
        Ok(Some(HostIntent::Rename {
            path,
            new_name: name.to_owned(),
        }))
    }

    pub fn cancel_rename(&mut self) {
        if self.rename.take().is_some() {
            self.dirty = true;
        }
    }

    // ---------------------------------------------------------------
    // Virtual new-directory row
    // ---------------------------------------------------------------

    pub fn begin_virtual_row(&mut self) -> VirtualRowOutcome {
        if self.virtual_row {
            return VirtualRowOutcome::Focused;
        }
        self.virtual_row = true;
        self.dirty = true;
        VirtualRowOutcome::Created
    }

    pub fn has_virtual_row(&self) -> bool {
        self.virtual_row
    }

    /// Commit the virtual row's name editor. Same validation contract
    /// as `commit_rename`.
    pub fn commit_virtual_row(&mut self, name: &str) -> Result<Option<HostIntent>, NameError> {
        if !self.virtual_row {
            return Ok(None);
        }
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }
        validate_name(name, self.rules)?;
        self.virtual_row = false;
        self.dirty = true;
        Ok(Some(HostIntent::CreateDir {
            name: name.to_owned(),
        }))
    }

    pub fn cancel_virtual_row(&mut self) {
        if self.virtual_row {
            self.virtual_row = false;
            self.dirty = true;
        }
    }

    // ---------------------------------------------------------------
    // Bulk actions
    // ---------------------------------------------------------------

    /// Delete intent for the selection, with the confirmation message
    /// the host must present before acting.
    pub fn delete_selected(&self) -> Option<HostIntent> {
        let paths = self.selected_paths();
        let confirm = match paths.as_slice() {
            [] => return None,
            [only] => {
                let name = self.row(only).map(|r| r.name.as_str()).unwrap_or(only);
                format!("Delete \"{name}\"?")
            }
            many => format!("Delete {} items?", many.len()),
        };
        Some(HostIntent::Delete { paths, confirm })
    }

    pub fn copy_selected(&self, is_move: bool) -> Option<HostIntent> {
        let paths = self.selected_paths();
        if paths.is_empty() {
            return None;
        }
        Some(HostIntent::Copy { paths, is_move })
    }

    pub fn download_selected(&self) -> Option<HostIntent> {
        let paths = self.selected_paths();
        if paths.is_empty() {
            return None;
        }
        Some(HostIntent::Download { paths })
    }

    /// Double-click activation: directories navigate, files download.
    pub fn activate(&self, path: &str) -> Option<HostIntent> {
        let row = self.row(path)?;
        Some(match row.kind {
            EntryKind::Directory => HostIntent::Navigate {
                path: row.path.clone(),
            },
            EntryKind::File => HostIntent::Download {
                paths: vec![row.path.clone()],
            },
        })
    }

    // ---------------------------------------------------------------
    // Column layout
    // ---------------------------------------------------------------

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn set_available_width(&mut self, width: f64) {
        self.layout.set_available_width(width);
    }

    pub fn resize_target_at(&self, x: f64) -> Option<&str> {
        self.layout.resize_target_at(x)
    }

    pub fn begin_resize(&mut self, x: f64) -> bool {
        self.layout.begin_resize(x)
    }

    pub fn drag_resize(&mut self, x: f64) {
        if self.layout.drag_resize(x) {
            self.dirty = true;
        }
    }

    pub fn end_resize(&mut self) {
        self.layout.end_resize();
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}

/// Display order for one sort indicator.
///
/// Directories come before files in every order. Under a size sort the
/// directories keep their name order in both directions; a directory's
/// reported size is not meaningful.
fn sort_entries(entries: &mut [DirEntry], sort: &SortState) {
    let descending = sort.direction == SortDirection::Descending;
    let flip = |ord: Ordering| if descending { ord.reverse() } else { ord };
    entries.sort_by(|a, b| {
        let dir_a = a.kind == EntryKind::Directory;
        let dir_b = b.kind == EntryKind::Directory;
        match (dir_a, dir_b) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
        match sort.key.as_str() {
            "size" if dir_a => compare_labels(&a.name, &b.name),
            "size" => flip(a.size.cmp(&b.size)),
            "mtime" => flip(a.mtime.cmp(&b.mtime)),
            "revision" => flip(a.revision.cmp(&b.revision)),
            "author" => flip(
                compare_author(a, b).then_with(|| compare_labels(&a.name, &b.name)),
            ),
            _ => flip(compare_labels(&a.name, &b.name)),
        }
    });
}

fn compare_author(a: &DirEntry, b: &DirEntry) -> Ordering {
    compare_labels(
        a.author.as_deref().unwrap_or(""),
        b.author.as_deref().unwrap_or(""),
    )
}
