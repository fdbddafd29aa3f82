//! Tests for the content-table view model.

use chrono::{TimeZone, Utc};
use depot_model::{DirEntry, EntryKind, HostError, NameError, NameRules};
use depot_view::{
    Column, ColumnLayout, DisplayState, HostIntent, SortDirection, TableViewModel,
    VirtualRowOutcome,
};

fn layout() -> ColumnLayout {
    ColumnLayout::new(vec![
        Column::new("name", 300.0, 100.0),
        Column::new("size", 100.0, 60.0),
        Column::new("mtime", 200.0, 120.0),
    ])
}

fn dir(path: &str, name: &str) -> DirEntry {
    DirEntry::new(path, name, EntryKind::Directory)
}

fn file(path: &str, name: &str, size: u64) -> DirEntry {
    let mut entry = DirEntry::new(path, name, EntryKind::File);
    entry.size = size;
    entry
}

fn loaded(entries: Vec<DirEntry>) -> TableViewModel {
    let mut table = TableViewModel::new(layout());
    let generation = table.begin_load();
    table.apply_entries(generation, Ok(entries));
    table
}

fn sample() -> Vec<DirEntry> {
    let mut old = file("/trunk/old.txt", "old.txt", 10);
    old.mtime = Some(Utc.with_ymd_and_hms(2023, 5, 1, 8, 0, 0).unwrap());
    let mut new = file("/trunk/new.txt", "new.txt", 900);
    new.mtime = Some(Utc.with_ymd_and_hms(2024, 2, 1, 8, 0, 0).unwrap());
    vec![old, new, dir("/trunk/src", "src"), dir("/trunk/docs", "docs")]
}

// ============================================================================
// Display states and loading
// ============================================================================

#[test]
fn test_loading_then_ready() {
    let mut table = TableViewModel::new(layout());
    assert_eq!(table.display_state(), DisplayState::Empty);

    let generation = table.begin_load();
    assert_eq!(table.display_state(), DisplayState::Loading);

    table.apply_entries(generation, Ok(sample()));
    assert_eq!(table.display_state(), DisplayState::Ready);
    assert_eq!(table.rows().len(), 4);
}

#[test]
fn test_empty_directory_is_distinct_from_loading() {
    let mut table = TableViewModel::new(layout());
    let generation = table.begin_load();
    table.apply_entries(generation, Ok(vec![]));
    assert_eq!(table.display_state(), DisplayState::Empty);
}

#[test]
fn test_stale_entries_discarded() {
    let mut table = TableViewModel::new(layout());
    let old_generation = table.begin_load();
    let _current = table.begin_load();

    table.apply_entries(old_generation, Ok(sample()));
    assert_eq!(table.display_state(), DisplayState::Loading);
    assert!(table.rows().is_empty());
}

#[test]
fn test_failed_load_keeps_loading_state() {
    let mut table = TableViewModel::new(layout());
    let generation = table.begin_load();
    table.apply_entries(generation, Err(HostError::new("forbidden")));
    assert_eq!(table.display_state(), DisplayState::Loading);
}

#[test]
fn test_reload_clears_selection_and_sessions() {
    let mut table = loaded(sample());
    table.click_row("/trunk/src");
    table.begin_rename();
    table.begin_virtual_row();

    let generation = table.begin_load();
    assert_eq!(table.selected_count(), 0);
    assert!(table.renaming_path().is_none());
    assert!(!table.has_virtual_row());
    table.apply_entries(generation, Ok(sample()));
    assert_eq!(table.selected_count(), 0);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_default_order_is_name_ascending_dirs_first() {
    let table = loaded(sample());
    let names: Vec<&str> = table.rows().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["docs", "src", "new.txt", "old.txt"]);
}

#[test]
fn test_size_column_defaults_to_descending_on_first_click() {
    let mut table = loaded(sample());
    table.header_clicked("size");

    assert_eq!(table.sort_state().unwrap().key, "size");
    assert_eq!(
        table.sort_state().unwrap().direction,
        SortDirection::Descending
    );
    let names: Vec<&str> = table.rows().iter().map(|r| r.name.as_str()).collect();
    // Directories keep name order under a size sort.
    assert_eq!(names, ["docs", "src", "new.txt", "old.txt"]);
}

#[test]
fn test_name_column_defaults_to_ascending_then_inverts() {
    let mut table = loaded(sample());
    table.header_clicked("name");
    assert_eq!(
        table.sort_state().unwrap().direction,
        SortDirection::Ascending
    );

    table.header_clicked("name");
    assert_eq!(
        table.sort_state().unwrap().direction,
        SortDirection::Descending
    );
    let names: Vec<&str> = table.rows().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["src", "docs", "old.txt", "new.txt"]);
}

#[test]
fn test_mtime_descending_puts_most_recent_file_first() {
    let mut table = loaded(sample());
    table.header_clicked("mtime");

    let files: Vec<&str> = table
        .rows()
        .iter()
        .filter(|r| r.kind == EntryKind::File)
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(files, ["new.txt", "old.txt"]);
}

#[test]
fn test_sort_persists_across_reload() {
    let mut table = loaded(sample());
    table.set_sort(Some("size"), Some(SortDirection::Descending));

    let generation = table.begin_load();
    table.apply_entries(generation, Ok(sample()));
    assert_eq!(table.sort_state().unwrap().key, "size");
}

#[test]
fn test_set_sort_infers_omitted_parts() {
    let mut table = loaded(sample());
    table.set_sort(None, None);
    assert_eq!(table.sort_state().unwrap().key, "name");
    assert_eq!(
        table.sort_state().unwrap().direction,
        SortDirection::Ascending
    );

    table.set_sort(Some("size"), None);
    assert_eq!(table.sort_state().unwrap().key, "size");
    assert_eq!(
        table.sort_state().unwrap().direction,
        SortDirection::Ascending,
        "direction carried over from active indicator"
    );

    table.set_sort(None, Some(SortDirection::Descending));
    assert_eq!(table.sort_state().unwrap().key, "size");
}

// ============================================================================
// Column resize and the sort-click guard
// ============================================================================

#[test]
fn test_resize_handle_hit_region() {
    let table = TableViewModel::new(layout());
    assert_eq!(table.resize_target_at(295.0), Some("name"));
    assert_eq!(table.resize_target_at(300.0), Some("name"));
    assert_eq!(table.resize_target_at(289.0), None);
    assert_eq!(table.resize_target_at(395.0), Some("size"));
}

#[test]
fn test_resize_handle_spans_both_sides_of_boundary() {
    let table = TableViewModel::new(layout());
    // The start of the next header still resizes the previous column.
    assert_eq!(table.resize_target_at(305.0), Some("name"));
    assert_eq!(table.resize_target_at(310.0), Some("name"));
    assert_eq!(table.resize_target_at(311.0), None);
    assert_eq!(table.resize_target_at(405.0), Some("size"));
    // No header follows the last column, so its right side stays cold.
    assert_eq!(table.resize_target_at(605.0), None);
}

#[test]
fn test_resize_clamps_to_min_width() {
    let mut table = TableViewModel::new(layout());
    assert!(table.begin_resize(295.0));
    table.drag_resize(0.0);
    table.end_resize();

    assert_eq!(table.layout().width_of("name"), Some(100.0));
}

#[test]
fn test_resize_caps_total_at_available_width() {
    let mut table = TableViewModel::new(layout());
    table.set_available_width(650.0);
    assert!(table.begin_resize(295.0));
    table.drag_resize(500.0);
    table.end_resize();

    // Initial total 600, available 650: growth capped at +50.
    assert_eq!(table.layout().width_of("name"), Some(350.0));
    assert_eq!(table.layout().total_width(), 650.0);
}

#[test]
fn test_moving_drag_suppresses_one_sort_click() {
    let mut table = loaded(sample());
    assert!(table.begin_resize(295.0));
    table.drag_resize(310.0);
    table.end_resize();

    table.header_clicked("name");
    assert!(table.sort_state().is_none(), "click after drag swallowed");

    table.header_clicked("name");
    assert_eq!(table.sort_state().unwrap().key, "name");
}

#[test]
fn test_stationary_drag_does_not_suppress_sort() {
    let mut table = loaded(sample());
    assert!(table.begin_resize(295.0));
    table.end_resize();

    table.header_clicked("name");
    assert!(table.sort_state().is_some());
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_derived_selection_booleans() {
    let mut table = loaded(sample());
    assert!(!table.all_selected());
    assert!(!table.exactly_one_selected());

    table.toggle_select("/trunk/src", true);
    assert!(table.exactly_one_selected());
    assert_eq!(table.selected_count(), 1);

    table.select_all(true);
    assert!(table.all_selected());
    assert_eq!(table.selected_count(), 4);

    table.select_all(false);
    assert_eq!(table.selected_count(), 0);
}

#[test]
fn test_plain_click_selects_exclusively() {
    let mut table = loaded(sample());
    table.select_all(true);
    table.click_row("/trunk/old.txt");

    assert!(table.exactly_one_selected());
    assert!(table.is_selected("/trunk/old.txt"));
}

#[test]
fn test_selected_paths_follow_display_order() {
    let mut table = loaded(sample());
    table.toggle_select("/trunk/old.txt", true);
    table.toggle_select("/trunk/docs", true);

    assert_eq!(table.selected_paths(), ["/trunk/docs", "/trunk/old.txt"]);
}

#[test]
fn test_unknown_path_selection_ignored() {
    let mut table = loaded(sample());
    table.toggle_select("/elsewhere", true);
    table.click_row("/elsewhere");
    assert_eq!(table.selected_count(), 0);
}

// ============================================================================
// Rename session
// ============================================================================

#[test]
fn test_rename_requires_single_selection() {
    let mut table = loaded(sample());
    assert!(!table.begin_rename());

    table.select_all(true);
    assert!(!table.begin_rename());

    table.click_row("/trunk/old.txt");
    assert!(table.begin_rename());
    assert_eq!(table.renaming_path(), Some("/trunk/old.txt"));
}

#[test]
fn test_rename_commit_emits_intent() {
    let mut table = loaded(sample());
    table.click_row("/trunk/old.txt");
    table.begin_rename();

    let intent = table.commit_rename("archive.txt").unwrap();
    assert_eq!(
        intent,
        Some(HostIntent::Rename {
            path: "/trunk/old.txt".to_string(),
            new_name: "archive.txt".to_string(),
        })
    );
    assert!(table.renaming_path().is_none());
}

#[test]
fn test_invalid_rename_keeps_session_open() {
    let mut table = loaded(sample());
    table.click_row("/trunk/old.txt");
    table.begin_rename();

    let result = table.commit_rename("a/b");
    assert!(matches!(result, Err(NameError::ForbiddenCharacter { .. })));
    assert_eq!(
        table.renaming_path(),
        Some("/trunk/old.txt"),
        "invalid name leaves editing open for correction"
    );
}

#[test]
fn test_unchanged_name_closes_without_intent() {
    let mut table = loaded(sample());
    table.click_row("/trunk/old.txt");
    table.begin_rename();

    assert_eq!(table.commit_rename("old.txt").unwrap(), None);
    assert!(table.renaming_path().is_none());
}

#[test]
fn test_strict_rules_apply_to_commits() {
    let mut table = loaded(sample());
    table.set_name_rules(NameRules::strict());
    table.click_row("/trunk/old.txt");
    table.begin_rename();

    assert!(table.commit_rename("/lead").is_err());
}

// ============================================================================
// Virtual new-directory row
// ============================================================================

#[test]
fn test_second_virtual_row_focuses_existing() {
    let mut table = loaded(sample());
    assert_eq!(table.begin_virtual_row(), VirtualRowOutcome::Created);
    assert_eq!(table.begin_virtual_row(), VirtualRowOutcome::Focused);
    assert!(table.has_virtual_row());
}

#[test]
fn test_virtual_row_commit_emits_create_intent() {
    let mut table = loaded(sample());
    table.begin_virtual_row();

    let intent = table.commit_virtual_row("releases").unwrap();
    assert_eq!(
        intent,
        Some(HostIntent::CreateDir {
            name: "releases".to_string()
        })
    );
    assert!(!table.has_virtual_row());
}

#[test]
fn test_virtual_row_invalid_name_stays_open() {
    let mut table = loaded(sample());
    table.begin_virtual_row();

    assert!(table.commit_virtual_row("a:b").is_err());
    assert!(table.has_virtual_row());

    table.cancel_virtual_row();
    assert!(!table.has_virtual_row());
}

#[test]
fn test_virtual_row_excluded_from_selection_semantics() {
    let mut table = loaded(sample());
    table.begin_virtual_row();
    table.select_all(true);

    assert_eq!(table.selected_count(), 4, "virtual row is never selectable");
    assert!(table.all_selected());
}

// ============================================================================
// Bulk actions and activation
// ============================================================================

#[test]
fn test_delete_single_quotes_entry_name() {
    let mut table = loaded(sample());
    table.click_row("/trunk/old.txt");

    let Some(HostIntent::Delete { paths, confirm }) = table.delete_selected() else {
        panic!("expected a delete intent");
    };
    assert_eq!(paths, ["/trunk/old.txt"]);
    assert_eq!(confirm, "Delete \"old.txt\"?");
}

#[test]
fn test_delete_many_counts_items() {
    let mut table = loaded(sample());
    table.select_all(true);

    let Some(HostIntent::Delete { paths, confirm }) = table.delete_selected() else {
        panic!("expected a delete intent");
    };
    assert_eq!(paths.len(), 4);
    assert_eq!(confirm, "Delete 4 items?");
}

#[test]
fn test_bulk_actions_need_a_selection() {
    let table = loaded(sample());
    assert!(table.delete_selected().is_none());
    assert!(table.copy_selected(false).is_none());
    assert!(table.download_selected().is_none());
}

#[test]
fn test_move_flag_carried_on_copy() {
    let mut table = loaded(sample());
    table.click_row("/trunk/src");

    let intent = table.copy_selected(true);
    assert_eq!(
        intent,
        Some(HostIntent::Copy {
            paths: vec!["/trunk/src".to_string()],
            is_move: true,
        })
    );
}

#[test]
fn test_activate_directory_navigates_file_downloads() {
    let table = loaded(sample());
    assert_eq!(
        table.activate("/trunk/src"),
        Some(HostIntent::Navigate {
            path: "/trunk/src".to_string()
        })
    );
    assert_eq!(
        table.activate("/trunk/old.txt"),
        Some(HostIntent::Download {
            paths: vec!["/trunk/old.txt".to_string()]
        })
    );
    assert_eq!(table.activate("/nope"), None);
}
