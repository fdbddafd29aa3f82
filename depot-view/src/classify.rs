//! Display classification of tree nodes.

use depot_model::{Category, ChangeState};

/// Icon and style class for one node, consumed by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    pub icon: &'static str,
    pub class: &'static str,
}

/// Map a node's category and change state to its display style.
///
/// Pure function of the two tags; never inspects siblings. Change state
/// only affects `Directory` and `File` nodes.
pub fn classify(category: Category, change: ChangeState) -> NodeStyle {
    match category {
        Category::Date => NodeStyle {
            icon: "fas fa-calendar-alt",
            class: "date",
        },
        Category::Revision => NodeStyle {
            icon: "fas fa-history",
            class: "revision",
        },
        Category::Directory => NodeStyle {
            icon: "fas fa-folder",
            class: change_class(change, "dir"),
        },
        Category::File => NodeStyle {
            icon: "far fa-file",
            class: change_class(change, "file"),
        },
    }
}

fn change_class(change: ChangeState, plain: &'static str) -> &'static str {
    match change {
        ChangeState::None => plain,
        ChangeState::Added => "added",
        ChangeState::Modified => "modified",
        ChangeState::Deleted => "deleted",
    }
}
