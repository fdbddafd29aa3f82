//! Hit testing of pointer positions against the rendered table.
//!
//! The rendering surface publishes the geometry it last painted (row
//! rectangles plus the table body) and the engine resolves drop and
//! click targets against that snapshot. Coordinates share the origin
//! the surface used when measuring.

use depot_model::EntryKind;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Geometry of one rendered table row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowRegion {
    pub path: String,
    pub name: String,
    pub kind: EntryKind,
    pub rect: Rect,
}

/// Resolved drop destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTarget {
    pub path: String,
    pub name: String,
}

/// Snapshot of the rendered table geometry, in paint order (later rows
/// are on top).
#[derive(Debug, Clone, Default)]
pub struct Surface {
    pub rows: Vec<RowRegion>,
    pub body: Option<Rect>,
    /// Directory the table currently lists; the fallback target when
    /// the pointer is over the body but not over a directory row.
    pub current_dir: Option<DropTarget>,
}

/// Resolve the logical target under a pointer position.
///
/// A visible directory row wins; anywhere else inside the table body
/// falls back to the current directory; outside the body there is no
/// target. File rows are never targets themselves, they fall through
/// to the body.
pub fn resolve_drop_target(surface: &Surface, x: f64, y: f64) -> Option<DropTarget> {
    for row in surface.rows.iter().rev() {
        if row.kind == EntryKind::Directory && row.rect.contains(x, y) {
            return Some(DropTarget {
                path: row.path.clone(),
                name: row.name.clone(),
            });
        }
    }
    if surface.body.is_some_and(|body| body.contains(x, y)) {
        return surface.current_dir.clone();
    }
    None
}

/// Tracks the active drop target across a drag, re-resolving on every
/// pointer move.
#[derive(Debug, Default)]
pub struct DragTracker {
    current: Option<DropTarget>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a pointer position; returns whether the target changed so
    /// the surface knows to move its highlight and tooltip.
    pub fn update(&mut self, surface: &Surface, x: f64, y: f64) -> bool {
        let target = resolve_drop_target(surface, x, y);
        if target == self.current {
            return false;
        }
        log::debug!(
            "[surface] drop target now {:?}",
            target.as_ref().map(|t| t.path.as_str())
        );
        self.current = target;
        true
    }

    /// Target the drop would land on, for highlight and tooltip text.
    pub fn current(&self) -> Option<&DropTarget> {
        self.current.as_ref()
    }

    /// Drag finished or left the surface; returns the final target.
    pub fn end(&mut self) -> Option<DropTarget> {
        self.current.take()
    }
}
