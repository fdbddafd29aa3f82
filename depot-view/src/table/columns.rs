//! Column layout, resize drag sessions and sort state.

/// Width of the hit region at a column's right edge that starts a
/// resize drag instead of a sort click.
pub const RESIZE_HANDLE_WIDTH: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub key: String,
    pub width: f64,
    pub min_width: f64,
}

impl Column {
    pub fn new(key: impl Into<String>, width: f64, min_width: f64) -> Self {
        Self {
            key: key.into(),
            width,
            min_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn invert(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Direction a user's first click on a column activates. Size and
    /// modification time start descending since largest/most recent
    /// first is what that click is almost always after.
    pub fn first_for(key: &str) -> Self {
        match key {
            "size" | "mtime" => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

/// Active sort indicator. Persists across reloads until changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

#[derive(Debug)]
struct ResizeSession {
    index: usize,
    start_x: f64,
    initial_width: f64,
    initial_total: f64,
    moved: bool,
}

/// Column widths plus the state of an in-progress resize drag.
///
/// A drag that produced any movement suppresses exactly one following
/// header click, so releasing a resize over a header does not also
/// toggle its sort.
#[derive(Debug)]
pub struct ColumnLayout {
    columns: Vec<Column>,
    available_width: f64,
    session: Option<ResizeSession>,
    suppress_next_sort: bool,
}

impl ColumnLayout {
    pub fn new(columns: Vec<Column>) -> Self {
        let available_width = columns.iter().map(|c| c.width).sum();
        Self {
            columns,
            available_width,
            session: None,
            suppress_next_sort: false,
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn total_width(&self) -> f64 {
        self.columns.iter().map(|c| c.width).sum()
    }

    pub fn width_of(&self, key: &str) -> Option<f64> {
        self.columns.iter().find(|c| c.key == key).map(|c| c.width)
    }

    /// Container width the column total may not exceed while resizing.
    pub fn set_available_width(&mut self, width: f64) {
        self.available_width = width;
    }

    /// Column whose resize handle is under the pointer, if any.
    ///
    /// A boundary is hot on both sides: the last 10 px of a header and
    /// the first 10 px of the following header both resize the column
    /// left of the boundary. Past the last column there is no following
    /// header, so only the left side is hot there.
    pub fn resize_target_at(&self, x: f64) -> Option<&str> {
        let mut edge = 0.0;
        for (index, column) in self.columns.iter().enumerate() {
            edge += column.width;
            if x > edge - RESIZE_HANDLE_WIDTH && x <= edge {
                return Some(&column.key);
            }
            if index + 1 < self.columns.len() && x > edge && x <= edge + RESIZE_HANDLE_WIDTH {
                return Some(&column.key);
            }
        }
        None
    }

    /// Start a resize drag if the pointer is on a handle.
    pub fn begin_resize(&mut self, x: f64) -> bool {
        let Some(key) = self.resize_target_at(x).map(str::to_owned) else {
            return false;
        };
        let index = self
            .columns
            .iter()
            .position(|c| c.key == key)
            .unwrap_or_default();
        self.session = Some(ResizeSession {
            index,
            start_x: x,
            initial_width: self.columns[index].width,
            initial_total: self.total_width(),
            moved: false,
        });
        true
    }

    /// Apply the pointer position to the dragged column. The candidate
    /// delta is capped so the column total never grows past the
    /// available width, then the result is clamped to the column's
    /// minimum. Returns whether a drag is in progress.
    pub fn drag_resize(&mut self, x: f64) -> bool {
        let Some(session) = &mut self.session else {
            return false;
        };
        if x != session.start_x {
            session.moved = true;
        }
        let delta = (x - session.start_x).min(self.available_width - session.initial_total);
        let width = (session.initial_width + delta).max(self.columns[session.index].min_width);
        self.columns[session.index].width = width;
        true
    }

    pub fn end_resize(&mut self) {
        if let Some(session) = self.session.take()
            && session.moved
        {
            self.suppress_next_sort = true;
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.session.is_some()
    }

    /// Consume the one-shot sort suppression left by a moving drag.
    pub fn take_sort_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_next_sort)
    }
}
