//! Breadcrumb path bar with leading truncation.

use depot_model::NavSnapshot;
use unicode_width::UnicodeWidthStr;

use crate::intent::HostIntent;

/// Fallback estimate when the surface supplied no measured width.
const FALLBACK_CELL_WIDTH: f64 = 8.0;
const SEGMENT_PADDING: f64 = 16.0;

/// One path segment with its rendered (or estimated) pixel width.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub path: String,
    width: Option<f64>,
}

impl Segment {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
            width: None,
        }
    }

    /// Attach the width the surface measured for this segment.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn width(&self) -> f64 {
        self.width.unwrap_or_else(|| {
            self.label.width() as f64 * FALLBACK_CELL_WIDTH + SEGMENT_PADDING
        })
    }
}

/// Computes the maximal suffix of path segments fitting the container.
///
/// Leading segments are dropped oldest first; an ellipsis marker is
/// shown as soon as anything is dropped. The marker lives outside the
/// measured run and consumes no fit width. The last segment always
/// stays visible, even when it alone exceeds the available width.
#[derive(Debug, Default)]
pub struct BreadcrumbState {
    segments: Vec<Segment>,
    available_width: f64,
    visible_from: usize,
    ellipsis: bool,
    dirty: bool,
}

impl BreadcrumbState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the segment list on navigation.
    pub fn set_segments(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
        self.relayout();
    }

    /// Rebuild from a navigation snapshot, estimating widths.
    pub fn load(&mut self, nav: &NavSnapshot) {
        let segments = nav
            .segments
            .iter()
            .map(|s| Segment::new(s.label.clone(), s.path.clone()))
            .collect();
        self.set_segments(segments);
    }

    /// Container resize.
    pub fn set_available_width(&mut self, width: f64) {
        self.available_width = width;
        self.relayout();
    }

    fn relayout(&mut self) {
        let mut from = 0;
        loop {
            let shown = &self.segments[from..];
            if shown.len() <= 1 {
                break;
            }
            let total: f64 = shown.iter().map(Segment::width).sum();
            if total <= self.available_width {
                break;
            }
            from += 1;
        }
        self.visible_from = from;
        self.ellipsis = from > 0;
        self.dirty = true;
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Suffix of segments currently shown.
    pub fn visible(&self) -> &[Segment] {
        &self.segments[self.visible_from..]
    }

    /// Index of the first visible segment in the full list.
    pub fn visible_from(&self) -> usize {
        self.visible_from
    }

    pub fn has_ellipsis(&self) -> bool {
        self.ellipsis
    }

    /// Navigation intent for a click on the segment at `index` (full-list
    /// index, not visible-suffix index).
    pub fn navigate_to(&self, index: usize) -> Option<HostIntent> {
        self.segments.get(index).map(|s| HostIntent::Navigate {
            path: s.path.clone(),
        })
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }
}
