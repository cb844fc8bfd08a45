//! Axis selection shared by the row and column passes.

use trellis_core::{AxisSizing, BBox, Margin, SizeHint, Sizing};

/// Layout axis.
///
/// Columns are sized along [`Axis::Horizontal`], rows along [`Axis::Vertical`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Widths, left/right insets
    Horizontal,
    /// Heights, top/bottom insets
    Vertical,
}

impl Axis {
    pub fn hint_extent(self, hint: &SizeHint) -> f64 {
        match self {
            Axis::Horizontal => hint.width,
            Axis::Vertical => hint.height,
        }
    }

    pub fn sizing(self, sizing: &Sizing) -> AxisSizing {
        match self {
            Axis::Horizontal => sizing.width,
            Axis::Vertical => sizing.height,
        }
    }

    pub fn extent(self, bbox: &BBox) -> f64 {
        match self {
            Axis::Horizontal => bbox.width,
            Axis::Vertical => bbox.height,
        }
    }

    pub fn origin(self, bbox: &BBox) -> f64 {
        match self {
            Axis::Horizontal => bbox.left,
            Axis::Vertical => bbox.top,
        }
    }

    /// The (start, end) insets on this axis.
    pub fn margin_sides(self, margin: &Margin) -> (f64, f64) {
        match self {
            Axis::Horizontal => (margin.left, margin.right),
            Axis::Vertical => (margin.top, margin.bottom),
        }
    }

    pub fn set_margin_sides(self, margin: &mut Margin, start: f64, end: f64) {
        match self {
            Axis::Horizontal => {
                margin.left = start;
                margin.right = end;
            }
            Axis::Vertical => {
                margin.top = start;
                margin.bottom = end;
            }
        }
    }
}
