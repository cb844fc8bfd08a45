//! Item sizing and alignment within resolved tracks.

use trellis_core::{AxisSizing, BBox};

use crate::axis::Axis;
use crate::distribute::round;
use crate::matrix::Matrix;
use crate::track::{Track, TrackAlign};

/// Final box handed to one item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    /// Index of the item in the grid's item list
    pub item: usize,
    pub row: usize,
    pub col: usize,
    pub outer: BBox,
    /// Inner box local to `outer`
    pub inner: Option<BBox>,
}

/// Size of an item along one axis inside `track`.
pub(crate) fn item_extent(sizing: AxisSizing, intrinsic: f64, track: &Track) -> f64 {
    match sizing {
        AxisSizing::Fixed(size) => size,
        AxisSizing::Min => intrinsic,
        AxisSizing::Max => track.size,
        AxisSizing::Auto(declared) => match declared {
            Some(size) if !track.is_flex() => size,
            _ => track.size,
        },
    }
}

/// Offset of an item of size `extent` from the start of `track`.
pub(crate) fn align_offset(track: &Track, extent: f64) -> f64 {
    if extent == track.size {
        return 0.0;
    }
    match track.align {
        TrackAlign::Start => 0.0,
        TrackAlign::Center => round((track.size - extent) / 2.0),
        TrackAlign::End => track.size - extent,
    }
}

/// Compute every item's outer box from its row and column tracks.
pub(crate) fn place(matrix: &mut Matrix, rows: &[Track], cols: &[Track]) {
    for item in matrix.items_mut() {
        let (Some(row), Some(col)) = (rows.get(item.row), cols.get(item.col)) else {
            continue;
        };

        let width = item_extent(
            Axis::Horizontal.sizing(&item.sizing),
            Axis::Horizontal.hint_extent(&item.size_hint),
            col,
        );
        let height = item_extent(
            Axis::Vertical.sizing(&item.sizing),
            Axis::Vertical.hint_extent(&item.size_hint),
            row,
        );

        item.outer = BBox::new(
            col.start + align_offset(col, width),
            row.start + align_offset(row, height),
            width,
            height,
        );
    }
}
