//! Measurement pass: intrinsic track sizes and the grid's preferred size.

use tracing::{debug, warn};
use trellis_core::{AxisSizing, Layoutable, Size, Sizing};

use crate::axis::Axis;
use crate::distribute::span;
use crate::grid::GridItem;
use crate::matrix::Matrix;
use crate::options::GridOptions;
use crate::track::{resolve_tracks, Track, TrackPolicy};

/// Everything the arrange pass needs from a measurement.
///
/// A measurement is produced fresh by every measure call and consumed by the arrange
/// call that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub(crate) matrix: Matrix,
    pub(crate) rows: Vec<Track>,
    pub(crate) cols: Vec<Track>,
    pub(crate) hspacing: f64,
    pub(crate) vspacing: f64,
    pub(crate) preferred: Size,
    pub(crate) item_count: usize,
}

impl Measurement {
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Rows with their intrinsic sizes.
    pub fn rows(&self) -> &[Track] {
        &self.rows
    }

    /// Columns with their intrinsic sizes.
    pub fn cols(&self) -> &[Track] {
        &self.cols
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.cols.len()
    }

    /// (horizontal, vertical) gaps.
    pub fn spacing(&self) -> (f64, f64) {
        (self.hspacing, self.vspacing)
    }

    /// Size the grid would like to occupy.
    pub fn preferred_size(&self) -> Size {
        self.preferred
    }

    /// Number of grid items this measurement covers.
    pub fn item_count(&self) -> usize {
        self.item_count
    }
}

/// Measure `items` under `options`. `sizing` is the grid's own sizing policy.
pub(crate) fn measure<L: Layoutable>(
    items: &[GridItem<L>],
    options: &GridOptions,
    sizing: &Sizing,
) -> Measurement {
    for (index, item) in items.iter().enumerate() {
        if item.row_span != 1 || item.col_span != 1 {
            warn!(
                "Item {} spans {}x{} cells; spanning is not supported, using one cell",
                index, item.row_span, item.col_span
            );
        }
    }

    let matrix = Matrix::build(items);

    let mut rows = resolve_tracks(&options.rows, matrix.nrows(), |y| {
        demands_max(&matrix, Axis::Vertical, y)
    });
    let mut cols = resolve_tracks(&options.cols, matrix.ncols(), |x| {
        demands_max(&matrix, Axis::Horizontal, x)
    });

    grow_to_content(&mut cols, &matrix, Axis::Horizontal);
    grow_to_content(&mut rows, &matrix, Axis::Vertical);

    let (hspacing, vspacing) = options.spacing.split();
    let hspacing = clamp_spacing(hspacing);
    let vspacing = clamp_spacing(vspacing);

    let width = match sizing.width {
        AxisSizing::Fixed(width) => width,
        _ => span(&cols, hspacing),
    };
    let height = match sizing.height {
        AxisSizing::Fixed(height) => height,
        _ => span(&rows, vspacing),
    };

    debug!(
        "Grid measure: {} items, {} rows, {} columns, preferred {}x{}",
        items.len(),
        rows.len(),
        cols.len(),
        width,
        height
    );

    Measurement {
        matrix,
        rows,
        cols,
        hspacing,
        vspacing,
        preferred: Size::new(width, height),
        item_count: items.len(),
    }
}

/// Whether any item on the line wants to fill the line's cross axis.
fn demands_max(matrix: &Matrix, axis: Axis, index: usize) -> bool {
    matrix
        .line(axis, index)
        .into_iter()
        .any(|slot| axis.sizing(&matrix.items()[slot].sizing).is_max())
}

/// Grow every non-fixed track to the largest intrinsic extent on it.
fn grow_to_content(tracks: &mut [Track], matrix: &Matrix, axis: Axis) {
    for (index, track) in tracks.iter_mut().enumerate() {
        if track.policy == TrackPolicy::Fixed {
            continue;
        }
        for slot in matrix.line(axis, index) {
            let extent = axis.hint_extent(&matrix.items()[slot].size_hint);
            track.size = track.size.max(extent);
        }
    }
}

fn clamp_spacing(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("Spacing {} is invalid; using 0", value);
        0.0
    }
}
