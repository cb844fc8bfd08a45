//! Two-pass grid layout.
//!
//! Items sit in (row, col) cells of a sparse grid. Layout happens in two steps:
//!
//! 1. [`Grid::measure`] sizes every track to its content and reports the size the grid
//!    would like.
//! 2. [`Grid::arrange`] takes that measurement and the box the grid was actually given,
//!    distributes the leftover space, places and aligns every item, harmonizes content
//!    insets across shared tracks, and hands each item its final geometry.
//!
//! The measurement is an ordinary value, so arranging always uses the state of the
//! measurement it was given.

use tracing::debug;
use trellis_core::{BBox, LayoutError, Layoutable, SizeHint, Sizing};

use crate::distribute::distribute;
use crate::harmonize::harmonize;
use crate::measure::{measure, Measurement};
use crate::options::{GridOptions, Spacing};
use crate::placement::{place, Placement};
use crate::track::{Track, TrackDeclarations, TrackSpec};

/// An item placed at a grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GridItem<L = Box<dyn Layoutable>> {
    pub layout: L,
    pub row: usize,
    pub col: usize,
    /// Reserved; items always occupy one row
    pub row_span: usize,
    /// Reserved; items always occupy one column
    pub col_span: usize,
}

impl<L> GridItem<L> {
    pub fn new(layout: L, row: usize, col: usize) -> Self {
        Self {
            layout,
            row,
            col,
            row_span: 1,
            col_span: 1,
        }
    }
}

/// Result of arranging a grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arrangement {
    /// Rows after distribution
    pub rows: Vec<Track>,
    /// Columns after distribution
    pub cols: Vec<Track>,
    /// One entry per item, in row-major cell order
    pub placements: Vec<Placement>,
}

impl Arrangement {
    /// Placement of the item at `index` in the grid's item list.
    pub fn placement(&self, index: usize) -> Option<&Placement> {
        self.placements.iter().find(|placement| placement.item == index)
    }
}

/// A grid of sizable items.
#[derive(Debug, Clone)]
pub struct Grid<L = Box<dyn Layoutable>> {
    items: Vec<GridItem<L>>,
    options: GridOptions,
    sizing: Sizing,
    bbox: BBox,
}

impl<L: Layoutable> Grid<L> {
    /// Create a grid from placed items.
    pub fn new(items: Vec<GridItem<L>>) -> Self {
        Self {
            items,
            options: GridOptions::default(),
            sizing: Sizing::default(),
            bbox: BBox::default(),
        }
    }

    /// A single row: the i-th item goes to column i.
    pub fn row(layouts: impl IntoIterator<Item = L>) -> Self {
        Self::new(
            layouts
                .into_iter()
                .enumerate()
                .map(|(col, layout)| GridItem::new(layout, 0, col))
                .collect(),
        )
    }

    /// A single column: the i-th item goes to row i.
    pub fn column(layouts: impl IntoIterator<Item = L>) -> Self {
        Self::new(
            layouts
                .into_iter()
                .enumerate()
                .map(|(row, layout)| GridItem::new(layout, row, 0))
                .collect(),
        )
    }

    /// Replace all options.
    pub fn with_options(mut self, options: GridOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the row declarations.
    pub fn with_rows(mut self, rows: impl Into<TrackDeclarations>) -> Self {
        self.options.rows = rows.into();
        self
    }

    /// Set the column declarations.
    pub fn with_cols(mut self, cols: impl Into<TrackDeclarations>) -> Self {
        self.options.cols = cols.into();
        self
    }

    /// Declare a single row.
    pub fn with_row(mut self, index: usize, spec: impl Into<TrackSpec>) -> Self {
        self.options.rows.set(index, spec);
        self
    }

    /// Declare a single column.
    pub fn with_col(mut self, index: usize, spec: impl Into<TrackSpec>) -> Self {
        self.options.cols.set(index, spec);
        self
    }

    /// Set the gap between tracks.
    pub fn with_spacing(mut self, spacing: impl Into<Spacing>) -> Self {
        self.options.spacing = spacing.into();
        self
    }

    /// Position tracks in the outer box's coordinate space.
    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.options.absolute = absolute;
        self
    }

    /// Set the grid's own sizing policy, used when it is nested in another layout.
    pub fn with_sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut GridOptions {
        &mut self.options
    }

    pub fn items(&self) -> &[GridItem<L>] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<GridItem<L>> {
        &mut self.items
    }

    /// Add an item at a cell.
    pub fn push(&mut self, layout: L, row: usize, col: usize) {
        self.items.push(GridItem::new(layout, row, col));
    }

    /// Outer box from the last arrange.
    pub fn bbox(&self) -> BBox {
        self.bbox
    }

    /// Measure the current items and options.
    pub fn measure(&self) -> Measurement {
        measure(&self.items, &self.options, &self.sizing)
    }

    /// Lay the grid out inside `outer` using `measurement`, then hand every item its
    /// geometry.
    ///
    /// The measurement must come from this grid with its current item list.
    pub fn arrange(
        &mut self,
        measurement: Measurement,
        outer: BBox,
    ) -> Result<Arrangement, LayoutError> {
        self.check_measurement(&measurement)?;
        let edges = [outer.left, outer.top, outer.width, outer.height];
        if !edges.iter().all(|value| value.is_finite()) {
            return Err(LayoutError::InvalidGeometry {
                reason: format!("outer box {:?} is not finite", outer),
            });
        }
        Ok(self.apply(measurement, outer))
    }

    /// Reject a measurement taken over a different item list or different cells.
    fn check_measurement(&self, measurement: &Measurement) -> Result<(), LayoutError> {
        if measurement.item_count() != self.items.len() {
            return Err(LayoutError::StaleMeasurement {
                reason: format!(
                    "measured {} items but the grid now has {}",
                    measurement.item_count(),
                    self.items.len()
                ),
            });
        }
        for measured in measurement.matrix().items() {
            let Some(item) = self.items.get(measured.index) else {
                continue;
            };
            if (item.row, item.col) != (measured.row, measured.col) {
                return Err(LayoutError::StaleMeasurement {
                    reason: format!(
                        "item {} moved from ({}, {}) to ({}, {})",
                        measured.index, measured.row, measured.col, item.row, item.col
                    ),
                });
            }
        }
        Ok(())
    }

    fn apply(&mut self, measurement: Measurement, outer: BBox) -> Arrangement {
        let Measurement {
            mut matrix,
            mut rows,
            mut cols,
            hspacing,
            vspacing,
            ..
        } = measurement;

        let (left, top) = if self.options.absolute {
            (outer.left, outer.top)
        } else {
            (0.0, 0.0)
        };

        distribute(&mut cols, outer.width, hspacing, left);
        distribute(&mut rows, outer.height, vspacing, top);
        place(&mut matrix, &rows, &cols);
        harmonize(&mut matrix, &rows, &cols);

        let placements: Vec<Placement> = matrix
            .row_major()
            .map(|slot| {
                let item = &matrix.items()[slot];
                Placement {
                    item: item.index,
                    row: item.row,
                    col: item.col,
                    outer: item.outer,
                    inner: item.inner,
                }
            })
            .collect();

        for placement in &placements {
            if let Some(item) = self.items.get_mut(placement.item) {
                item.layout.set_geometry(placement.outer, placement.inner);
            }
        }

        self.bbox = outer;

        debug!(
            "Grid arrange complete: {} rows, {} columns, {} items in {}x{}",
            rows.len(),
            cols.len(),
            placements.len(),
            outer.width,
            outer.height
        );

        Arrangement {
            rows,
            cols,
            placements,
        }
    }
}

impl<L: Layoutable> Layoutable for Grid<L> {
    fn size_hint(&self) -> SizeHint {
        let preferred = self.measure().preferred_size();
        SizeHint::new(preferred.width, preferred.height)
    }

    fn sizing(&self) -> Sizing {
        self.sizing
    }

    fn set_geometry(&mut self, outer: BBox, _inner: Option<BBox>) {
        let measurement = self.measure();
        self.apply(measurement, outer);
    }
}
