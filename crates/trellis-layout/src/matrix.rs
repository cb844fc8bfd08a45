//! Dense cell matrix built from sparse item placements.
//!
//! Measured items live in one flat array in item order; cells and lines refer to them
//! by index.

use smallvec::SmallVec;
use trellis_core::{BBox, Layoutable, Margin, SizeHint, Sizing};

use crate::axis::Axis;
use crate::grid::GridItem;

/// An item together with what the layout learned about it.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredItem {
    /// Index of the item in the grid's item list
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub size_hint: SizeHint,
    pub sizing: Sizing,
    /// Outer box, set by placement
    pub outer: BBox,
    /// Working inset, harmonized across shared tracks
    pub inset: Option<Margin>,
    /// Inner box local to `outer`, present only when the size hint reported an inset
    pub inner: Option<BBox>,
}

/// Items assigned to one (row, col) position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    /// Indices into [`Matrix::items`]
    pub items: SmallVec<[usize; 1]>,
}

/// Row-major grid of cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    cells: Vec<Cell>,
    items: Vec<MeasuredItem>,
}

impl Matrix {
    /// Size the matrix to the largest referenced row and column and bucket every item
    /// into its cell, querying its size hint once.
    pub fn build<L: Layoutable>(items: &[GridItem<L>]) -> Self {
        let (nrows, ncols) = items.iter().fold((0, 0), |(nrows, ncols), item| {
            (nrows.max(item.row + 1), ncols.max(item.col + 1))
        });

        let mut matrix = Self {
            nrows,
            ncols,
            cells: vec![Cell::default(); nrows * ncols],
            items: Vec::with_capacity(items.len()),
        };

        for (index, item) in items.iter().enumerate() {
            let size_hint = item.layout.size_hint();
            let slot = matrix.items.len();
            matrix.items.push(MeasuredItem {
                index,
                row: item.row,
                col: item.col,
                size_hint,
                sizing: item.layout.sizing(),
                outer: BBox::default(),
                inset: size_hint.inner,
                inner: None,
            });
            let cell = item.row * ncols + item.col;
            matrix.cells[cell].items.push(slot);
        }

        matrix
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of lines along an axis: columns for horizontal, rows for vertical.
    pub fn count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Horizontal => self.ncols,
            Axis::Vertical => self.nrows,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.nrows && col < self.ncols {
            self.cells.get(row * self.ncols + col)
        } else {
            None
        }
    }

    /// All measured items in item order.
    pub fn items(&self) -> &[MeasuredItem] {
        &self.items
    }

    pub(crate) fn items_mut(&mut self) -> &mut [MeasuredItem] {
        &mut self.items
    }

    /// Item slots in row-major cell order.
    pub fn row_major(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().flat_map(|cell| cell.items.iter().copied())
    }

    /// Item slots on one line: column `index` for horizontal, row `index` for vertical.
    /// Cells are visited in order along the line.
    pub fn line(&self, axis: Axis, index: usize) -> Vec<usize> {
        if index >= self.count(axis) {
            return Vec::new();
        }
        let positions: Vec<usize> = match axis {
            Axis::Horizontal => (0..self.nrows).map(|row| row * self.ncols + index).collect(),
            Axis::Vertical => (0..self.ncols).map(|col| index * self.ncols + col).collect(),
        };
        positions
            .into_iter()
            .filter_map(|position| self.cells.get(position))
            .flat_map(|cell| cell.items.iter().copied())
            .collect()
    }
}
