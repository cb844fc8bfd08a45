//! Grid layout for Trellis.
//!
//! This crate lays out sizable items in a grid of rows and columns using a two-pass
//! protocol.
//!
//! # Architecture
//!
//! 1. **Measure**: Items are indexed into a cell matrix, each track's policy is resolved
//!    from its declaration, and tracks grow to fit their content
//! 2. **Arrange**: Leftover space goes to flex (or auto) tracks, items are sized and
//!    aligned within their cells, and content insets are harmonized per row and column
//!
//! # Example
//!
//! ```ignore
//! use trellis_layout::{Grid, LayoutItem, TrackSpec};
//! use trellis_core::BBox;
//!
//! let mut grid = Grid::row([LayoutItem::fixed(50.0, 20.0), LayoutItem::new(10.0, 20.0)])
//!     .with_col(1, TrackSpec::flex(1.0))
//!     .with_spacing(4.0);
//!
//! let measurement = grid.measure();
//! let arrangement = grid.arrange(measurement, BBox::new(0.0, 0.0, 300.0, 20.0))?;
//!
//! for placement in &arrangement.placements {
//!     println!("{}: {:?}", placement.item, placement.outer);
//! }
//! ```

mod axis;
mod distribute;
mod grid;
mod harmonize;
mod leaf;
mod matrix;
mod measure;
mod options;
mod placement;
mod track;

pub use axis::Axis;
pub use grid::{Arrangement, Grid, GridItem};
pub use leaf::LayoutItem;
pub use matrix::{Cell, Matrix, MeasuredItem};
pub use measure::Measurement;
pub use options::{GridOptions, Spacing};
pub use placement::Placement;
pub use track::{Track, TrackAlign, TrackDeclarations, TrackPolicy, TrackSizing, TrackSpec};

pub use trellis_core::{AxisSizing, BBox, LayoutError, Layoutable, Margin, Size, SizeHint, Sizing};
