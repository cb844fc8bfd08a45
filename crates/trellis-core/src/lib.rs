//! Core types for the Trellis grid layout engine.
//!
//! This crate provides the foundational types shared by the layout crates:
//! - Geometry value types (boxes, sizes, insets)
//! - The sizable-item contract ([`Layoutable`], [`Sizing`], [`SizeHint`])
//! - Error types

pub mod errors;
pub mod geometry;
pub mod sizing;

pub use errors::*;
pub use geometry::*;
pub use sizing::*;
