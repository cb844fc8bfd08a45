//! Geometry value types.
//!
//! Rectangles are plain `Copy` values; every operation returns a new value.

use glam::Vec2;

/// Axis-aligned box assigned to an item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BBox {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl BBox {
    /// Create a box from its top-left corner and size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Create a box from its four edges.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Create a box from position and size vectors.
    pub fn from_vecs(position: Vec2, size: Vec2) -> Self {
        Self {
            left: position.x as f64,
            top: position.y as f64,
            width: size.x as f64,
            height: size.y as f64,
        }
    }

    /// Get the top-left corner as Vec2.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.left as f32, self.top as f32)
    }

    /// Get size as Vec2.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Right edge (left + width).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (top + height).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Move the box without resizing it.
    pub fn translate(&self, dx: f64, dy: f64) -> BBox {
        BBox::new(self.left + dx, self.top + dy, self.width, self.height)
    }

    /// Reduce the box by an inset on each side.
    pub fn shrink(&self, inset: &Margin) -> BBox {
        BBox::from_edges(
            self.left + inset.left,
            self.top + inset.top,
            self.right() - inset.right,
            self.bottom() - inset.bottom,
        )
    }

    /// Check whether `other` lies entirely inside this box.
    pub fn contains_box(&self, other: &BBox) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Offsets from each outer edge to the content an item draws inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margin {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Margin {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }

    /// Same inset on all sides.
    pub fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}
