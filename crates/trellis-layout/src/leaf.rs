//! Leaf layout item with a fixed preferred size.

use trellis_core::{BBox, Layoutable, Margin, SizeHint, Sizing};

/// A childless item that reports a constant size hint and remembers where it was put.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutItem {
    size_hint: SizeHint,
    sizing: Sizing,
    bbox: BBox,
    inner_bbox: Option<BBox>,
}

impl LayoutItem {
    /// Create an item preferring `width` x `height`, sized `auto` on both axes.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size_hint: SizeHint::new(width, height),
            ..Default::default()
        }
    }

    /// Create an item fixed at `width` x `height`.
    pub fn fixed(width: f64, height: f64) -> Self {
        Self::new(width, height).with_sizing(Sizing::fixed(width, height))
    }

    /// Set the sizing policy.
    pub fn with_sizing(mut self, sizing: Sizing) -> Self {
        self.sizing = sizing;
        self
    }

    /// Report an inner content inset.
    pub fn with_inset(mut self, inset: Margin) -> Self {
        self.size_hint.inner = Some(inset);
        self
    }

    /// Outer box from the last layout.
    pub fn bbox(&self) -> BBox {
        self.bbox
    }

    /// Inner box from the last layout, local to [`LayoutItem::bbox`].
    pub fn inner_bbox(&self) -> Option<BBox> {
        self.inner_bbox
    }
}

impl Layoutable for LayoutItem {
    fn size_hint(&self) -> SizeHint {
        self.size_hint
    }

    fn sizing(&self) -> Sizing {
        self.sizing
    }

    fn set_geometry(&mut self, outer: BBox, inner: Option<BBox>) {
        self.bbox = outer;
        self.inner_bbox = inner;
    }
}
