//! The sizable-item contract: sizing policies, size hints, and [`Layoutable`].

use crate::geometry::{BBox, Margin};

/// How an item sizes itself along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "policy", content = "size", rename_all = "lowercase"))]
pub enum AxisSizing {
    /// Exactly this size, regardless of the track
    Fixed(f64),
    /// Intrinsic size from the size hint
    Min,
    /// Fill the whole track
    Max,
    /// Fill the track unless a size was declared
    Auto(Option<f64>),
}

impl Default for AxisSizing {
    fn default() -> Self {
        Self::Auto(None)
    }
}

impl AxisSizing {
    /// Whether this axis demands all available space.
    pub fn is_max(&self) -> bool {
        matches!(self, Self::Max)
    }
}

/// Sizing policy on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sizing {
    pub width: AxisSizing,
    pub height: AxisSizing,
}

impl Sizing {
    pub fn new(width: AxisSizing, height: AxisSizing) -> Self {
        Self { width, height }
    }

    pub fn fixed(width: f64, height: f64) -> Self {
        Self::new(AxisSizing::Fixed(width), AxisSizing::Fixed(height))
    }

    pub fn min() -> Self {
        Self::new(AxisSizing::Min, AxisSizing::Min)
    }

    pub fn max() -> Self {
        Self::new(AxisSizing::Max, AxisSizing::Max)
    }

    pub fn auto() -> Self {
        Self::default()
    }

    /// Replace the horizontal policy.
    pub fn with_width(mut self, width: AxisSizing) -> Self {
        self.width = width;
        self
    }

    /// Replace the vertical policy.
    pub fn with_height(mut self, height: AxisSizing) -> Self {
        self.height = height;
        self
    }
}

/// An item's preferred size, optionally with the inset of its content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeHint {
    pub width: f64,
    pub height: f64,
    /// Offsets from the outer edges to the content, if the item has any
    pub inner: Option<Margin>,
}

impl SizeHint {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, inner: None }
    }

    pub fn with_inner(mut self, inner: Margin) -> Self {
        self.inner = Some(inner);
        self
    }
}

/// Anything a layout can measure and then place.
///
/// `size_hint` and `sizing` must be free of side effects. `set_geometry` hands the item
/// its final outer box and, when its size hint reported an inset, the inner box in
/// coordinates local to the outer box.
pub trait Layoutable {
    fn size_hint(&self) -> SizeHint;

    fn sizing(&self) -> Sizing;

    fn set_geometry(&mut self, outer: BBox, inner: Option<BBox>);
}

impl<T: Layoutable + ?Sized> Layoutable for Box<T> {
    fn size_hint(&self) -> SizeHint {
        (**self).size_hint()
    }

    fn sizing(&self) -> Sizing {
        (**self).sizing()
    }

    fn set_geometry(&mut self, outer: BBox, inner: Option<BBox>) {
        (**self).set_geometry(outer, inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        outer: Option<BBox>,
    }

    impl Layoutable for Recorder {
        fn size_hint(&self) -> SizeHint {
            SizeHint::new(10.0, 20.0).with_inner(Margin::uniform(1.0))
        }

        fn sizing(&self) -> Sizing {
            Sizing::min().with_width(AxisSizing::Max)
        }

        fn set_geometry(&mut self, outer: BBox, _inner: Option<BBox>) {
            self.outer = Some(outer);
        }
    }

    #[test]
    fn test_boxed_item_forwards() {
        let mut item: Box<dyn Layoutable> = Box::new(Recorder { outer: None });
        assert_eq!(item.size_hint().inner, Some(Margin::uniform(1.0)));
        assert!(item.sizing().width.is_max());
        assert_eq!(item.sizing().height, AxisSizing::Min);
        item.set_geometry(BBox::new(0.0, 0.0, 5.0, 5.0), None);
    }

    #[test]
    fn test_default_sizing_is_auto() {
        assert_eq!(Sizing::default(), Sizing::new(AxisSizing::Auto(None), AxisSizing::Auto(None)));
        assert_eq!(Sizing::fixed(3.0, 4.0).height, AxisSizing::Fixed(4.0));
    }
}
