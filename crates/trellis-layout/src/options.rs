//! Grid configuration.

use trellis_core::LayoutError;

use crate::track::{TrackDeclarations, TrackSpec};

/// Gaps between adjacent tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawSpacing", into = "RawSpacing"))]
pub enum Spacing {
    /// Same gap between columns and between rows
    Uniform(f64),
    /// Gap between columns, then gap between rows
    Axes { horizontal: f64, vertical: f64 },
}

impl Default for Spacing {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl Spacing {
    /// (horizontal, vertical) gaps.
    pub fn split(&self) -> (f64, f64) {
        match *self {
            Spacing::Uniform(value) => (value, value),
            Spacing::Axes { horizontal, vertical } => (horizontal, vertical),
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let (horizontal, vertical) = self.split();
        for value in [horizontal, vertical] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidSpacing { value });
            }
        }
        Ok(())
    }
}

impl From<f64> for Spacing {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<(f64, f64)> for Spacing {
    fn from((horizontal, vertical): (f64, f64)) -> Self {
        Self::Axes { horizontal, vertical }
    }
}

/// Wire form of spacing: a number, a `[horizontal, vertical]` pair, or a record.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum RawSpacing {
    Uniform(f64),
    Pair(f64, f64),
    Record { horizontal: f64, vertical: f64 },
}

#[cfg(feature = "serde")]
impl From<RawSpacing> for Spacing {
    fn from(raw: RawSpacing) -> Self {
        match raw {
            RawSpacing::Uniform(value) => Spacing::Uniform(value),
            RawSpacing::Pair(horizontal, vertical)
            | RawSpacing::Record { horizontal, vertical } => Spacing::Axes { horizontal, vertical },
        }
    }
}

#[cfg(feature = "serde")]
impl From<Spacing> for RawSpacing {
    fn from(spacing: Spacing) -> Self {
        match spacing {
            Spacing::Uniform(value) => RawSpacing::Uniform(value),
            Spacing::Axes { horizontal, vertical } => RawSpacing::Pair(horizontal, vertical),
        }
    }
}

/// Options controlling how a grid sizes and positions its tracks.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridOptions {
    /// Row declarations
    pub rows: TrackDeclarations,
    /// Column declarations
    pub cols: TrackDeclarations,
    /// Gaps between tracks
    pub spacing: Spacing,
    /// Start tracks at the outer box's origin instead of local zero
    pub absolute: bool,
}

impl GridOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row declarations.
    pub fn with_rows(mut self, rows: impl Into<TrackDeclarations>) -> Self {
        self.rows = rows.into();
        self
    }

    /// Set the column declarations.
    pub fn with_cols(mut self, cols: impl Into<TrackDeclarations>) -> Self {
        self.cols = cols.into();
        self
    }

    /// Declare one row.
    pub fn with_row(mut self, index: usize, spec: impl Into<TrackSpec>) -> Self {
        self.rows.set(index, spec);
        self
    }

    /// Declare one column.
    pub fn with_col(mut self, index: usize, spec: impl Into<TrackSpec>) -> Self {
        self.cols.set(index, spec);
        self
    }

    /// Set the gap between tracks.
    pub fn with_spacing(mut self, spacing: impl Into<Spacing>) -> Self {
        self.spacing = spacing.into();
        self
    }

    /// Position tracks in the outer box's coordinate space.
    pub fn with_absolute(mut self, absolute: bool) -> Self {
        self.absolute = absolute;
        self
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        self.rows.validate()?;
        self.cols.validate()?;
        self.spacing.validate()
    }

    /// Decode and validate options from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json(source: &str) -> Result<Self, LayoutError> {
        let options: GridOptions = serde_json::from_str(source)
            .map_err(|err| LayoutError::InvalidConfig { reason: err.to_string() })?;
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::{TrackAlign, TrackSizing};

    #[test]
    fn test_spacing_split() {
        assert_eq!(Spacing::from(4.0).split(), (4.0, 4.0));
        assert_eq!(Spacing::from((4.0, 8.0)).split(), (4.0, 8.0));
        assert_eq!(Spacing::default().split(), (0.0, 0.0));
    }

    #[test]
    fn test_validate() {
        assert!(GridOptions::default().validate().is_ok());
        assert_eq!(
            GridOptions::new().with_spacing((2.0, -1.0)).validate(),
            Err(LayoutError::InvalidSpacing { value: -1.0 })
        );
        assert!(GridOptions::new().with_col(1, TrackSizing::Flex(-2.0)).validate().is_err());
    }

    #[test]
    fn test_builders() {
        let options = GridOptions::new()
            .with_rows(TrackSizing::Min)
            .with_col(0, TrackSpec::fixed(20.0).with_align(TrackAlign::End))
            .with_absolute(true);
        assert_eq!(options.rows.get(5), TrackSpec::min());
        assert_eq!(options.cols.get(0).align, TrackAlign::End);
        assert_eq!(options.cols.get(1), TrackSpec::auto());
        assert!(options.absolute);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let options = GridOptions::from_json(
            r#"{
                "rows": "max",
                "cols": {"0": 120, "1": {"policy": "flex", "factor": 2, "align": "end"}},
                "spacing": [4, 8],
                "absolute": true
            }"#,
        )
        .unwrap();
        assert_eq!(options.rows.get(3), TrackSpec::max());
        assert_eq!(options.cols.get(0), TrackSpec::fixed(120.0));
        assert_eq!(options.cols.get(1), TrackSpec::flex(2.0).with_align(TrackAlign::End));
        assert_eq!(options.spacing.split(), (4.0, 8.0));
        assert!(options.absolute);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json_defaults_and_errors() {
        let options = GridOptions::from_json("{}").unwrap();
        assert_eq!(options, GridOptions::default());

        let options = GridOptions::from_json(r#"{"spacing": 6}"#).unwrap();
        assert_eq!(options.spacing, Spacing::Uniform(6.0));

        assert!(matches!(
            GridOptions::from_json(r#"{"rows": "huge"}"#),
            Err(LayoutError::InvalidConfig { .. })
        ));
        assert_eq!(
            GridOptions::from_json(r#"{"spacing": -3}"#),
            Err(LayoutError::InvalidSpacing { value: -3.0 })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_spacing_wire_forms() {
        let pair: Spacing = serde_json::from_str("[4, 8]").unwrap();
        assert_eq!(pair, Spacing::Axes { horizontal: 4.0, vertical: 8.0 });
        let record: Spacing = serde_json::from_str(r#"{"horizontal": 4, "vertical": 8}"#).unwrap();
        assert_eq!(record, pair);
        let uniform: Spacing = serde_json::from_str("6").unwrap();
        assert_eq!(uniform, Spacing::Uniform(6.0));

        assert_eq!(serde_json::to_string(&pair).unwrap(), "[4.0,8.0]");
        for spacing in [pair, uniform] {
            let encoded = serde_json::to_string(&spacing).unwrap();
            assert_eq!(serde_json::from_str::<Spacing>(&encoded).unwrap(), spacing);
        }
    }
}
