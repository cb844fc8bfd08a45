//! Track sizing declarations and their resolution into per-line tracks.
//!
//! A declaration says how a row or column *wants* to be sized. Resolution turns it
//! into a [`Track`] whose size and start offset the measure and arrange passes fill in.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use tracing::{trace, warn};
use trellis_core::LayoutError;

/// Where undersized items sit inside a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TrackAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Declared sizing policy for a single row or column.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TrackSizing {
    /// Intrinsic content size; may receive leftover space
    #[default]
    Auto,
    /// Intrinsic content size; never grows
    Min,
    /// Fill leftover space (flex with factor 1)
    Max,
    /// Exactly this size
    Fixed(f64),
    /// Proportional share of leftover space
    Flex(f64),
}

/// A track declaration with its alignment.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTrackSpec", into = "RawTrackSpec"))]
pub struct TrackSpec {
    pub sizing: TrackSizing,
    pub align: TrackAlign,
}

impl TrackSpec {
    pub fn new(sizing: TrackSizing) -> Self {
        Self { sizing, align: TrackAlign::Start }
    }

    pub fn auto() -> Self {
        Self::new(TrackSizing::Auto)
    }

    pub fn min() -> Self {
        Self::new(TrackSizing::Min)
    }

    pub fn max() -> Self {
        Self::new(TrackSizing::Max)
    }

    pub fn fixed(size: f64) -> Self {
        Self::new(TrackSizing::Fixed(size))
    }

    pub fn flex(factor: f64) -> Self {
        Self::new(TrackSizing::Flex(factor))
    }

    /// Set the alignment.
    pub fn with_align(mut self, align: TrackAlign) -> Self {
        self.align = align;
        self
    }

    /// Reject sizes and factors the distribution pass cannot use.
    pub fn validate(&self) -> Result<(), LayoutError> {
        match self.sizing {
            TrackSizing::Fixed(size) => LayoutError::check_size(size).map(|_| ()),
            TrackSizing::Flex(factor) => LayoutError::check_factor(factor).map(|_| ()),
            TrackSizing::Auto | TrackSizing::Min | TrackSizing::Max => Ok(()),
        }
    }
}

impl From<TrackSizing> for TrackSpec {
    fn from(sizing: TrackSizing) -> Self {
        Self::new(sizing)
    }
}

impl FromStr for TrackSpec {
    type Err = LayoutError;

    /// Parse a quick token: `auto`, `min`, `max`, `flex(<factor>)`, or a fixed size.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let sizing = match token {
            "auto" => TrackSizing::Auto,
            "min" => TrackSizing::Min,
            "max" => TrackSizing::Max,
            _ if token.starts_with("flex(") && token.ends_with(')') => {
                let factor = &token["flex(".len()..token.len() - 1];
                let factor: f64 = factor.trim().parse().map_err(|_| {
                    LayoutError::InvalidTrackSizing {
                        value: s.to_string(),
                        reason: "expected a number inside flex(...)".to_string(),
                    }
                })?;
                TrackSizing::Flex(LayoutError::check_factor(factor)?)
            }
            _ => {
                let size: f64 = token.parse().map_err(|_| LayoutError::InvalidTrackSizing {
                    value: s.to_string(),
                    reason: "expected auto, min, max, flex(<factor>) or a number".to_string(),
                })?;
                TrackSizing::Fixed(LayoutError::check_size(size)?)
            }
        };
        Ok(Self::new(sizing))
    }
}

impl fmt::Display for TrackSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sizing {
            TrackSizing::Auto => write!(f, "auto"),
            TrackSizing::Min => write!(f, "min"),
            TrackSizing::Max => write!(f, "max"),
            TrackSizing::Fixed(size) => write!(f, "{}", size),
            TrackSizing::Flex(factor) => write!(f, "flex({})", factor),
        }
    }
}

/// Sizing declarations for every line on one axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDeclarations", into = "RawDeclarations"))]
pub enum TrackDeclarations {
    /// One declaration for every line
    Uniform(TrackSpec),
    /// Declarations by line index; missing lines are `auto`
    PerIndex(IndexMap<usize, TrackSpec>),
}

impl Default for TrackDeclarations {
    fn default() -> Self {
        Self::Uniform(TrackSpec::auto())
    }
}

impl TrackDeclarations {
    /// Declaration for a line.
    pub fn get(&self, index: usize) -> TrackSpec {
        match self {
            TrackDeclarations::Uniform(spec) => *spec,
            TrackDeclarations::PerIndex(specs) => specs.get(&index).copied().unwrap_or_default(),
        }
    }

    /// Declare a single line, switching to per-index declarations if needed.
    pub fn set(&mut self, index: usize, spec: impl Into<TrackSpec>) {
        if let TrackDeclarations::Uniform(_) = self {
            *self = TrackDeclarations::PerIndex(IndexMap::new());
        }
        if let TrackDeclarations::PerIndex(specs) = self {
            specs.insert(index, spec.into());
        }
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        match self {
            TrackDeclarations::Uniform(spec) => spec.validate(),
            TrackDeclarations::PerIndex(specs) => specs.values().try_for_each(TrackSpec::validate),
        }
    }
}

impl From<TrackSpec> for TrackDeclarations {
    fn from(spec: TrackSpec) -> Self {
        Self::Uniform(spec)
    }
}

impl From<TrackSizing> for TrackDeclarations {
    fn from(sizing: TrackSizing) -> Self {
        Self::Uniform(sizing.into())
    }
}

impl FromIterator<(usize, TrackSpec)> for TrackDeclarations {
    fn from_iter<I: IntoIterator<Item = (usize, TrackSpec)>>(iter: I) -> Self {
        Self::PerIndex(iter.into_iter().collect())
    }
}

/// Resolved sizing policy of a track.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "policy", rename_all = "lowercase"))]
pub enum TrackPolicy {
    Fixed,
    Min,
    Auto,
    Flex { factor: f64 },
}

/// A resolved row or column.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    pub policy: TrackPolicy,
    /// Current size; grows during measure and arrange
    pub size: f64,
    /// Offset of the track's leading edge, set by arrange
    pub start: f64,
    pub align: TrackAlign,
}

impl Track {
    /// Resolve a declaration. `demands_max` promotes an `auto` line to `max`.
    pub fn resolve(spec: TrackSpec, demands_max: bool) -> Self {
        let sizing = match spec.sizing {
            TrackSizing::Auto if demands_max => TrackSizing::Max,
            sizing => sizing,
        };

        let (policy, size) = match sizing {
            TrackSizing::Fixed(size) => (TrackPolicy::Fixed, clamp_size(size)),
            TrackSizing::Auto => (TrackPolicy::Auto, 0.0),
            TrackSizing::Min => (TrackPolicy::Min, 0.0),
            TrackSizing::Max => (TrackPolicy::Flex { factor: 1.0 }, 0.0),
            TrackSizing::Flex(factor) => (TrackPolicy::Flex { factor: clamp_factor(factor) }, 0.0),
        };

        Self {
            policy,
            size,
            start: 0.0,
            align: spec.align,
        }
    }

    pub fn is_flex(&self) -> bool {
        matches!(self.policy, TrackPolicy::Flex { .. })
    }

    /// Trailing edge (start + size).
    pub fn end(&self) -> f64 {
        self.start + self.size
    }
}

/// Resolve `count` lines. `demands_max(i)` reports whether any item on line `i` wants
/// to fill the cross axis.
pub(crate) fn resolve_tracks(
    declarations: &TrackDeclarations,
    count: usize,
    demands_max: impl Fn(usize) -> bool,
) -> Vec<Track> {
    (0..count)
        .map(|index| {
            let spec = declarations.get(index);
            let promote = spec.sizing == TrackSizing::Auto && demands_max(index);
            if promote {
                trace!("Promoted auto track {} to max", index);
            }
            Track::resolve(spec, promote)
        })
        .collect()
}

fn clamp_size(size: f64) -> f64 {
    match LayoutError::check_size(size) {
        Ok(size) => size,
        Err(err) => {
            warn!("{}; using 0", err);
            0.0
        }
    }
}

fn clamp_factor(factor: f64) -> f64 {
    match LayoutError::check_factor(factor) {
        Ok(factor) => factor,
        Err(err) => {
            warn!("{}; track receives no share", err);
            0.0
        }
    }
}

/// Wire form of a track declaration: a bare size, a quick token, or a record.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum RawTrackSpec {
    Size(f64),
    Token(String),
    Record {
        policy: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        factor: Option<f64>,
        #[serde(default, alias = "width", alias = "height", skip_serializing_if = "Option::is_none")]
        size: Option<f64>,
        #[serde(default)]
        align: TrackAlign,
    },
}

#[cfg(feature = "serde")]
impl TryFrom<RawTrackSpec> for TrackSpec {
    type Error = LayoutError;

    fn try_from(raw: RawTrackSpec) -> Result<Self, Self::Error> {
        match raw {
            RawTrackSpec::Size(size) => Ok(TrackSpec::fixed(LayoutError::check_size(size)?)),
            RawTrackSpec::Token(token) => token.parse(),
            RawTrackSpec::Record { policy, factor, size, align } => {
                let sizing = match (policy.as_str(), factor, size) {
                    ("auto", _, _) => TrackSizing::Auto,
                    ("min", _, _) => TrackSizing::Min,
                    ("max", _, _) => TrackSizing::Max,
                    ("fixed", _, Some(size)) => TrackSizing::Fixed(LayoutError::check_size(size)?),
                    ("flex", Some(factor), _) => {
                        TrackSizing::Flex(LayoutError::check_factor(factor)?)
                    }
                    ("fixed", _, None) => {
                        return Err(LayoutError::InvalidTrackSizing {
                            value: policy,
                            reason: "fixed tracks need a size".to_string(),
                        })
                    }
                    ("flex", None, _) => {
                        return Err(LayoutError::InvalidTrackSizing {
                            value: policy,
                            reason: "flex tracks need a factor".to_string(),
                        })
                    }
                    _ => {
                        return Err(LayoutError::InvalidTrackSizing {
                            value: policy,
                            reason: "unknown policy".to_string(),
                        })
                    }
                };
                Ok(TrackSpec { sizing, align })
            }
        }
    }
}

#[cfg(feature = "serde")]
impl From<TrackSpec> for RawTrackSpec {
    fn from(spec: TrackSpec) -> Self {
        let (policy, factor, size) = match spec.sizing {
            TrackSizing::Auto => ("auto", None, None),
            TrackSizing::Min => ("min", None, None),
            TrackSizing::Max => ("max", None, None),
            TrackSizing::Fixed(size) => ("fixed", None, Some(size)),
            TrackSizing::Flex(factor) => ("flex", Some(factor), None),
        };
        RawTrackSpec::Record {
            policy: policy.to_string(),
            factor,
            size,
            align: spec.align,
        }
    }
}

/// Wire form of per-axis declarations. JSON object keys are strings, so line indices
/// are parsed here rather than by the map deserializer.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum RawDeclarations {
    Uniform(TrackSpec),
    PerIndex(IndexMap<String, TrackSpec>),
}

#[cfg(feature = "serde")]
impl TryFrom<RawDeclarations> for TrackDeclarations {
    type Error = LayoutError;

    fn try_from(raw: RawDeclarations) -> Result<Self, Self::Error> {
        match raw {
            RawDeclarations::Uniform(spec) => Ok(TrackDeclarations::Uniform(spec)),
            RawDeclarations::PerIndex(specs) => specs
                .into_iter()
                .map(|(key, spec)| {
                    let index = key.trim().parse::<usize>().map_err(|_| {
                        LayoutError::InvalidTrackSizing {
                            value: key.clone(),
                            reason: "line index must be a non-negative integer".to_string(),
                        }
                    })?;
                    Ok((index, spec))
                })
                .collect::<Result<IndexMap<_, _>, LayoutError>>()
                .map(TrackDeclarations::PerIndex),
        }
    }
}

#[cfg(feature = "serde")]
impl From<TrackDeclarations> for RawDeclarations {
    fn from(declarations: TrackDeclarations) -> Self {
        match declarations {
            TrackDeclarations::Uniform(spec) => RawDeclarations::Uniform(spec),
            TrackDeclarations::PerIndex(specs) => RawDeclarations::PerIndex(
                specs
                    .into_iter()
                    .map(|(index, spec)| (index.to_string(), spec))
                    .collect(),
            ),
        }
    }
}
