//! High-level query parameters for a catalogue search.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::Error;

/// Rectangular spatial extent in decimal degrees, longitude before
/// latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

/// Query window for a record's temporal extent, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
}

impl TimeRange {
    pub fn new(start: DateTime<Utc>, stop: DateTime<Utc>) -> Self {
        Self { start, stop }
    }
}

/// How a record's temporal extent must relate to the query window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemporalRelation {
    /// The record's extent intersects the window.
    #[default]
    Overlaps,
    /// The record's extent lies fully inside the window.
    Within,
}

impl FromStr for TemporalRelation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overlaps" => Ok(Self::Overlaps),
            "within" => Ok(Self::Within),
            other => Err(Error::UnknownRelation(other.to_string())),
        }
    }
}

impl fmt::Display for TemporalRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overlaps => write!(f, "overlaps"),
            Self::Within => write!(f, "within"),
        }
    }
}

/// Parameters of one catalogue search.
///
/// Every axis is optional; an absent axis places no constraint. The
/// temporal relation keyword defaults to `"overlaps"` and is only
/// validated when a time range is present, because it configures nothing
/// else.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub(crate) text: Option<String>,
    pub(crate) time: Option<TimeRange>,
    pub(crate) bbox: Option<BoundingBox>,
    pub(crate) relation: String,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            text: None,
            time: None,
            bbox: None,
            relation: TemporalRelation::Overlaps.to_string(),
        }
    }
}

impl SearchQuery {
    /// Unconstrained query matching every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrains the catalogue's free-text field to a pattern.
    ///
    /// Matching is case-sensitive; `*` matches any run of characters,
    /// `.` exactly one character, and `\` escapes either.
    pub fn with_text(mut self, pattern: impl Into<String>) -> Self {
        self.text = Some(pattern.into());
        self
    }

    /// Constrains records to the given temporal window.
    pub fn with_time(mut self, time: TimeRange) -> Self {
        self.time = Some(time);
        self
    }

    /// Constrains records to the given spatial extent.
    pub fn with_bbox(mut self, bbox: BoundingBox) -> Self {
        self.bbox = Some(bbox);
        self
    }

    /// Temporal relation keyword, `"overlaps"` or `"within"`.
    pub fn with_relation(mut self, relation: impl Into<String>) -> Self {
        self.relation = relation.into();
        self
    }
}
