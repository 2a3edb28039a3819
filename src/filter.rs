//! Filter expressions for catalogue queries.
//!
//! [`SearchQuery::to_filter`] turns the optional text, time, and bounding
//! box constraints of a query into one expression tree. The tree is a
//! logical model only; encoding it into the catalogue's wire grammar is
//! the job of the [`Catalogue`](crate::Catalogue) implementation that
//! receives it.

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::query::{BoundingBox, SearchQuery, TemporalRelation};

/// Property queried by free-text constraints.
pub const ANY_TEXT: &str = "csw:AnyText";
/// Property holding the start of a record's temporal extent.
pub const TEMP_EXTENT_BEGIN: &str = "apiso:TempExtent_begin";
/// Property holding the end of a record's temporal extent.
pub const TEMP_EXTENT_END: &str = "apiso:TempExtent_end";
/// Coordinate reference system tagged onto bounding box constraints, in
/// the catalogue's URN convention (longitude/latitude order).
pub const EPSG_4326: &str = "urn:ogc:def:crs:EPSG::4326";

/// Wildcard matching any run of characters in a text pattern.
pub const WILDCARD: char = '*';
/// Wildcard matching exactly one character.
pub const SINGLE_CHAR: char = '.';
/// Escape character for literal wildcards.
pub const ESCAPE_CHAR: char = '\\';

/// Temporal literals carry hour granularity. Minutes and seconds are
/// discarded on purpose, so two instants within the same hour produce
/// the same constraint.
const HOUR_FORMAT: &str = "%Y-%m-%d %H:00";

/// A constraint tree, built once per query and consumed by one fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Case-sensitive pattern match against a text property.
    Like {
        property: String,
        pattern: String,
        wildcard: char,
        single_char: char,
        escape_char: char,
        match_case: bool,
    },
    /// Property value at or below a literal.
    LessOrEqual { property: String, literal: String },
    /// Property value at or above a literal.
    GreaterOrEqual { property: String, literal: String },
    /// Spatial intersection with a bounding box in the given CRS.
    BoundingBox { bbox: BoundingBox, crs: String },
    /// Every child constraint must hold.
    And(Vec<Filter>),
}

impl Filter {
    /// Free-text constraint over [`ANY_TEXT`] with the catalogue's
    /// wildcard conventions.
    pub fn any_text(pattern: impl Into<String>) -> Self {
        Filter::Like {
            property: ANY_TEXT.to_string(),
            pattern: pattern.into(),
            wildcard: WILDCARD,
            single_char: SINGLE_CHAR,
            escape_char: ESCAPE_CHAR,
            match_case: true,
        }
    }

    /// Bounding box constraint tagged with [`EPSG_4326`].
    pub fn bounding_box(bbox: BoundingBox) -> Self {
        Filter::BoundingBox {
            bbox,
            crs: EPSG_4326.to_string(),
        }
    }

    fn begins_at_or_before(instant: DateTime<Utc>) -> Self {
        Filter::LessOrEqual {
            property: TEMP_EXTENT_BEGIN.to_string(),
            literal: hour_literal(instant),
        }
    }

    fn begins_at_or_after(instant: DateTime<Utc>) -> Self {
        Filter::GreaterOrEqual {
            property: TEMP_EXTENT_BEGIN.to_string(),
            literal: hour_literal(instant),
        }
    }

    fn ends_at_or_before(instant: DateTime<Utc>) -> Self {
        Filter::LessOrEqual {
            property: TEMP_EXTENT_END.to_string(),
            literal: hour_literal(instant),
        }
    }

    fn ends_at_or_after(instant: DateTime<Utc>) -> Self {
        Filter::GreaterOrEqual {
            property: TEMP_EXTENT_END.to_string(),
            literal: hour_literal(instant),
        }
    }
}

fn hour_literal(instant: DateTime<Utc>) -> String {
    instant.format(HOUR_FORMAT).to_string()
}

impl SearchQuery {
    /// Builds the composite filter for this query.
    ///
    /// One leaf constraint is collected per text and bounding box axis
    /// and two per time range. No leaf at all yields `Ok(None)` (match
    /// everything), a single leaf is returned bare, and several are
    /// joined under one [`Filter::And`].
    ///
    /// Fails with [`Error::UnknownRelation`](crate::Error::UnknownRelation)
    /// when a time range is present and the relation keyword is neither
    /// `"overlaps"` nor `"within"`.
    pub fn to_filter(&self) -> Result<Option<Filter>> {
        let mut parts = Vec::new();

        if let Some(text) = &self.text {
            parts.push(Filter::any_text(text.clone()));
        }

        if let Some(range) = self.time {
            match self.relation.parse::<TemporalRelation>()? {
                TemporalRelation::Overlaps => {
                    parts.push(Filter::begins_at_or_before(range.stop));
                    parts.push(Filter::ends_at_or_after(range.start));
                }
                TemporalRelation::Within => {
                    parts.push(Filter::begins_at_or_after(range.start));
                    parts.push(Filter::ends_at_or_before(range.stop));
                }
            }
        }

        if let Some(bbox) = self.bbox {
            parts.push(Filter::bounding_box(bbox));
        }

        Ok(match parts.len() {
            0 => None,
            1 => parts.pop(),
            _ => Some(Filter::And(parts)),
        })
    }
}
