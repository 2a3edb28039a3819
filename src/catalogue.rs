//! The catalogue collaborator seam.
//!
//! Implementations of [`Catalogue`] own the CSW 2.0.2 wire exchange:
//! request encoding, response parsing, and the transport underneath
//! (usually a [`Connection`](crate::Connection)). This crate hands them
//! the logical parameters of one page request and consumes the typed
//! page they return.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::Filter;
use crate::record::Record;

/// Output schema requested by fetches, so records carry reference lists.
pub const CSW_OUTPUT_SCHEMA: &str = "http://www.opengis.net/cat/csw/2.0.2";

/// Element set to return for each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementSet {
    Brief,
    Summary,
    /// Full detail, including reference lists.
    #[default]
    Full,
}

impl fmt::Display for ElementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brief => write!(f, "brief"),
            Self::Summary => write!(f, "summary"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// Logical parameters of one GetRecords page request.
#[derive(Debug, Clone)]
pub struct GetRecords<'a> {
    /// Constraint tree, or `None` to match everything.
    pub filter: Option<&'a Filter>,
    /// Position of the first record wanted. Fetches start at 0 and take
    /// later positions from [`ResultSummary::next_record`].
    pub start_position: usize,
    /// Upper bound on records returned by this single call.
    pub max_records: usize,
    /// Element set to return; fetches always ask for [`ElementSet::Full`].
    pub element_set: ElementSet,
    /// Output schema URI; fetches always ask for [`CSW_OUTPUT_SCHEMA`].
    pub output_schema: &'a str,
}

/// Result summary the catalogue reports alongside each page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Total records matching the query.
    pub matches: usize,
    /// Records returned in this page.
    pub returned: usize,
    /// Start position of the next page. `Some(0)` is the catalogue's
    /// sentinel for "no further records"; `None` means the hint was
    /// omitted.
    #[serde(default)]
    pub next_record: Option<usize>,
}

/// One page of records plus its summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPage {
    pub summary: ResultSummary,
    pub records: Vec<Record>,
}

impl RecordPage {
    pub fn new(summary: ResultSummary, records: Vec<Record>) -> Self {
        Self { summary, records }
    }
}

/// A connected CSW catalogue.
pub trait Catalogue {
    /// Issues one GetRecords call and returns the resulting page.
    ///
    /// A failure here is fatal to the fetch that issued the call; the
    /// driver performs no retry and keeps no partial results.
    fn get_records(&mut self, request: &GetRecords<'_>) -> Result<RecordPage>;
}
