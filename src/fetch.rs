//! Paginated record fetching.
//!
//! [`SearchClient`] drives repeated GetRecords calls against a
//! [`Catalogue`] until the server signals the end of the result stream or
//! the record budget fills, merging every returned page into one
//! [`RecordSet`].

use tracing::debug;

use crate::catalogue::{CSW_OUTPUT_SCHEMA, Catalogue, ElementSet, GetRecords};
use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::query::SearchQuery;
use crate::record::RecordSet;

/// Records requested per GetRecords call unless overridden.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Total record budget per fetch unless overridden.
pub const DEFAULT_MAX_RECORDS: usize = 100;

/// Search workflow over a catalogue collaborator.
///
/// One client drives one sequence of calls at a time; run concurrent
/// queries on separate clients with separate catalogue handles.
#[derive(Debug)]
pub struct SearchClient<C> {
    catalogue: C,
    page_size: usize,
    max_records: usize,
}

impl<C: Catalogue> SearchClient<C> {
    /// Client with the default paging parameters.
    pub fn new(catalogue: C) -> Self {
        Self {
            catalogue,
            page_size: DEFAULT_PAGE_SIZE,
            max_records: DEFAULT_MAX_RECORDS,
        }
    }

    /// Records to request per call (default 10).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Total records to accumulate before stopping (default 100).
    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    /// Consumes the client, returning the catalogue handle.
    pub fn into_inner(self) -> C {
        self.catalogue
    }

    /// Builds the filter for `query` and fetches every matching record
    /// within the configured budget.
    pub fn search(&mut self, query: &SearchQuery) -> Result<RecordSet> {
        let filter = query.to_filter()?;
        self.fetch(filter)
    }

    /// Fetches records page by page until the server reports no more
    /// records, the advanced cursor reaches the budget, or the
    /// accumulated set fills it.
    ///
    /// Pass `None` to match every record in the catalogue. Records are
    /// requested with the full element set so their references come
    /// along. A failed page call aborts the fetch; nothing partial is
    /// returned.
    pub fn fetch(&mut self, filter: Option<Filter>) -> Result<RecordSet> {
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize);
        }
        if self.max_records == 0 {
            return Err(Error::InvalidRecordBudget);
        }

        let mut accumulated = RecordSet::new();
        let mut cursor = 0;

        loop {
            let limit = self.page_size.min(self.max_records - accumulated.len());
            let request = GetRecords {
                filter: filter.as_ref(),
                start_position: cursor,
                max_records: limit,
                element_set: ElementSet::Full,
                output_schema: CSW_OUTPUT_SCHEMA,
            };
            let page = self.catalogue.get_records(&request)?;
            let summary = page.summary;
            accumulated.extend(page.records);

            debug!(
                start = cursor,
                returned = summary.returned,
                matches = summary.matches,
                accumulated = accumulated.len(),
                "fetched catalogue page"
            );

            if summary.next_record == Some(0) {
                break;
            }
            cursor = next_start(cursor, self.page_size, summary.next_record);
            if cursor >= self.max_records || accumulated.len() >= self.max_records {
                break;
            }
        }

        Ok(accumulated)
    }
}

/// Next start position for the paging cursor.
///
/// The server's reported next-record position wins whenever it actually
/// advances past the cursor; a missing or stale report falls back to the
/// page-step convention. Either way the cursor strictly grows, so a
/// fetch always terminates.
fn next_start(cursor: usize, page_size: usize, next_record: Option<usize>) -> usize {
    match next_record {
        Some(next) if next > cursor => next,
        _ => cursor + page_size + 1,
    }
}
