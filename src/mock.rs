//! Scripted catalogue for deterministic testing.
//!
//! [`ScriptedCatalogue`] replays a fixed sequence of pages (or failures)
//! and logs every request it receives, so paging behaviour can be
//! asserted without a server.
//!
//! ```
//! use cswsearch::mock::ScriptedCatalogue;
//! use cswsearch::{Record, RecordPage, ResultSummary, SearchClient};
//!
//! let page = RecordPage::new(
//!     ResultSummary { matches: 1, returned: 1, next_record: Some(0) },
//!     vec![Record::new("no.met:sst")],
//! );
//! let mut client = SearchClient::new(ScriptedCatalogue::new().with_page(page));
//!
//! let records = client.fetch(None)?;
//! assert_eq!(records.len(), 1);
//! assert_eq!(client.into_inner().requests().len(), 1);
//! # Ok::<(), cswsearch::Error>(())
//! ```

use std::collections::VecDeque;

use crate::catalogue::{Catalogue, ElementSet, GetRecords, RecordPage};
use crate::error::{Error, Result};

/// One logged GetRecords call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedRequest {
    pub start_position: usize,
    pub max_records: usize,
    pub element_set: ElementSet,
    pub output_schema: String,
    /// Whether the call carried a constraint tree.
    pub filtered: bool,
}

/// Catalogue test double replaying a scripted page sequence.
#[derive(Debug, Default)]
pub struct ScriptedCatalogue {
    script: VecDeque<Result<RecordPage>>,
    requests: Vec<LoggedRequest>,
}

impl ScriptedCatalogue {
    /// Empty script; every call fails until pages are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page to the script.
    pub fn with_page(mut self, page: RecordPage) -> Self {
        self.script.push_back(Ok(page));
        self
    }

    /// Appends a failing call to the script.
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.script.push_back(Err(Error::catalogue(message)));
        self
    }

    /// Every request received so far, in call order.
    pub fn requests(&self) -> &[LoggedRequest] {
        &self.requests
    }
}

impl Catalogue for ScriptedCatalogue {
    fn get_records(&mut self, request: &GetRecords<'_>) -> Result<RecordPage> {
        self.requests.push(LoggedRequest {
            start_position: request.start_position,
            max_records: request.max_records,
            element_set: request.element_set,
            output_schema: request.output_schema.to_string(),
            filtered: request.filter.is_some(),
        });
        self.script
            .pop_front()
            .unwrap_or_else(|| Err(Error::catalogue("scripted catalogue ran out of pages")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::{CSW_OUTPUT_SCHEMA, ResultSummary};

    fn request() -> GetRecords<'static> {
        GetRecords {
            filter: None,
            start_position: 0,
            max_records: 5,
            element_set: ElementSet::Full,
            output_schema: CSW_OUTPUT_SCHEMA,
        }
    }

    #[test]
    fn replays_pages_in_script_order_and_logs_calls() {
        let first = RecordPage::new(
            ResultSummary {
                matches: 0,
                returned: 0,
                next_record: Some(0),
            },
            Vec::new(),
        );
        let mut catalogue = ScriptedCatalogue::new().with_page(first.clone());

        assert_eq!(catalogue.get_records(&request()).unwrap(), first);
        assert_eq!(catalogue.requests().len(), 1);
        assert_eq!(catalogue.requests()[0].max_records, 5);
        assert!(!catalogue.requests()[0].filtered);
    }

    #[test]
    fn an_exhausted_script_fails_but_still_logs() {
        let mut catalogue = ScriptedCatalogue::new();

        let err = catalogue.get_records(&request()).unwrap_err();

        assert!(matches!(err, Error::Catalogue(_)), "got {err:?}");
        assert_eq!(catalogue.requests().len(), 1);
    }
}
