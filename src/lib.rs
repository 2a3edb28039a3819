//! A small Rust search client for OGC CSW 2.0.2 metadata catalogues.
//!
//! This crate implements the discovery flow used against Earth-observation
//! metadata catalogues: build a constraint tree from high-level query
//! parameters (free text, time range, bounding box), page through the
//! matching records, then pull resource URLs (OPeNDAP, WMS, direct
//! download) out of the result.
//!
//! The wire protocol stays outside the crate. A [`Catalogue`]
//! implementation supplied by the caller encodes each [`GetRecords`]
//! request, exchanges it over a [`Connection`] (or any transport), and
//! decodes the response into a [`RecordPage`]. Everything above that seam
//! lives here.
//!
//! ## Quick start
//! - Point a [`Connector`] at your catalogue (default endpoint, or
//!   `CSWSEARCH_ENDPOINT`, or [`Connector::to`]) and implement
//!   [`Catalogue`] over the connection with your XML encoder of choice.
//! - Or script a catalogue with [`mock::ScriptedCatalogue`], as below.
//!
//! ```
//! use cswsearch::mock::ScriptedCatalogue;
//! use cswsearch::{
//!     BoundingBox, Record, RecordPage, ResultSummary, SearchClient, SearchQuery, scheme,
//! };
//!
//! fn main() -> cswsearch::Result<()> {
//!     let page = RecordPage::new(
//!         ResultSummary { matches: 1, returned: 1, next_record: Some(0) },
//!         vec![Record::new("no.met.adc:sst-baltic").with_reference(
//!             scheme::OPENDAP,
//!             "https://thredds.met.no/thredds/dodsC/sst-baltic",
//!         )],
//!     );
//!     let catalogue = ScriptedCatalogue::new().with_page(page);
//!
//!     let query = SearchQuery::new()
//!         .with_text("*sea_surface_temperature*")
//!         .with_bbox(BoundingBox::new(-20.0, 60.0, 40.0, 85.0));
//!
//!     let mut client = SearchClient::new(catalogue);
//!     let records = client.search(&query)?;
//!
//!     for url in records.urls_for_scheme(scheme::OPENDAP) {
//!         println!("{url}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! For full usage and configuration details, see the crate README.

#![forbid(unsafe_code)]

mod catalogue;
mod connect;
mod error;
mod fetch;
mod filter;
pub mod mock;
mod query;
mod record;

pub use catalogue::{
    CSW_OUTPUT_SCHEMA, Catalogue, ElementSet, GetRecords, RecordPage, ResultSummary,
};
pub use connect::{Connection, Connector, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use error::{Error, Result};
pub use fetch::{DEFAULT_MAX_RECORDS, DEFAULT_PAGE_SIZE, SearchClient};
pub use filter::{
    ANY_TEXT, EPSG_4326, ESCAPE_CHAR, Filter, SINGLE_CHAR, TEMP_EXTENT_BEGIN, TEMP_EXTENT_END,
    WILDCARD,
};
pub use query::{BoundingBox, SearchQuery, TemporalRelation, TimeRange};
pub use record::{Record, RecordSet, Reference, scheme};
