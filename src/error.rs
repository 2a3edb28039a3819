//! Error types for catalogue searches.

use thiserror::Error;

/// Result type alias using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building filters, opening connections, or fetching
/// records.
///
/// All of them are fatal to the operation that raised them: filter
/// building stops at the first bad parameter, and a failed page request
/// aborts the whole fetch with no retry and no partial result.
#[derive(Debug, Error)]
pub enum Error {
    /// The temporal relation keyword was neither `"overlaps"` nor
    /// `"within"`.
    #[error("unknown temporal relation {0:?}, expected \"overlaps\" or \"within\"")]
    UnknownRelation(String),

    /// A page size of zero cannot advance the fetch loop.
    #[error("page size must be at least 1")]
    InvalidPageSize,

    /// A record budget of zero leaves nothing to fetch.
    #[error("record budget must be at least 1")]
    InvalidRecordBudget,

    /// The configured endpoint is not a usable HTTP(S) URL.
    #[error("invalid catalogue endpoint {endpoint:?}: {reason}")]
    Endpoint { endpoint: String, reason: String },

    /// The HTTP handle for the catalogue connection could not be built.
    #[error("failed to open connection to {endpoint}")]
    Connect {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// A request failed in transit.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalogue reported a failure for a request.
    #[error("catalogue error: {0}")]
    Catalogue(String),
}

impl Error {
    /// Catalogue-reported failure with a preformatted message.
    pub fn catalogue(message: impl Into<String>) -> Self {
        Error::Catalogue(message.into())
    }
}
