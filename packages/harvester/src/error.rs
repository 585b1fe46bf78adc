//! Error types for the harvester.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Invalid date format for a query boundary.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 2020-01-01)")]
    InvalidDate(String),

    /// A page size of zero would never advance the pagination cursor.
    #[error("Page size must be at least 1")]
    InvalidPageSize,

    /// A record's start date could not be canonicalized.
    #[error("Cannot canonicalize start date '{0}'. Expected YYYY-MM-DD")]
    DateParse(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A page request failed in transport or returned an error status.
    #[error("Request for page at offset {offset} failed: {source}")]
    Transport {
        offset: u32,
        #[source]
        source: reqwest::Error,
    },

    /// Page body is not well-formed XML.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvestError>;
