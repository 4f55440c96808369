//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can match
//! on failure kinds. Extraction errors never cross the per-page boundary:
//! the pipeline catches and logs them, then moves on to the next page.

use thiserror::Error;

/// Errors raised while fetching a page.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("HTTP request failed for {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Errors raised by the extraction chain for a single script block.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The anchored assignment pattern was absent from the script text.
    #[error("no match for `var {anchor} = ...;` in script text")]
    NoMatch { anchor: String },

    /// The matched value text failed to decode even after quote
    /// normalization.
    #[error("payload for `{anchor}` is not valid JSON after quote normalization: {source}")]
    MalformedPayload {
        anchor: String,
        #[source]
        source: serde_json::Error,
    },

    /// A decoded payload was missing a field the chain requires.
    #[error("payload is missing required field `{path}`")]
    MissingField { path: &'static str },

    /// One or more of the organism/antigen/epitope rules failed to match.
    /// Partial descriptors are never produced.
    #[error("epitope sentence did not yield organism, antigen and epitope: {sentence:?}")]
    DescriptorIncomplete { sentence: String },
}

/// Errors raised while writing the final report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Output file could not be created or written.
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for extraction operations.
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;

/// Result type alias for report operations.
pub type ReportResult<T> = std::result::Result<T, ReportError>;
