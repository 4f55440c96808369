//! Epitope record extraction from IEDB reference pages.
//!
//! IEDB reference pages embed their epitope tables as JavaScript variable
//! assignments inside inline script tags. This library fetches each page,
//! locates the embedded data block, leniently decodes the pseudo-JSON
//! payloads, and folds the result into one ordered record per page,
//! collected into a sortable CSV report.
//!
//! # Pipeline
//!
//! 1. Fetch the page ([`traits::PageFetcher`], [`fetchers::HttpFetcher`])
//! 2. Locate qualifying inline script blocks ([`script`])
//! 3. Extract the embedded assignments ([`extract::pattern`])
//! 4. Leniently decode the pseudo-JSON ([`extract::payload`])
//! 5. Split the epitope sentence ([`extract::descriptor`])
//! 6. Classify alleles and aggregate assays ([`extract::alleles`],
//!    [`extract::assays`])
//! 7. Assemble the record ([`extract::assemble`]) and build the report
//!    ([`report`])
//!
//! # Failure policy
//!
//! Extraction runs inside a per-page boundary ([`pipeline::Scraper`]):
//! one page's malformed data is logged and skipped, never fatal to the
//! batch. Only an unreadable link file or an unwritable output path ends
//! a run early, and both live with the caller.
//!
//! # Usage
//!
//! ```rust,ignore
//! use iedb_extraction::{fetchers::HttpFetcher, pipeline::Scraper, report::Report};
//!
//! let scraper = Scraper::new(HttpFetcher::new()?);
//! let outcome = scraper.run(&links, |_, _| {}).await;
//! Report::from_records(outcome.records).write_csv("epitopes.csv")?;
//! ```

pub mod error;
pub mod extract;
pub mod fetchers;
pub mod pipeline;
pub mod report;
pub mod script;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExtractError, FetchError, ReportError};
pub use fetchers::HttpFetcher;
pub use pipeline::{BatchOutcome, Scraper};
pub use report::Report;
pub use traits::PageFetcher;
pub use types::{
    columns, AlleleBuckets, AssayPair, AssaySummary, EpitopeDescriptor, OverallResponse,
    PageRecord, ScrapeConfig,
};
