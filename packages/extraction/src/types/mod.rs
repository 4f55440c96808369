//! Domain types for epitope extraction.

pub mod config;
pub mod record;

pub use config::ScrapeConfig;
pub use record::{
    columns, AlleleBuckets, AssayPair, AssaySummary, EpitopeDescriptor, OverallResponse,
    PageRecord,
};
