//! Configuration for the scraping pipeline.

use serde::{Deserialize, Serialize};

/// Marker variable that carries the reference epitope sentence.
///
/// The name is misspelled in the IEDB page source itself; the payload key
/// underneath it is spelled correctly (`referenceEpitopeString`).
pub const EPITOPE_DATA_VAR: &str = "refernceEpitopeData";

/// Marker variable that carries the compiled allele/assay tables.
pub const COMPILED_DATA_VAR: &str = "compiledData";

/// Configuration for a scrape run.
///
/// The marker variables double as the block-qualification substrings and
/// the assignment anchors. Organism override is a report-stage concern and
/// lives on [`Report`](crate::report::Report).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// Assignment target holding the epitope sentence payload.
    pub epitope_var: String,

    /// Assignment target holding the compiled allele/assay payload.
    pub compiled_var: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            epitope_var: EPITOPE_DATA_VAR.to_string(),
            compiled_var: COMPILED_DATA_VAR.to_string(),
        }
    }
}

impl ScrapeConfig {
    /// Create a config with default marker variables.
    pub fn new() -> Self {
        Self::default()
    }
}
