//! Record types produced by the extraction chain.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fixed report column names.
///
/// Assay-type columns are dynamic; these are reserved and always win on a
/// name collision with an assay type.
pub mod columns {
    pub const ORGANISM: &str = "Organism";
    pub const ANTIGEN: &str = "Antigen";
    pub const EPITOPE: &str = "Epitope";
    pub const POSITIVE_ALLELES: &str = "Positive MHC alleles";
    pub const NEGATIVE_ALLELES: &str = "Negative MHC alleles";
    pub const TOTAL_RESPONSE: &str = "Total response T cell assay(s)";
    pub const SOURCE: &str = "Source";

    /// The fixed leading columns, in report order (Source is appended last
    /// by the report builder).
    pub const FIXED: [&str; 6] = [
        ORGANISM,
        ANTIGEN,
        EPITOPE,
        POSITIVE_ALLELES,
        NEGATIVE_ALLELES,
        TOTAL_RESPONSE,
    ];
}

/// Placeholder for empty and missing cells.
pub const EMPTY_CELL: &str = "-";

/// Organism, antigen and epitope name parsed out of the reference epitope
/// sentence.
///
/// Produced atomically: either all three fields matched, or no descriptor
/// exists at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpitopeDescriptor {
    pub organism: String,
    pub antigen: String,
    pub epitope: String,
}

/// MHC molecules bucketed by reactivity.
///
/// The two buckets are disjoint and each preserves input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlleleBuckets {
    /// Molecules with a positive response count above zero.
    pub positives: Vec<String>,
    /// Molecules whose positive response count is zero.
    pub negatives: Vec<String>,
}

impl AlleleBuckets {
    /// Render a bucket as a display cell: comma-joined, or `-` when empty.
    pub fn display(bucket: &[String]) -> String {
        if bucket.is_empty() {
            EMPTY_CELL.to_string()
        } else {
            bucket.join(",")
        }
    }
}

/// One T-cell assay rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssayPair {
    /// Assay type, used as a report column name.
    pub assay_type: String,
    /// `positive/total` counts.
    pub ratio: String,
}

/// All assays for a page plus the derived overall response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssaySummary {
    /// Assays in input order.
    pub assays: Vec<AssayPair>,
    /// Derived overall response flag.
    pub overall: OverallResponse,
}

/// Overall T-cell response derived from the assay list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverallResponse {
    /// No assays were reported; rendered as `-`.
    #[default]
    NoAssays,
    /// Every assay had zero positives; rendered as `0`.
    Negative,
    /// At least one assay had a positive count above zero; rendered as `1`.
    Positive,
}

impl fmt::Display for OverallResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OverallResponse::NoAssays => EMPTY_CELL,
            OverallResponse::Negative => "0",
            OverallResponse::Positive => "1",
        };
        f.write_str(s)
    }
}

/// One assembled report row: ordered field name → cell value.
///
/// Insertion order is the column-order contract, so this wraps an
/// [`IndexMap`]. Never mutated after the pipeline appends it to a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageRecord(IndexMap<String, String>);

impl PageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, keeping the original position if the name already
    /// exists (same semantics the report relies on for Source).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
