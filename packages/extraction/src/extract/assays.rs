//! T-cell assay aggregation.
//!
//! Assay results live under `data[last].data` in the compiled payload, as
//! `{assay_type, positive_count, total_count}` mappings. Like the allele
//! walk, a missing nested path means "no assays", and malformed individual
//! records are skipped.

use serde_json::Value;
use tracing::debug;

use crate::types::{AssayPair, AssaySummary, OverallResponse};

use super::alleles::coerce_count;

/// Assay records under `payload.data[last].data`, or an empty slice when
/// the nested path is absent or not a list.
pub fn assay_records(payload: &Value) -> &[Value] {
    payload
        .get("data")
        .and_then(Value::as_array)
        .and_then(|outer| outer.last())
        .and_then(|entry| entry.get("data"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Build `(assay type, "positive/total")` pairs in input order and derive
/// the overall response flag.
///
/// Overall response is `-` for an empty assay list, `1` if any assay has a
/// positive count above zero, `0` otherwise.
pub fn aggregate(records: &[Value]) -> AssaySummary {
    let mut assays = Vec::new();
    let mut any_positive = false;

    for record in records {
        let assay_type = record.get("assay_type").and_then(Value::as_str);
        let positive = record.get("positive_count").and_then(coerce_count);
        let total = record.get("total_count").and_then(coerce_count);

        match (assay_type, positive, total) {
            (Some(assay_type), Some(positive), Some(total)) => {
                any_positive |= positive > 0;
                assays.push(AssayPair {
                    assay_type: assay_type.to_string(),
                    ratio: format!("{positive}/{total}"),
                });
            }
            _ => {
                debug!(record = %record, "skipping malformed assay record");
            }
        }
    }

    let overall = if assays.is_empty() {
        OverallResponse::NoAssays
    } else if any_positive {
        OverallResponse::Positive
    } else {
        OverallResponse::Negative
    };

    AssaySummary { assays, overall }
}
