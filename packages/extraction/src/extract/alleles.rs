//! MHC allele classification.
//!
//! The compiled payload keeps allele reactivity under `data[0].data` as a
//! list of `{mhc_molecule, positive_count}` mappings. A missing or
//! misshapen path is "no data", not an error; individual malformed records
//! are skipped without failing the batch.

use serde_json::Value;
use tracing::debug;

use crate::types::AlleleBuckets;

/// Allele records under `payload.data[0].data`, or an empty slice when the
/// nested path is absent or not a list.
pub fn allele_records(payload: &Value) -> &[Value] {
    payload
        .get("data")
        .and_then(Value::as_array)
        .and_then(|outer| outer.first())
        .and_then(|entry| entry.get("data"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Bucket each well-formed record by the sign of its positive count.
///
/// Records missing either key, with a non-string molecule, or with a count
/// that does not coerce to an integer are skipped. Both buckets preserve
/// input order and are disjoint by construction.
pub fn classify(records: &[Value]) -> AlleleBuckets {
    let mut buckets = AlleleBuckets::default();

    for record in records {
        let molecule = record.get("mhc_molecule").and_then(Value::as_str);
        let count = record.get("positive_count").and_then(coerce_count);

        match (molecule, count) {
            (Some(molecule), Some(count)) => {
                if count > 0 {
                    buckets.positives.push(molecule.to_string());
                } else {
                    buckets.negatives.push(molecule.to_string());
                }
            }
            _ => {
                debug!(record = %record, "skipping malformed allele record");
            }
        }
    }

    buckets
}

/// Coerce a JSON number or numeric string to an integer count.
pub(crate) fn coerce_count(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_classification_by_count_sign() {
        let records = vec![
            json!({"mhc_molecule": "HLA-A*02:01", "positive_count": "3"}),
            json!({"mhc_molecule": "HLA-B*07:02", "positive_count": "0"}),
        ];
        let buckets = classify(&records);
        assert_eq!(buckets.positives, vec!["HLA-A*02:01"]);
        assert_eq!(buckets.negatives, vec!["HLA-B*07:02"]);
    }

    #[test]
    fn test_numeric_and_string_counts_both_coerce() {
        let records = vec![
            json!({"mhc_molecule": "A", "positive_count": 2}),
            json!({"mhc_molecule": "B", "positive_count": "1"}),
        ];
        let buckets = classify(&records);
        assert_eq!(buckets.positives, vec!["A", "B"]);
    }

    #[test]
    fn test_malformed_records_are_skipped_not_fatal() {
        let records = vec![
            json!({"mhc_molecule": "A", "positive_count": "not-a-number"}),
            json!({"positive_count": "3"}),
            json!({"mhc_molecule": "B"}),
            json!({"mhc_molecule": "C", "positive_count": "1"}),
        ];
        let buckets = classify(&records);
        assert_eq!(buckets.positives, vec!["C"]);
        assert!(buckets.negatives.is_empty());
    }

    #[test]
    fn test_absent_nested_path_yields_empty() {
        assert!(allele_records(&json!({})).is_empty());
        assert!(allele_records(&json!({"data": []})).is_empty());
        assert!(allele_records(&json!({"data": [{}]})).is_empty());
        assert!(allele_records(&json!({"data": [{"data": 7}]})).is_empty());
        assert!(allele_records(&json!({"data": "not-a-list"})).is_empty());
    }

    #[test]
    fn test_records_come_from_first_outer_entry() {
        let payload = json!({"data": [
            {"data": [{"mhc_molecule": "A", "positive_count": 1}]},
            {"data": [{"mhc_molecule": "ignored", "positive_count": 1}]},
        ]});
        let records = allele_records(&payload);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["mhc_molecule"], "A");
    }

    proptest! {
        /// Every well-formed record lands in exactly one bucket, matching
        /// the sign of its count, with input order preserved.
        #[test]
        fn prop_buckets_partition_input(counts in proptest::collection::vec(0i64..100, 0..20)) {
            let records: Vec<Value> = counts
                .iter()
                .enumerate()
                .map(|(i, c)| json!({"mhc_molecule": format!("M{i}"), "positive_count": *c}))
                .collect();

            let buckets = classify(&records);

            prop_assert_eq!(buckets.positives.len() + buckets.negatives.len(), counts.len());
            for (i, count) in counts.iter().enumerate() {
                let name = format!("M{i}");
                let in_pos = buckets.positives.contains(&name);
                let in_neg = buckets.negatives.contains(&name);
                prop_assert!(in_pos != in_neg);
                prop_assert_eq!(in_pos, *count > 0);
            }
        }
    }
}
