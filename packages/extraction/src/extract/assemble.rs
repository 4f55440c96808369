//! Assembles one ordered page record from the extracted pieces.

use crate::types::{columns, AlleleBuckets, AssaySummary, EpitopeDescriptor, PageRecord};

/// Merge descriptor, allele buckets and assay summary into one record,
/// with the originating link appended as the final Source field.
///
/// Assay-type columns are added only when they do not collide with a fixed
/// column name; on a collision the fixed column wins and the assay entry
/// is dropped. Duplicate assay types keep the last value at the first
/// position, matching ordered-map insertion.
pub fn assemble(
    descriptor: &EpitopeDescriptor,
    buckets: &AlleleBuckets,
    summary: &AssaySummary,
    link: &str,
) -> PageRecord {
    let mut record = PageRecord::new();

    record.insert(columns::ORGANISM, descriptor.organism.as_str());
    record.insert(columns::ANTIGEN, descriptor.antigen.as_str());
    record.insert(columns::EPITOPE, descriptor.epitope.as_str());
    record.insert(
        columns::POSITIVE_ALLELES,
        AlleleBuckets::display(&buckets.positives),
    );
    record.insert(
        columns::NEGATIVE_ALLELES,
        AlleleBuckets::display(&buckets.negatives),
    );
    record.insert(columns::TOTAL_RESPONSE, summary.overall.to_string());

    for assay in &summary.assays {
        if columns::FIXED.contains(&assay.assay_type.as_str()) {
            continue;
        }
        record.insert(assay.assay_type.as_str(), assay.ratio.as_str());
    }

    record.insert(columns::SOURCE, link);
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AssayPair, OverallResponse};

    fn descriptor() -> EpitopeDescriptor {
        EpitopeDescriptor {
            organism: "SARS-CoV-2".to_string(),
            antigen: "Spike glycoprotein".to_string(),
            epitope: "FLPSDYFPSV".to_string(),
        }
    }

    fn pair(assay_type: &str, ratio: &str) -> AssayPair {
        AssayPair {
            assay_type: assay_type.to_string(),
            ratio: ratio.to_string(),
        }
    }

    #[test]
    fn test_field_order_and_values() {
        let buckets = AlleleBuckets {
            positives: vec!["HLA-A*02:01".to_string()],
            negatives: vec![],
        };
        let summary = AssaySummary {
            assays: vec![pair("ELISPOT", "4/10")],
            overall: OverallResponse::Positive,
        };

        let record = assemble(&descriptor(), &buckets, &summary, "https://iedb.org/epitope/1");

        let names: Vec<_> = record.field_names().collect();
        assert_eq!(
            names,
            vec![
                "Organism",
                "Antigen",
                "Epitope",
                "Positive MHC alleles",
                "Negative MHC alleles",
                "Total response T cell assay(s)",
                "ELISPOT",
                "Source",
            ]
        );
        assert_eq!(record.get("Positive MHC alleles"), Some("HLA-A*02:01"));
        assert_eq!(record.get("Negative MHC alleles"), Some("-"));
        assert_eq!(record.get("Total response T cell assay(s)"), Some("1"));
    }

    #[test]
    fn test_assay_colliding_with_fixed_column_is_dropped() {
        let summary = AssaySummary {
            assays: vec![pair("Organism", "9/9"), pair("ELISPOT", "1/2")],
            overall: OverallResponse::Positive,
        };

        let record = assemble(&descriptor(), &AlleleBuckets::default(), &summary, "url");

        assert_eq!(record.get("Organism"), Some("SARS-CoV-2"));
        assert_eq!(record.get("ELISPOT"), Some("1/2"));
    }

    #[test]
    fn test_duplicate_assay_type_keeps_last_value() {
        let summary = AssaySummary {
            assays: vec![pair("ELISPOT", "1/2"), pair("ELISPOT", "3/4")],
            overall: OverallResponse::Positive,
        };

        let record = assemble(&descriptor(), &AlleleBuckets::default(), &summary, "url");
        assert_eq!(record.get("ELISPOT"), Some("3/4"));
    }

    #[test]
    fn test_source_is_last_even_when_an_assay_is_named_source() {
        let summary = AssaySummary {
            assays: vec![pair("Source", "1/1")],
            overall: OverallResponse::Positive,
        };

        let record = assemble(&descriptor(), &AlleleBuckets::default(), &summary, "the-link");
        // The fixed Source value wins over the assay entry.
        assert_eq!(record.get("Source"), Some("the-link"));
    }
}
