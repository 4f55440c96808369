//! The extraction chain: script text in, assembled page record out.
//!
//! Each submodule is one stage. [`extract_record`] wires them together for
//! a single qualifying script block; any stage failure fails the whole
//! block (the pipeline decides what that means for the page).

pub mod alleles;
pub mod assays;
pub mod assemble;
pub mod descriptor;
pub mod pattern;
pub mod payload;

use crate::error::{ExtractError, ExtractResult};
use crate::types::{PageRecord, ScrapeConfig};

/// Key under `data` that holds the reference epitope sentence.
const EPITOPE_STRING_PATH: &str = "data.referenceEpitopeString";

/// Run the full extraction chain against one script block.
///
/// Stages: locate both assignments, leniently decode their payloads, split
/// the epitope sentence, classify alleles, aggregate assays, assemble the
/// record. Returns the first error any stage raises.
pub fn extract_record(
    script: &str,
    link: &str,
    config: &ScrapeConfig,
) -> ExtractResult<PageRecord> {
    // Epitope sentence payload.
    let epitope_value = pattern::assignment_value(script, &config.epitope_var)?;
    let epitope_payload = payload::decode(epitope_value, &config.epitope_var)?;
    let sentence = epitope_payload
        .get("data")
        .and_then(|d| d.get("referenceEpitopeString"))
        .and_then(|s| s.as_str())
        .ok_or(ExtractError::MissingField {
            path: EPITOPE_STRING_PATH,
        })?;
    let descriptor = descriptor::split(sentence)?;

    // Compiled allele/assay payload.
    let compiled_value = pattern::assignment_value(script, &config.compiled_var)?;
    let compiled = payload::decode(compiled_value, &config.compiled_var)?;

    let buckets = alleles::classify(&alleles::allele_records(&compiled));
    let summary = assays::aggregate(&assays::assay_records(&compiled));

    Ok(assemble::assemble(&descriptor, &buckets, &summary, link))
}
