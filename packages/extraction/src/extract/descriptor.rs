//! Splits the reference epitope sentence into organism, antigen and
//! epitope name.
//!
//! The sentence has the shape:
//!
//! ```text
//! FLPSDYFPSV + HLA(A*02:01) was studied as part of Spike glycoprotein from SARS-CoV-2.
//! ```
//!
//! The split is an ordered rule set, one named capture group per field,
//! applied to the same sentence. All rules must match or the whole call
//! fails; a partial descriptor is never produced.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ExtractError, ExtractResult};
use crate::types::EpitopeDescriptor;

/// One field rule: a name and the pattern whose capture group carries it.
struct Rule {
    group: &'static str,
    pattern: Regex,
}

/// Rules in descriptor field order: epitope, antigen, organism.
static RULES: LazyLock<[Rule; 3]> = LazyLock::new(|| {
    [
        // Leading uppercase residue sequence, optionally with a `+`-joined
        // MHC modifier in parentheses, ending before the first space.
        Rule {
            group: "epitope",
            pattern: Regex::new(r"^(?P<epitope>[A-Z]+(?: \+ [A-Z]+\([A-Z0-9*:]+\))?)\s")
                .expect("valid epitope rule"),
        },
        // Between "studied as part of" and the following "from".
        Rule {
            group: "antigen",
            pattern: Regex::new(r".*studied as part of (?P<antigen>.*?) from ")
                .expect("valid antigen rule"),
        },
        // After the last "from", up to the first period or end of sentence.
        Rule {
            group: "organism",
            pattern: Regex::new(r".*from (?P<organism>.*?)(?:\.|$)").expect("valid organism rule"),
        },
    ]
});

/// Parse `sentence` into a complete descriptor, or fail with
/// [`ExtractError::DescriptorIncomplete`] if any rule misses.
pub fn split(sentence: &str) -> ExtractResult<EpitopeDescriptor> {
    let mut fields = RULES.iter().map(|rule| {
        rule.pattern
            .captures(sentence)
            .and_then(|caps| caps.name(rule.group))
            .map(|m| m.as_str().to_string())
    });

    // Rule order matches the struct fields below.
    match (fields.next(), fields.next(), fields.next()) {
        (Some(Some(epitope)), Some(Some(antigen)), Some(Some(organism))) => {
            Ok(EpitopeDescriptor {
                organism,
                antigen,
                epitope,
            })
        }
        _ => Err(ExtractError::DescriptorIncomplete {
            sentence: sentence.to_string(),
        }),
    }
}
