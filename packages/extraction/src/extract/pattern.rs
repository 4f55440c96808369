//! Anchored extraction of embedded variable assignments.

use regex::Regex;

use crate::error::{ExtractError, ExtractResult};

/// Return the value text of `var <anchor> = <value>;` inside `script`.
///
/// The match is non-greedy and stops at the first `};`, so the value text
/// always ends with a closing brace. Dot does not match newlines: the IEDB
/// pages emit each assignment on a single line and a multi-line match
/// would risk swallowing a neighboring assignment. Can be called
/// repeatedly against the same block for different anchors.
pub fn assignment_value<'a>(script: &'a str, anchor: &str) -> ExtractResult<&'a str> {
    let pattern = format!(r"var {} = (.*?\}});", regex::escape(anchor));
    // The anchor is escaped, so the pattern is always valid.
    let re = Regex::new(&pattern).expect("valid assignment pattern");

    re.captures(script)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ExtractError::NoMatch {
            anchor: anchor.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_value_up_to_terminator() {
        let script = "var compiledData = {'data': [1, 2]}; var other = 5;";
        let value = assignment_value(script, "compiledData").unwrap();
        assert_eq!(value, "{'data': [1, 2]}");
    }

    #[test]
    fn test_non_greedy_stops_at_first_terminator() {
        let script = "var a = {'x': 1}; var a = {'y': 2};";
        assert_eq!(assignment_value(script, "a").unwrap(), "{'x': 1}");
    }

    #[test]
    fn test_two_anchors_in_one_block() {
        let script = "var refernceEpitopeData = {'data': {}};\nvar compiledData = {'data': []};";
        assert_eq!(
            assignment_value(script, "refernceEpitopeData").unwrap(),
            "{'data': {}}"
        );
        assert_eq!(
            assignment_value(script, "compiledData").unwrap(),
            "{'data': []}"
        );
    }

    #[test]
    fn test_absent_anchor_is_no_match() {
        let err = assignment_value("var other = {};", "compiledData").unwrap_err();
        assert!(matches!(err, ExtractError::NoMatch { ref anchor } if anchor == "compiledData"));
    }

    #[test]
    fn test_anchor_with_regex_metacharacters_is_escaped() {
        // No real page has one, but the anchor must never be interpreted
        // as a pattern.
        let err = assignment_value("var data = {};", "data.*").unwrap_err();
        assert!(matches!(err, ExtractError::NoMatch { .. }));
    }
}
