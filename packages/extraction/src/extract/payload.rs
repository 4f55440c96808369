//! Lenient decoding of the pseudo-JSON embedded in script blocks.
//!
//! The IEDB pages delimit strings with single quotes, which strict JSON
//! rejects. Quotes are normalized by blind replacement before decoding.
//! Known fragility, kept on purpose: an apostrophe inside a string value
//! (e.g. `O'Brien`) corrupts the payload and the decode fails with
//! [`ExtractError::MalformedPayload`]. The upstream pages do not currently
//! produce such values, and a tolerant parser would change which inputs
//! are accepted.

use serde_json::Value;

use crate::error::{ExtractError, ExtractResult};

/// Normalize quoting and decode `value` into a generic JSON structure.
///
/// `anchor` only labels the error.
pub fn decode(value: &str, anchor: &str) -> ExtractResult<Value> {
    let normalized = value.replace('\'', "\"");
    serde_json::from_str(&normalized).map_err(|source| ExtractError::MalformedPayload {
        anchor: anchor.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_single_quoted_payload_decodes() {
        let decoded = decode("{'data': [{'positive_count': '3'}]}", "compiledData").unwrap();
        assert_eq!(decoded, json!({"data": [{"positive_count": "3"}]}));
    }

    #[test]
    fn test_already_strict_json_decodes() {
        let decoded = decode(r#"{"data": {"a": 1}}"#, "compiledData").unwrap();
        assert_eq!(decoded, json!({"data": {"a": 1}}));
    }

    #[test]
    fn test_malformed_payload_is_typed_failure() {
        let err = decode("{'data': [", "compiledData").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedPayload { ref anchor, .. } if anchor == "compiledData"));
    }

    #[test]
    fn test_apostrophe_in_value_corrupts_the_payload() {
        // Documented fragility of blind quote replacement.
        let err = decode("{'name': 'O'Brien'}", "refernceEpitopeData").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedPayload { .. }));
    }

    #[test]
    fn test_round_trip_of_quote_safe_payload() {
        let original = json!({"data": {"nested": [1, 2, {"k": "v"}]}});
        let serialized = serde_json::to_string(&original).unwrap();
        let decoded = decode(&serialized, "compiledData").unwrap();
        assert_eq!(decoded, original);
    }
}
