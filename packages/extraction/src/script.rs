//! Script locator: finds the inline script blocks that embed epitope data.
//!
//! IEDB reference pages ship their tables as JavaScript variable
//! assignments inside `<script type="text/javascript">` tags. This module
//! enumerates those blocks and filters to the ones carrying both marker
//! variables; everything downstream works on plain script text.

use scraper::{Html, Selector};

/// Inline script blocks that contain both `epitope_var` and `compiled_var`,
/// in document order.
///
/// Parsing happens eagerly and the DOM is dropped before returning, so the
/// result is plain owned text (`scraper::Html` is not `Send` and must not
/// be held across await points by callers).
pub fn data_blocks(markup: &str, epitope_var: &str, compiled_var: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    // Static selector; parse failure is impossible.
    let selector =
        Selector::parse(r#"script[type="text/javascript"]"#).expect("valid script selector");

    document
        .select(&selector)
        .map(|el| el.text().collect::<String>())
        .filter(|text| text.contains(epitope_var) && text.contains(compiled_var))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::{COMPILED_DATA_VAR, EPITOPE_DATA_VAR};

    fn page(scripts: &[&str]) -> String {
        let body = scripts
            .iter()
            .map(|s| format!(r#"<script type="text/javascript">{s}</script>"#))
            .collect::<Vec<_>>()
            .join("\n");
        format!("<html><head></head><body>{body}</body></html>")
    }

    #[test]
    fn test_block_with_both_markers_is_found() {
        let markup = page(&[
            "var unrelated = 1;",
            "var refernceEpitopeData = {'data': {}}; var compiledData = {'data': []};",
        ]);
        let blocks = data_blocks(&markup, EPITOPE_DATA_VAR, COMPILED_DATA_VAR);
        assert_eq!(blocks.len(), 1);
        assert!(blocks[0].contains("compiledData"));
    }

    #[test]
    fn test_block_with_one_marker_is_filtered_out() {
        let markup = page(&["var compiledData = {'data': []};"]);
        assert!(data_blocks(&markup, EPITOPE_DATA_VAR, COMPILED_DATA_VAR).is_empty());
    }

    #[test]
    fn test_non_javascript_scripts_are_ignored() {
        let markup = r#"<html><body>
            <script type="application/json">{"refernceEpitopeData": 1, "compiledData": 2}</script>
        </body></html>"#;
        assert!(data_blocks(markup, EPITOPE_DATA_VAR, COMPILED_DATA_VAR).is_empty());
    }

    #[test]
    fn test_blocks_preserve_document_order() {
        let markup = page(&[
            "var refernceEpitopeData = {}; var compiledData = {}; // first",
            "var refernceEpitopeData = {}; var compiledData = {}; // second",
        ]);
        let blocks = data_blocks(&markup, EPITOPE_DATA_VAR, COMPILED_DATA_VAR);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("first"));
        assert!(blocks[1].contains("second"));
    }
}
