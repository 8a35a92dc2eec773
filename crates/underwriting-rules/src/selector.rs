use underwriting_core::FinancialDocument;

/// Position of the first STANDALONE record in `financials`.
///
/// `None` covers a missing, non-array or empty `financials` as well as a
/// sequence without any standalone entry.
pub fn select_record(document: &FinancialDocument) -> Option<usize> {
    let selected = document.records().position(|record| record.is_standalone());
    tracing::debug!(record_index = ?selected, "Selected financial record");
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc(value: Value) -> FinancialDocument {
        FinancialDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_or_malformed_financials() {
        assert_eq!(select_record(&doc(json!({}))), None);
        assert_eq!(select_record(&doc(json!({"financials": []}))), None);
        assert_eq!(select_record(&doc(json!({"financials": null}))), None);
        assert_eq!(select_record(&doc(json!({"financials": "STANDALONE"}))), None);
        assert_eq!(
            select_record(&doc(json!({"financials": {"0": {"nature": "STANDALONE"}}}))),
            None
        );
    }

    #[test]
    fn test_first_standalone_wins() {
        let document = doc(json!({
            "financials": [
                {"nature": "CONSOLIDATED"},
                {"nature": "STANDALONE", "year": 2024},
                {"nature": "STANDALONE", "year": 2023}
            ]
        }));
        assert_eq!(select_record(&document), Some(1));
    }

    #[test]
    fn test_match_is_exact_and_case_sensitive() {
        let document = doc(json!({
            "financials": [
                {"nature": "standalone"},
                {"nature": "STANDALONE "},
                {"nature": ["STANDALONE"]},
                "STANDALONE",
                {}
            ]
        }));
        assert_eq!(select_record(&document), None);
    }
}
