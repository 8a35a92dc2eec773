use proptest::prelude::*;
use serde_json::{json, Value};
use underwriting_core::{FinancialDocument, FlagValue, Rule, ScoringModel};
use underwriting_rules::{
    financial_analysis, interest_service_coverage_ratio, select_record, total_borrowing_ratio,
    ProbeModel5lProfit,
};

fn non_standalone_nature() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!("CONSOLIDATED")),
        Just(json!("standalone")),
        Just(json!(null)),
        "[A-Z]{0,12}".prop_filter("not the standalone tag", |s| s != "STANDALONE").prop_map(Value::from),
    ]
}

fn record(nature: Value, revenue: u32, borrowing: u32) -> Value {
    json!({
        "nature": nature,
        "pnl": {"lineItems": {"net_revenue": revenue}},
        "bs": {"liabilities": {"long_term_borrowings": borrowing}}
    })
}

proptest! {
    #[test]
    fn without_standalone_everything_is_white(
        entries in prop::collection::vec((non_standalone_nature(), any::<u32>(), any::<u32>()), 0..8)
    ) {
        let financials: Vec<Value> = entries
            .into_iter()
            .map(|(nature, revenue, borrowing)| record(nature, revenue, borrowing))
            .collect();
        let document = FinancialDocument::from_value(json!({ "financials": financials })).unwrap();

        prop_assert_eq!(select_record(&document), None);
        let result = financial_analysis(&document);
        for rule in Rule::ALL {
            prop_assert_eq!(result.get(rule), Some(FlagValue::White));
        }
    }

    #[test]
    fn first_standalone_is_selected(
        prefix in prop::collection::vec(non_standalone_nature(), 0..6),
        standalone_count in 1usize..4,
    ) {
        let mut financials: Vec<Value> = prefix
            .iter()
            .cloned()
            .map(|nature| record(nature, 0, 0))
            .collect();
        for i in 0..standalone_count {
            financials.push(record(json!("STANDALONE"), 1_000 + i as u32, 0));
        }
        let document = FinancialDocument::from_value(json!({ "financials": financials })).unwrap();

        prop_assert_eq!(select_record(&document), Some(prefix.len()));
        let report = ProbeModel5lProfit::new().report(&document);
        prop_assert_eq!(report.metrics.map(|m| m.total_revenue), Some(1_000.0));
    }

    #[test]
    fn zero_revenue_never_faults(borrowing in any::<u32>()) {
        let document = FinancialDocument::from_value(json!({
            "financials": [record(json!("STANDALONE"), 0, borrowing)]
        }))
        .unwrap();

        prop_assert_eq!(total_borrowing_ratio(&document, 0), 0.0);
        prop_assert_eq!(
            financial_analysis(&document).get(Rule::BorrowingToRevenue),
            Some(FlagValue::Green)
        );
    }

    #[test]
    fn iscr_matches_smoothed_formula(pbit in 0u32..1_000_000_000, dep in 0u32..1_000_000, interest in 0u32..1_000_000_000) {
        let document = FinancialDocument::from_value(json!({
            "financials": [{
                "nature": "STANDALONE",
                "pnl": {"lineItems": {
                    "profit_before_interest_and_tax": pbit,
                    "depreciation": dep,
                    "interest": interest
                }}
            }]
        }))
        .unwrap();

        let expected = (f64::from(pbit) + f64::from(dep) + 1.0) / (f64::from(interest) + 1.0);
        prop_assert_eq!(interest_service_coverage_ratio(&document, 0), expected);
    }

    #[test]
    fn evaluation_is_deterministic(revenue in any::<u32>(), borrowing in any::<u32>()) {
        let document = FinancialDocument::from_value(json!({
            "financials": [record(json!("STANDALONE"), revenue, borrowing)]
        }))
        .unwrap();

        let model = ProbeModel5lProfit::new();
        prop_assert_eq!(model.evaluate(&document), model.evaluate(&document));
    }
}
