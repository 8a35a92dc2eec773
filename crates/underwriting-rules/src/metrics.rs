//! Raw financial metrics for a selected record.
//!
//! Every function reads zero for an out-of-range index or a missing field, so
//! they can be called with any index without checking it first.

use underwriting_core::{FinancialDocument, MetricSnapshot};

pub const NET_REVENUE: &str = "net_revenue";
pub const PROFIT_BEFORE_INTEREST_AND_TAX: &str = "profit_before_interest_and_tax";
pub const DEPRECIATION: &str = "depreciation";
pub const INTEREST: &str = "interest";
pub const LONG_TERM_BORROWINGS: &str = "long_term_borrowings";
pub const SHORT_TERM_BORROWINGS: &str = "short_term_borrowings";

/// `pnl.lineItems.net_revenue` of the record.
pub fn total_revenue(document: &FinancialDocument, index: usize) -> f64 {
    document
        .record(index)
        .map_or(0.0, |record| record.line_item(NET_REVENUE))
}

/// Long plus short term borrowings over net revenue.
///
/// Zero revenue yields 0 rather than a division.
pub fn total_borrowing_ratio(document: &FinancialDocument, index: usize) -> f64 {
    let Some(record) = document.record(index) else {
        return 0.0;
    };

    let total_borrowing =
        record.liability(LONG_TERM_BORROWINGS) + record.liability(SHORT_TERM_BORROWINGS);
    let revenue = total_revenue(document, index);
    if revenue == 0.0 {
        return 0.0;
    }

    total_borrowing / revenue
}

/// Interest service coverage ratio: `(PBIT + depreciation + 1) / (interest + 1)`.
///
/// The `+ 1` on both sides keeps the ratio defined at zero interest and must
/// stay exactly as written.
pub fn interest_service_coverage_ratio(document: &FinancialDocument, index: usize) -> f64 {
    let Some(record) = document.record(index) else {
        return 0.0;
    };

    let profit_before_interest = record.line_item(PROFIT_BEFORE_INTEREST_AND_TAX);
    let depreciation = record.line_item(DEPRECIATION);
    let interest = record.line_item(INTEREST);

    (profit_before_interest + depreciation + 1.0) / (interest + 1.0)
}

/// All three metrics for one record.
pub fn snapshot(document: &FinancialDocument, index: usize) -> MetricSnapshot {
    let metrics = MetricSnapshot {
        total_revenue: total_revenue(document, index),
        borrowing_ratio: total_borrowing_ratio(document, index),
        iscr: interest_service_coverage_ratio(document, index),
    };
    tracing::debug!(
        record_index = index,
        total_revenue = metrics.total_revenue,
        borrowing_ratio = metrics.borrowing_ratio,
        iscr = metrics.iscr,
        "Extracted metrics"
    );
    metrics
}
