use chrono::Utc;
use underwriting_core::{
    FinancialDocument, FlagResult, FlagValue, MetricSnapshot, ModelReport, Rule, ScoringModel,
};

use crate::metrics;
use crate::selector::select_record;

/// 5 crore minimum scale.
pub const MIN_TOTAL_REVENUE: f64 = 50_000_000.0;
pub const MAX_BORROWING_TO_REVENUE: f64 = 0.25;
pub const MIN_ISCR: f64 = 2.0;

static PROBE_RULES: [Rule; 3] = Rule::ALL;

pub fn total_revenue_5cr_flag(total_revenue: f64) -> FlagValue {
    if total_revenue >= MIN_TOTAL_REVENUE {
        FlagValue::Green
    } else {
        FlagValue::Red
    }
}

/// Leverage never fails outright; above the cap it is only a caution.
pub fn borrowing_to_revenue_flag(borrowing_ratio: f64) -> FlagValue {
    if borrowing_ratio <= MAX_BORROWING_TO_REVENUE {
        FlagValue::Green
    } else {
        FlagValue::Amber
    }
}

pub fn iscr_flag(iscr: f64) -> FlagValue {
    if iscr >= MIN_ISCR {
        FlagValue::Green
    } else {
        FlagValue::Red
    }
}

/// Revenue scale, leverage and interest coverage on the standalone statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeModel5lProfit;

impl ProbeModel5lProfit {
    pub const NAME: &'static str = "probe_model_5l_profit";

    pub fn new() -> Self {
        Self
    }

    fn flags_for(metrics: &MetricSnapshot) -> FlagResult {
        FlagResult::from_flags([
            (Rule::TotalRevenue5Cr, total_revenue_5cr_flag(metrics.total_revenue)),
            (Rule::BorrowingToRevenue, borrowing_to_revenue_flag(metrics.borrowing_ratio)),
            (Rule::Iscr, iscr_flag(metrics.iscr)),
        ])
    }

    fn score(&self, document: &FinancialDocument) -> (Option<usize>, Option<MetricSnapshot>, FlagResult) {
        let Some(index) = select_record(document) else {
            tracing::info!(model = Self::NAME, "No standalone financials, all flags unavailable");
            return (None, None, FlagResult::unavailable(&PROBE_RULES));
        };

        let snapshot = metrics::snapshot(document, index);
        let result = Self::flags_for(&snapshot);
        for (rule, flag) in result.iter() {
            tracing::debug!(rule = rule.key(), flag = flag.label(), code = flag.code(), "Rule flagged");
        }
        tracing::info!(
            model = Self::NAME,
            record_index = index,
            "Evaluated underwriting flags"
        );
        (Some(index), Some(snapshot), result)
    }
}

impl ScoringModel for ProbeModel5lProfit {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn rules(&self) -> &'static [Rule] {
        &PROBE_RULES
    }

    fn evaluate(&self, document: &FinancialDocument) -> FlagResult {
        self.score(document).2
    }

    fn report(&self, document: &FinancialDocument) -> ModelReport {
        let (record_index, metrics, result) = self.score(document);
        ModelReport {
            model: Self::NAME.to_string(),
            evaluated_at: Utc::now(),
            record_index,
            metrics,
            result,
        }
    }
}
