pub mod metrics;
pub mod probe;
pub mod registry;
pub mod selector;

use serde_json::Value;
use underwriting_core::{FinancialDocument, FlagResult, Result, ScoringModel, UnderwritingError};

pub use metrics::{interest_service_coverage_ratio, snapshot, total_borrowing_ratio, total_revenue};
pub use probe::{
    borrowing_to_revenue_flag, iscr_flag, total_revenue_5cr_flag, ProbeModel5lProfit,
};
pub use registry::ModelRegistry;
pub use selector::select_record;

pub const DEFAULT_MODEL: &str = ProbeModel5lProfit::NAME;

/// Score a financial document with the default model.
pub fn financial_analysis(document: &FinancialDocument) -> FlagResult {
    ProbeModel5lProfit::new().evaluate(document)
}

/// Pull the financial document out of an upload of the form
/// `{"data": {"financials": [...]}}`.
///
/// The `data.financials` path must be present; its contents are not checked
/// here and a malformed sequence simply scores as unavailable.
///
/// `data` must be an object holding a `financials` key: a list or string
/// `data` that merely contains the text `"financials"` is rejected, not
/// accepted by a membership test. The returned document is the `data` object
/// itself, so records are read from `data.financials`; scoring the whole
/// upload would look for `financials` at the top level and always come back
/// all WHITE.
pub fn upload_document(upload: &Value) -> Result<FinancialDocument> {
    let data = upload
        .get("data")
        .ok_or_else(|| UnderwritingError::InvalidStructure("missing `data`".to_string()))?;

    match data {
        Value::Object(map) if map.contains_key("financials") => {
            FinancialDocument::from_value(data.clone())
        }
        Value::Object(_) => Err(UnderwritingError::InvalidStructure(
            "missing `data.financials`".to_string(),
        )),
        _ => Err(UnderwritingError::InvalidStructure(
            "`data` is not an object".to_string(),
        )),
    }
}

/// Validate an upload and score its `data` object with the default model.
pub fn analyze_upload(upload: &Value) -> Result<FlagResult> {
    let document = upload_document(upload)?;
    Ok(financial_analysis(&document))
}
