use crate::{FinancialDocument, FlagResult, ModelReport, Rule};

/// A named set of underwriting rules evaluated against one financial document.
///
/// Implementations are pure: the same document always yields the same flags,
/// and a single instance may be shared across threads without locking.
pub trait ScoringModel: Send + Sync {
    /// Registry key for this model.
    fn name(&self) -> &'static str;

    /// Rules this model reports, in output order.
    fn rules(&self) -> &'static [Rule];

    /// Score the document, one flag per rule.
    fn evaluate(&self, document: &FinancialDocument) -> FlagResult;

    /// Score the document and keep the intermediate metrics alongside the flags.
    fn report(&self, document: &FinancialDocument) -> ModelReport;
}
