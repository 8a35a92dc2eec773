//! Read-only views over a parsed financial statement.
//!
//! Documents stay as loose JSON: the shape is only checked where a field is
//! read, and anything absent or unusable reads as zero.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::UnderwritingError;

/// `nature` tag of the unconsolidated statement.
pub const STANDALONE_NATURE: &str = "STANDALONE";

/// Root of a financial statement: an object whose `financials` key holds the records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct FinancialDocument {
    root: Map<String, Value>,
}

impl FinancialDocument {
    /// Wrap a parsed JSON value. Anything but an object is a caller bug.
    pub fn from_value(value: Value) -> Result<Self, UnderwritingError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(UnderwritingError::NotADocument(json_kind(&other).to_string())),
        }
    }

    /// Parse raw JSON bytes into a document.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, UnderwritingError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(value)
    }

    /// The `financials` sequence, or `None` if it is missing or not an array.
    pub fn financials(&self) -> Option<&[Value]> {
        self.root
            .get("financials")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    pub fn record(&self, index: usize) -> Option<FinancialRecord<'_>> {
        self.financials()?.get(index).map(FinancialRecord::new)
    }

    pub fn records(&self) -> impl Iterator<Item = FinancialRecord<'_>> {
        self.financials().unwrap_or_default().iter().map(FinancialRecord::new)
    }
}

impl TryFrom<Value> for FinancialDocument {
    type Error = UnderwritingError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl std::str::FromStr for FinancialDocument {
    type Err = UnderwritingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl From<FinancialDocument> for Value {
    fn from(document: FinancialDocument) -> Self {
        Value::Object(document.root)
    }
}

/// One entry of `financials`.
#[derive(Debug, Clone, Copy)]
pub struct FinancialRecord<'a> {
    raw: &'a Value,
}

impl<'a> FinancialRecord<'a> {
    pub fn new(raw: &'a Value) -> Self {
        Self { raw }
    }

    pub fn nature(&self) -> Option<&'a str> {
        self.raw.get("nature").and_then(Value::as_str)
    }

    pub fn is_standalone(&self) -> bool {
        self.nature() == Some(STANDALONE_NATURE)
    }

    /// `pnl.lineItems.<name>`, zero when absent.
    pub fn line_item(&self, name: &str) -> f64 {
        self.number_at(&["pnl", "lineItems", name])
    }

    /// `bs.liabilities.<name>`, zero when absent.
    pub fn liability(&self, name: &str) -> f64 {
        self.number_at(&["bs", "liabilities", name])
    }

    fn number_at(&self, path: &[&str]) -> f64 {
        let mut current = self.raw;
        for key in path {
            match current.get(*key) {
                Some(next) => current = next,
                None => return 0.0,
            }
        }

        match current {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::Null => 0.0,
            other => {
                tracing::warn!(
                    field = %path.join("."),
                    kind = json_kind(other),
                    "Non-numeric financial field, reading as 0"
                );
                0.0
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
