use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UnderwritingError;

/// Risk flag attached to one evaluated rule.
///
/// The integer codes are part of the output contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum FlagValue {
    Red = 0,
    Green = 1,
    Amber = 2,
    /// Display only; no rule produces it.
    MediumRisk = 3,
    /// The data needed to assess the rule is missing.
    White = 4,
}

impl FlagValue {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(FlagValue::Red),
            1 => Some(FlagValue::Green),
            2 => Some(FlagValue::Amber),
            3 => Some(FlagValue::MediumRisk),
            4 => Some(FlagValue::White),
            _ => None,
        }
    }

    /// Human-readable label for the flag
    pub fn label(self) -> &'static str {
        match self {
            FlagValue::Red => "Red",
            FlagValue::Green => "Green",
            FlagValue::Amber => "Amber",
            FlagValue::MediumRisk => "Medium Risk",
            FlagValue::White => "White",
        }
    }
}

impl From<FlagValue> for u8 {
    fn from(flag: FlagValue) -> Self {
        flag.code()
    }
}

impl TryFrom<u8> for FlagValue {
    type Error = UnderwritingError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        FlagValue::from_code(code).ok_or(UnderwritingError::UnknownFlag(code))
    }
}

/// Underwriting rule identifiers. Declaration order is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rule {
    #[serde(rename = "TOTAL_REVENUE_5CR_FLAG")]
    TotalRevenue5Cr,
    #[serde(rename = "BORROWING_TO_REVENUE_FLAG")]
    BorrowingToRevenue,
    #[serde(rename = "ISCR_FLAG")]
    Iscr,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::TotalRevenue5Cr, Rule::BorrowingToRevenue, Rule::Iscr];

    pub fn key(self) -> &'static str {
        match self {
            Rule::TotalRevenue5Cr => "TOTAL_REVENUE_5CR_FLAG",
            Rule::BorrowingToRevenue => "BORROWING_TO_REVENUE_FLAG",
            Rule::Iscr => "ISCR_FLAG",
        }
    }
}

/// Per-rule flags for one evaluation.
///
/// Serializes as `{"flags": {"TOTAL_REVENUE_5CR_FLAG": 1, ...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlagResult {
    pub flags: BTreeMap<Rule, FlagValue>,
}

impl FlagResult {
    pub fn from_flags(flags: impl IntoIterator<Item = (Rule, FlagValue)>) -> Self {
        Self {
            flags: flags.into_iter().collect(),
        }
    }

    /// Every listed rule flagged WHITE.
    pub fn unavailable(rules: &[Rule]) -> Self {
        Self::from_flags(rules.iter().map(|rule| (*rule, FlagValue::White)))
    }

    pub fn get(&self, rule: Rule) -> Option<FlagValue> {
        self.flags.get(&rule).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rule, FlagValue)> + '_ {
        self.flags.iter().map(|(rule, flag)| (*rule, *flag))
    }

    /// True when no rule could be assessed.
    pub fn is_unavailable(&self) -> bool {
        !self.flags.is_empty() && self.flags.values().all(|f| *f == FlagValue::White)
    }
}

/// Raw metrics behind the flags of a scored record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricSnapshot {
    pub total_revenue: f64,
    pub borrowing_ratio: f64,
    pub iscr: f64,
}

/// Flags plus the context they were derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReport {
    pub model: String,
    pub evaluated_at: DateTime<Utc>,
    /// Position of the scored record in `financials`, if any was usable.
    pub record_index: Option<usize>,
    pub metrics: Option<MetricSnapshot>,
    #[serde(flatten)]
    pub result: FlagResult,
}
