use crate::core::value_kind::ValueKind;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Operator shape requested for a column filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Between,
    Contains,
    NotContains,
    Like,
    NotLike,
    StartsWith,
    EndsWith,
    In,
    NotIn,
    IsNull,
    IsNotNull,
}

impl ComparisonMode {
    pub const ALL: [ComparisonMode; 17] = [
        ComparisonMode::Equal,
        ComparisonMode::NotEqual,
        ComparisonMode::Greater,
        ComparisonMode::GreaterEqual,
        ComparisonMode::Less,
        ComparisonMode::LessEqual,
        ComparisonMode::Between,
        ComparisonMode::Contains,
        ComparisonMode::NotContains,
        ComparisonMode::Like,
        ComparisonMode::NotLike,
        ComparisonMode::StartsWith,
        ComparisonMode::EndsWith,
        ComparisonMode::In,
        ComparisonMode::NotIn,
        ComparisonMode::IsNull,
        ComparisonMode::IsNotNull,
    ];

    pub fn is_valid_for(&self, kind: ValueKind, null_sensitive: bool) -> bool {
        kind.modes(null_sensitive).contains(self)
    }

    /// Null checks test the raw column and need no operand.
    pub fn is_null_check(&self) -> bool {
        matches!(self, ComparisonMode::IsNull | ComparisonMode::IsNotNull)
    }

    pub fn needs_second_operand(&self) -> bool {
        matches!(self, ComparisonMode::Between)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparisonMode::Equal => "equal",
            ComparisonMode::NotEqual => "not_equal",
            ComparisonMode::Greater => "greater",
            ComparisonMode::GreaterEqual => "greater_equal",
            ComparisonMode::Less => "less",
            ComparisonMode::LessEqual => "less_equal",
            ComparisonMode::Between => "between",
            ComparisonMode::Contains => "contains",
            ComparisonMode::NotContains => "not_contains",
            ComparisonMode::Like => "like",
            ComparisonMode::NotLike => "not_like",
            ComparisonMode::StartsWith => "starts_with",
            ComparisonMode::EndsWith => "ends_with",
            ComparisonMode::In => "in",
            ComparisonMode::NotIn => "not_in",
            ComparisonMode::IsNull => "is_null",
            ComparisonMode::IsNotNull => "is_not_null",
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        ComparisonMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| format!("Unknown comparison mode: {s}"))
    }
}
