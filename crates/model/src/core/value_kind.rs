use crate::core::comparison::ComparisonMode;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Declared type of a filterable column's values.
///
/// The kind decides how operands are quoted inside literal lists, whether
/// text comparisons are case-folded and which default `coalesce` falls
/// back to when nulls are not significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Boolean,
    Date,
    Number,
    Text,
    NumberList,
    TextList,
}

const SCALAR_ORDERED: &[ComparisonMode] = &[
    ComparisonMode::Equal,
    ComparisonMode::NotEqual,
    ComparisonMode::Greater,
    ComparisonMode::GreaterEqual,
    ComparisonMode::Less,
    ComparisonMode::LessEqual,
    ComparisonMode::Between,
];

const TEXT: &[ComparisonMode] = &[
    ComparisonMode::Equal,
    ComparisonMode::NotEqual,
    ComparisonMode::Contains,
    ComparisonMode::NotContains,
    ComparisonMode::Like,
    ComparisonMode::NotLike,
    ComparisonMode::StartsWith,
    ComparisonMode::EndsWith,
];

const LIST: &[ComparisonMode] = &[ComparisonMode::In, ComparisonMode::NotIn];

const NULL_CHECKS: &[ComparisonMode] = &[ComparisonMode::IsNull, ComparisonMode::IsNotNull];

impl ValueKind {
    pub const ALL: [ValueKind; 6] = [
        ValueKind::Boolean,
        ValueKind::Date,
        ValueKind::Number,
        ValueKind::Text,
        ValueKind::NumberList,
        ValueKind::TextList,
    ];

    /// Quote wrapped around each element of a rendered `in (...)` list.
    pub fn string_delimiter(&self) -> &'static str {
        match self {
            ValueKind::Date | ValueKind::Text | ValueKind::TextList => "'",
            ValueKind::Boolean | ValueKind::Number | ValueKind::NumberList => "",
        }
    }

    pub fn is_textual(&self) -> bool {
        matches!(self, ValueKind::Text | ValueKind::TextList)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ValueKind::NumberList | ValueKind::TextList)
    }

    /// Kind of the elements held by a list kind; scalar kinds map to themselves.
    pub fn element_kind(&self) -> ValueKind {
        match self {
            ValueKind::NumberList => ValueKind::Number,
            ValueKind::TextList => ValueKind::Text,
            other => *other,
        }
    }

    /// SQL literal substituted for NULL when nulls are not significant.
    pub fn null_default(&self) -> &'static str {
        match self {
            ValueKind::Boolean | ValueKind::Number | ValueKind::NumberList => "0",
            ValueKind::Date => "'1900-01-01'",
            ValueKind::Text | ValueKind::TextList => "''",
        }
    }

    /// Comparison modes a column of this kind accepts, in presentation order.
    pub fn modes(&self, null_sensitive: bool) -> Vec<ComparisonMode> {
        let base: &[ComparisonMode] = match self {
            ValueKind::Boolean => &[ComparisonMode::Equal],
            ValueKind::Date | ValueKind::Number => SCALAR_ORDERED,
            ValueKind::Text => TEXT,
            ValueKind::NumberList | ValueKind::TextList => LIST,
        };

        let mut modes = base.to_vec();
        if null_sensitive {
            modes.extend_from_slice(NULL_CHECKS);
        }
        modes
    }

    /// First mode offered for this kind; used when no mode is configured.
    pub fn default_mode(&self) -> ComparisonMode {
        match self {
            ValueKind::NumberList | ValueKind::TextList => ComparisonMode::In,
            _ => ComparisonMode::Equal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Boolean => "boolean",
            ValueKind::Date => "date",
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::NumberList => "number_list",
            ValueKind::TextList => "text_list",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        ValueKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| format!("Unknown value kind: {s}"))
    }
}
