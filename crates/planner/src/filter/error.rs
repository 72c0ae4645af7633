use model::core::{comparison::ComparisonMode, error::ValueError, value_kind::ValueKind};
use thiserror::Error;

/// Errors raised while building or maintaining column filters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// The mode is not offered for the column's kind (or is a null check on
    /// a column that is not null sensitive).
    #[error("Mode '{mode}' is not valid for {kind} column '{column}'")]
    IncompatibleMode {
        column: String,
        mode: ComparisonMode,
        kind: ValueKind,
    },

    /// A list was given for a scalar column or a scalar for a list column.
    #[error("Type mismatch on column '{column}': expected {expected}, found {found}")]
    TypeMismatch {
        column: String,
        expected: String,
        found: String,
    },

    /// A raw value could not be coerced into the column's kind.
    #[error("Invalid value: {0}")]
    InvalidValue(#[from] ValueError),

    /// No entry is registered under the given key.
    #[error("Unknown filter entry: {0}")]
    UnknownEntry(String),

    /// The configured dialect name is not recognised.
    #[error("Unknown dialect: {0}")]
    UnknownDialect(String),
}
