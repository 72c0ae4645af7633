use crate::core::value_kind::ValueKind;
use thiserror::Error;

/// Errors raised while coercing raw input into a typed [`Value`](crate::core::value::Value).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// The input has a shape the kind cannot hold (object, nested list, ...).
    #[error("Cannot use {found} as a {kind} value")]
    Mismatch { kind: ValueKind, found: String },

    /// A string could not be parsed as a date or timestamp.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A string could not be parsed as a number.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    /// A string could not be parsed as a boolean.
    #[error("Invalid boolean: {0}")]
    InvalidBoolean(String),
}
