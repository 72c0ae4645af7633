use model::core::value_kind::ValueKind;
use serde::{Deserialize, Serialize};

/// Static description of a filterable column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterColumn {
    /// Raw SQL column or expression; it is not identifier-escaped.
    pub expression: String,
    pub kind: ValueKind,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub null_sensitive: bool,
}

impl FilterColumn {
    pub fn new(expression: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            expression: expression.into(),
            kind,
            case_sensitive: false,
            null_sensitive: false,
        }
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn null_sensitive(mut self, null_sensitive: bool) -> Self {
        self.null_sensitive = null_sensitive;
        self
    }

    /// Text comparisons are folded to lower case unless the column is case sensitive.
    pub fn folds_case(&self) -> bool {
        self.kind.is_textual() && !self.case_sensitive
    }
}
