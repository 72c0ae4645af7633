use model::core::value::Value;
use serde::Serialize;
use std::fmt;

/// A named bind parameter. [`Value::Null`] is the explicit SQL NULL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlParam {
    pub name: String,
    pub value: Value,
}

impl SqlParam {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for SqlParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}
