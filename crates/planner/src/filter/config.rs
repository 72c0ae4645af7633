//! Serde model of a filter-set definition file.

use crate::{
    filter::{column::FilterColumn, entry::FilterEntry, error::FilterError, set::FilterSet},
    query::dialect::{self, Dialect, SqlServer},
};
use model::core::{comparison::ComparisonMode, value::Value, value_kind::ValueKind};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Clone, Deserialize)]
pub struct FilterSetConfig {
    /// Dialect name; SQL Server when absent.
    #[serde(default)]
    pub dialect: Option<String>,
    #[serde(default)]
    pub filters: Vec<FilterConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Entry key; the column expression when absent.
    #[serde(default)]
    pub key: Option<String>,
    pub column: String,
    pub kind: ValueKind,
    #[serde(default)]
    pub mode: Option<ComparisonMode>,
    #[serde(default)]
    pub default_mode: Option<ComparisonMode>,
    #[serde(default)]
    pub case_sensitive: bool,
    #[serde(default)]
    pub null_sensitive: bool,
    #[serde(default)]
    pub value1: serde_json::Value,
    #[serde(default)]
    pub value2: serde_json::Value,
    #[serde(default)]
    pub default_value1: serde_json::Value,
    #[serde(default)]
    pub default_value2: serde_json::Value,
}

impl FilterSetConfig {
    pub fn from_json_str(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn dialect(&self) -> Result<Arc<dyn Dialect>, FilterError> {
        match &self.dialect {
            Some(name) => {
                dialect::from_name(name).ok_or_else(|| FilterError::UnknownDialect(name.clone()))
            }
            None => Ok(Arc::new(SqlServer)),
        }
    }

    /// Builds the filter set: every entry starts from its defaults, then the
    /// configured current mode and values are applied on top.
    pub fn into_filter_set(self) -> Result<FilterSet, FilterError> {
        let dialect = self.dialect()?;
        let mut set = FilterSet::new(Arc::clone(&dialect));

        for filter in self.filters {
            let key = filter.key.clone().unwrap_or_else(|| filter.column.clone());
            let entry = filter.into_entry(Arc::clone(&dialect))?;
            set.insert(&key, entry)?;
        }

        Ok(set)
    }
}

impl FilterConfig {
    /// `mode` falls back to `default_mode`, which falls back to the kind's
    /// first mode. A null or absent `value1`/`value2` falls back to the
    /// matching default value, whichever mode is current.
    pub fn into_entry(self, dialect: Arc<dyn Dialect>) -> Result<FilterEntry, FilterError> {
        let kind = self.kind;
        let coerce = |json: &serde_json::Value, default: &Value| {
            if json.is_null() {
                Ok(default.clone())
            } else {
                Value::from_json(json, kind)
            }
        };

        let default_mode = self.default_mode.unwrap_or_else(|| kind.default_mode());
        let default_value1 = Value::from_json(&self.default_value1, kind)?;
        let default_value2 = Value::from_json(&self.default_value2, kind)?;
        let value1 = coerce(&self.value1, &default_value1)?;
        let value2 = coerce(&self.value2, &default_value2)?;

        let column = FilterColumn::new(self.column, kind)
            .case_sensitive(self.case_sensitive)
            .null_sensitive(self.null_sensitive);

        let mut entry = FilterEntry::new(column, dialect).with_defaults(
            Some(default_mode),
            default_value1,
            default_value2,
        )?;
        entry.set_mode(Some(self.mode.unwrap_or(default_mode)))?;
        entry.set_values(value1, value2)?;

        Ok(entry)
    }
}
