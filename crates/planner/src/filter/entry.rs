use crate::{
    filter::{
        column::FilterColumn,
        error::FilterError,
        param::SqlParam,
        predicate::{Predicate, build_predicate},
    },
    query::dialect::Dialect,
};
use model::core::{comparison::ComparisonMode, value::Value, value_kind::ValueKind};
use std::sync::Arc;

/// The live filter state of one column.
///
/// The fragment and its parameters are derived state: every mutator
/// recomputes them before returning. A mutator that fails leaves the entry
/// exactly as it was.
#[derive(Debug, Clone)]
pub struct FilterEntry {
    column: FilterColumn,
    mode: Option<ComparisonMode>,
    value1: Value,
    value2: Value,
    default_mode: Option<ComparisonMode>,
    default_value1: Value,
    default_value2: Value,
    param_prefix: String,
    predicate: Option<Predicate>,
    dialect: Arc<dyn Dialect>,
}

impl FilterEntry {
    /// Creates an entry with the kind's first mode and null values and defaults.
    pub fn new(column: FilterColumn, dialect: Arc<dyn Dialect>) -> Self {
        let mode = Some(column.kind.default_mode());
        let param_prefix = dialect.param_prefix(&column.expression);
        Self {
            column,
            mode,
            value1: Value::Null,
            value2: Value::Null,
            default_mode: mode,
            default_value1: Value::Null,
            default_value2: Value::Null,
            param_prefix,
            predicate: None,
            dialect,
        }
    }

    /// Declares the values restored by [`reset`](Self::reset) and applies them.
    pub fn with_defaults(
        mut self,
        mode: Option<ComparisonMode>,
        value1: impl Into<Value>,
        value2: impl Into<Value>,
    ) -> Result<Self, FilterError> {
        self.default_mode = mode;
        self.default_value1 = value1.into();
        self.default_value2 = value2.into();
        self.mode = self.default_mode;
        self.value1 = self.default_value1.clone();
        self.value2 = self.default_value2.clone();
        self.recompute()?;
        Ok(self)
    }

    pub fn column(&self) -> &FilterColumn {
        &self.column
    }

    pub fn kind(&self) -> ValueKind {
        self.column.kind
    }

    pub fn mode(&self) -> Option<ComparisonMode> {
        self.mode
    }

    pub fn value1(&self) -> &Value {
        &self.value1
    }

    pub fn value2(&self) -> &Value {
        &self.value2
    }

    pub fn default_mode(&self) -> Option<ComparisonMode> {
        self.default_mode
    }

    pub fn default_value1(&self) -> &Value {
        &self.default_value1
    }

    pub fn default_value2(&self) -> &Value {
        &self.default_value2
    }

    pub fn dialect(&self) -> &Arc<dyn Dialect> {
        &self.dialect
    }

    /// Parameter prefix derived from the column expression, e.g. `@age`.
    pub fn param_prefix(&self) -> &str {
        &self.param_prefix
    }

    /// Current SQL fragment, or `None` while the filter is inactive.
    pub fn fragment(&self) -> Option<&str> {
        self.predicate.as_ref().map(|p| p.sql.as_str())
    }

    pub fn params(&self) -> &[SqlParam] {
        self.predicate
            .as_ref()
            .map(|p| p.params.as_slice())
            .unwrap_or_default()
    }

    pub fn is_active(&self) -> bool {
        self.predicate.is_some()
    }

    /// Modes a UI may offer for this entry.
    pub fn available_modes(&self) -> Vec<ComparisonMode> {
        self.column.kind.modes(self.column.null_sensitive)
    }

    /// `None` clears the filter.
    pub fn set_mode(&mut self, mode: Option<ComparisonMode>) -> Result<(), FilterError> {
        self.apply(|entry| entry.mode = mode)
    }

    pub fn set_value1(&mut self, value: impl Into<Value>) -> Result<(), FilterError> {
        let value = value.into();
        self.apply(|entry| entry.value1 = value)
    }

    pub fn set_value2(&mut self, value: impl Into<Value>) -> Result<(), FilterError> {
        let value = value.into();
        self.apply(|entry| entry.value2 = value)
    }

    pub fn set_values(
        &mut self,
        value1: impl Into<Value>,
        value2: impl Into<Value>,
    ) -> Result<(), FilterError> {
        let (value1, value2) = (value1.into(), value2.into());
        self.apply(|entry| {
            entry.value1 = value1;
            entry.value2 = value2;
        })
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) -> Result<(), FilterError> {
        self.apply(|entry| entry.column.case_sensitive = case_sensitive)
    }

    pub fn set_null_sensitive(&mut self, null_sensitive: bool) -> Result<(), FilterError> {
        self.apply(|entry| entry.column.null_sensitive = null_sensitive)
    }

    /// Re-renders the entry for `dialect`.
    pub fn set_dialect(&mut self, dialect: Arc<dyn Dialect>) -> Result<(), FilterError> {
        self.apply(|entry| entry.dialect = dialect)
    }

    /// Restores the default mode and values, then recomputes the fragment.
    ///
    /// A list value is cleared and refilled in place from its default.
    pub fn reset(&mut self) -> Result<(), FilterError> {
        let (default1, default2) = (self.default_value1.clone(), self.default_value2.clone());
        let default_mode = self.default_mode;
        self.apply(|entry| {
            entry.mode = default_mode;
            restore(&mut entry.value1, default1);
            restore(&mut entry.value2, default2);
        })
    }

    fn apply(&mut self, mutate: impl FnOnce(&mut Self)) -> Result<(), FilterError> {
        let mut next = self.clone();
        mutate(&mut next);
        next.check_default_mode()?;
        next.recompute()?;
        *self = next;
        Ok(())
    }

    /// The default mode must stay valid so that [`reset`](Self::reset)
    /// cannot fail after a sensitivity change.
    fn check_default_mode(&self) -> Result<(), FilterError> {
        match self.default_mode {
            Some(mode) if !mode.is_valid_for(self.column.kind, self.column.null_sensitive) => {
                Err(FilterError::IncompatibleMode {
                    column: self.column.expression.clone(),
                    mode,
                    kind: self.column.kind,
                })
            }
            _ => Ok(()),
        }
    }

    fn recompute(&mut self) -> Result<(), FilterError> {
        self.param_prefix = self.dialect.param_prefix(&self.column.expression);
        self.predicate = match self.mode {
            Some(mode) => build_predicate(
                &self.column,
                mode,
                &self.value1,
                &self.value2,
                self.dialect.as_ref(),
            )?,
            None => None,
        };
        Ok(())
    }
}

fn restore(current: &mut Value, default: Value) {
    if let (Some(items), Value::List(defaults)) = (current.as_list_mut(), &default) {
        items.clear();
        items.extend(defaults.iter().cloned());
        return;
    }
    *current = default;
}
