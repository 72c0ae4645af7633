use crate::{
    filter::{column::FilterColumn, entry::FilterEntry, error::FilterError, param::SqlParam},
    query::dialect::Dialect,
};
use model::core::value::Value;
use serde::Serialize;
use std::{collections::HashMap, fmt, sync::Arc};
use tracing::{debug, info, warn};

/// Clause returned when no filter is active.
pub const ALWAYS_TRUE: &str = "1=1";

/// A combined WHERE clause and the parameters it binds, in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhereClause {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl fmt::Display for WhereClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Insertion-ordered collection of column filters for one query.
#[derive(Debug, Clone)]
pub struct FilterSet {
    dialect: Arc<dyn Dialect>,
    entries: Vec<(String, FilterEntry)>,
    index: HashMap<String, usize>,
}

impl FilterSet {
    pub fn new(dialect: Arc<dyn Dialect>) -> Self {
        Self {
            dialect,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn dialect(&self) -> &Arc<dyn Dialect> {
        &self.dialect
    }

    /// Registers a new, inactive entry for `column` under `key` and returns it.
    pub fn add_column(&mut self, key: &str, column: FilterColumn) -> &mut FilterEntry {
        let entry = FilterEntry::new(column, Arc::clone(&self.dialect));
        self.insert_entry(key, entry);
        let position = self.index[key];
        &mut self.entries[position].1
    }

    /// Inserts `entry` under `key`, re-rendering it for the set's dialect.
    /// Replacing an existing key keeps its position and returns the previous
    /// entry.
    pub fn insert(
        &mut self,
        key: &str,
        mut entry: FilterEntry,
    ) -> Result<Option<FilterEntry>, FilterError> {
        entry.set_dialect(Arc::clone(&self.dialect))?;
        Ok(self.insert_entry(key, entry))
    }

    fn insert_entry(&mut self, key: &str, entry: FilterEntry) -> Option<FilterEntry> {
        match self.index.get(key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, entry)),
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), entry));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<FilterEntry> {
        let position = self.index.remove(key)?;
        let (_, entry) = self.entries.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(entry)
    }

    pub fn get(&self, key: &str) -> Option<&FilterEntry> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut FilterEntry> {
        let position = *self.index.get(key)?;
        Some(&mut self.entries[position].1)
    }

    /// Like [`get_mut`](Self::get_mut) but reports a missing key as an error.
    pub fn entry(&mut self, key: &str) -> Result<&mut FilterEntry, FilterError> {
        self.get_mut(key)
            .ok_or_else(|| FilterError::UnknownEntry(key.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterEntry)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Joins the fragments of all active entries with `and`, in insertion
    /// order, and collects their parameters. With nothing active the clause
    /// is `1=1`.
    ///
    /// Lists are never bound; a list-valued parameter is passed as NULL.
    pub fn aggregate(&self) -> WhereClause {
        let mut fragments = Vec::new();
        let mut params = Vec::new();

        for (_, entry) in &self.entries {
            if let Some(fragment) = entry.fragment() {
                fragments.push(fragment);
            }
            params.extend(entry.params().iter().map(|param| {
                let value = if param.value.is_list() {
                    Value::Null
                } else {
                    param.value.clone()
                };
                SqlParam::new(param.name.clone(), value)
            }));
        }

        debug!(
            "Aggregated {} of {} filters into {} params",
            fragments.len(),
            self.entries.len(),
            params.len()
        );

        let sql = if fragments.is_empty() {
            ALWAYS_TRUE.to_string()
        } else {
            fragments.join(" and ")
        };

        WhereClause { sql, params }
    }

    /// Resets every entry to its defaults. An entry that fails to reset is
    /// left as it was and the first such error is returned once all other
    /// entries have been reset.
    pub fn reset(&mut self) -> Result<(), FilterError> {
        let mut first_error = None;
        for (key, entry) in &mut self.entries {
            if let Err(err) = entry.reset() {
                warn!("Failed to reset filter '{}': {}", key, err);
                first_error.get_or_insert(err);
            }
        }
        info!("Reset {} filters to their defaults", self.entries.len());
        first_error.map_or(Ok(()), Err)
    }
}
