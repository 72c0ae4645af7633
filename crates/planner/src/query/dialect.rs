//! Defines the `Dialect` trait for database-specific placeholder syntax.

use model::core::utils::letters_and_digits;
use std::{fmt::Debug, sync::Arc};

pub trait Dialect: Debug + Send + Sync {
    /// Returns the name of the dialect (e.g., "SQL Server", "SQLite").
    fn name(&self) -> String;

    /// Character sequence that introduces a named parameter.
    ///
    /// - SQL Server uses `@name`
    /// - SQLite accepts `@name` alongside `:name` and `$name`
    fn param_marker(&self) -> &'static str;

    /// Maximum length, in characters, of a parameter prefix (marker included)
    /// before the `1`/`2` suffix is appended.
    fn max_param_prefix_len(&self) -> usize {
        120
    }

    /// Whether a case-insensitive text comparison also wraps the bound
    /// placeholder in `lower(...)`, not just the column.
    fn fold_bound_parameters(&self) -> bool {
        true
    }

    /// Derives the parameter prefix of a column: the marker followed by the
    /// letters and digits of the expression, truncated to
    /// [`max_param_prefix_len`](Dialect::max_param_prefix_len).
    fn param_prefix(&self, column_expression: &str) -> String {
        let prefix = format!(
            "{}{}",
            self.param_marker(),
            letters_and_digits(column_expression)
        );
        prefix.chars().take(self.max_param_prefix_len()).collect()
    }

    /// Returns the placeholder for the `index`-th operand of a prefix.
    fn placeholder(&self, prefix: &str, index: usize) -> String {
        format!("{prefix}{index}")
    }
}

#[derive(Debug, Clone, Default)]
pub struct SqlServer;

impl Dialect for SqlServer {
    fn name(&self) -> String {
        "SQL Server".into()
    }

    fn param_marker(&self) -> &'static str {
        "@"
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn name(&self) -> String {
        "SQLite".into()
    }

    fn param_marker(&self) -> &'static str {
        "@"
    }
}

/// Looks a dialect up by its configuration name.
pub fn from_name(name: &str) -> Option<Arc<dyn Dialect>> {
    match name.trim().to_lowercase().as_str() {
        "sqlserver" | "mssql" | "sql_server" => Some(Arc::new(SqlServer)),
        "sqlite" => Some(Arc::new(Sqlite)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_prefix_keeps_letters_and_digits() {
        let dialect = SqlServer;
        assert_eq!(dialect.param_prefix("age"), "@age");
        assert_eq!(dialect.param_prefix("o.created_at"), "@ocreatedat");
        assert_eq!(dialect.param_prefix("[Order Total 2]"), "@OrderTotal2");
        assert_eq!(dialect.param_prefix(""), "@");
    }

    #[test]
    fn test_param_prefix_is_truncated() {
        let dialect = SqlServer;
        let long = "c".repeat(300);
        let prefix = dialect.param_prefix(&long);
        assert_eq!(prefix.chars().count(), 120);
        assert!(prefix.starts_with('@'));
        assert_eq!(dialect.placeholder(&prefix, 1).chars().count(), 121);
    }

    #[test]
    fn test_sqlite_marker() {
        let dialect = Sqlite;
        assert_eq!(dialect.param_prefix("age"), "@age");
        assert_eq!(dialect.placeholder(&dialect.param_prefix("name"), 2), "@name2");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(from_name("MSSQL").map(|d| d.name()), Some("SQL Server".into()));
        assert_eq!(from_name("sqlite").map(|d| d.name()), Some("SQLite".into()));
        assert!(from_name("oracle").is_none());
    }
}
