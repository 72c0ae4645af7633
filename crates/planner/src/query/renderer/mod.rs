//! Defines the core rendering trait and context for converting AST to SQL.

use crate::{filter::param::SqlParam, query::dialect::Dialect};
use model::core::value::Value;

pub mod condition;
pub mod expr;

/// A trait for any AST node that can be rendered into a SQL string.
pub trait Render {
    fn render(&self, renderer: &mut Renderer);
}

/// A context that holds the state during the rendering process.
///
/// It accumulates the SQL string and the named parameters, and provides
/// access to the dialect for syntax-specific details.
pub struct Renderer<'a> {
    pub sql: String,
    pub params: Vec<SqlParam>,
    pub dialect: &'a dyn Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            sql: String::new(),
            params: Vec::new(),
            dialect,
        }
    }

    /// Consumes the renderer and returns the final SQL string and parameters.
    pub fn finish(self) -> (String, Vec<SqlParam>) {
        (self.sql, self.params)
    }

    /// Writes the placeholder and records the value bound to it.
    pub fn add_param(&mut self, name: &str, value: Value) {
        self.sql.push_str(name);
        self.params.push(SqlParam::new(name, value));
    }
}
