//! Defines the AST for a single-column filter condition.

use crate::query::ast::expr::{BinaryOp, Expr};

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `left <op> right`
    Binary(BinaryOp),

    /// `expr between low and high`
    Between { expr: Expr, low: Expr, high: Expr },

    /// `expr [not] in (a,b,...)`
    InList {
        expr: Expr,
        list: Vec<Expr>,
        negated: bool,
    },

    /// `expr is [not] null`
    IsNull { expr: Expr, negated: bool },
}
