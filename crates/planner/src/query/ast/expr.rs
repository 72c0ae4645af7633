//! Defines the AST for the operands of a filter condition.

use model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or arbitrary SQL expression, emitted as written.
    Column(String),

    /// A named bind parameter, e.g. `@age1`.
    Param { name: String, value: Value },

    /// A literal SQL token such as `0`, `'%'` or `'A'`.
    Literal(String),

    /// A function call, e.g. `lower(name)` or `coalesce(age, 0)`.
    FunctionCall(FunctionCall),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Eq,    // =
    NotEq, // <>
    Gt,    // >
    GtEq,  // >=
    Lt,    // <
    LtEq,  // <=
    Like,
    NotLike,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Expr,
    pub op: BinaryOperator,
    pub right: Expr,
}
