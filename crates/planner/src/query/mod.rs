use crate::query::ast::expr::{Expr, FunctionCall};
use model::core::value::Value;

pub mod ast;
pub mod builder;
pub mod dialect;
pub mod renderer;

/// A raw column expression, emitted verbatim.
pub fn column(expression: &str) -> Expr {
    Expr::Column(expression.to_string())
}

/// A named bind parameter.
pub fn param(name: &str, value: Value) -> Expr {
    Expr::Param {
        name: name.to_string(),
        value,
    }
}

/// A literal SQL token, emitted verbatim.
pub fn literal(text: &str) -> Expr {
    Expr::Literal(text.to_string())
}

pub fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::FunctionCall(FunctionCall {
        name: name.to_string(),
        args,
    })
}
