use crate::query::{
    ast::{
        condition::Condition,
        expr::{BinaryOp, BinaryOperator, Expr},
    },
    call, column, literal,
};
use model::core::value::Value;

/// Where the `%` wildcards go around a `like` operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikePattern {
    /// `like p`
    Exact,
    /// `like concat('%', p, '%')`
    Contains,
    /// `like concat(p, '%')`
    StartsWith,
    /// `like concat('%', p)`
    EndsWith,
}

/// Builds [`Condition`]s against one column, applying the column's case
/// folding and null coalescing to every condition it produces.
#[derive(Debug, Clone)]
pub struct ConditionBuilder {
    expression: String,
    case_fold: bool,
    fold_operands: bool,
    null_default: Option<&'static str>,
    delimiter: &'static str,
}

impl ConditionBuilder {
    pub fn new(expression: &str) -> Self {
        Self {
            expression: expression.to_string(),
            case_fold: false,
            fold_operands: false,
            null_default: None,
            delimiter: "",
        }
    }

    /// Wraps the column in `lower(...)`. With `fold_operands`, bound
    /// placeholders are wrapped too.
    pub fn case_fold(mut self, fold_operands: bool) -> Self {
        self.case_fold = true;
        self.fold_operands = fold_operands;
        self
    }

    /// Wraps the column in `coalesce(<column>, default)`.
    pub fn coalesce(mut self, default: &'static str) -> Self {
        self.null_default = Some(default);
        self
    }

    /// Quote placed around inlined list items.
    pub fn delimiter(mut self, delimiter: &'static str) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn compare(&self, op: BinaryOperator, operand: Expr) -> Condition {
        Condition::Binary(BinaryOp {
            left: self.column(),
            op,
            right: self.fold_operand(operand),
        })
    }

    pub fn between(&self, low: Expr, high: Expr) -> Condition {
        Condition::Between {
            expr: self.column(),
            low: self.fold_operand(low),
            high: self.fold_operand(high),
        }
    }

    pub fn like(&self, negated: bool, pattern: LikePattern, operand: Expr) -> Condition {
        let percent = || literal("'%'");
        let right = match pattern {
            LikePattern::Exact => operand,
            LikePattern::Contains => call("concat", vec![percent(), operand, percent()]),
            LikePattern::StartsWith => call("concat", vec![operand, percent()]),
            LikePattern::EndsWith => call("concat", vec![percent(), operand]),
        };

        Condition::Binary(BinaryOp {
            left: self.column(),
            op: if negated {
                BinaryOperator::NotLike
            } else {
                BinaryOperator::Like
            },
            right: self.fold_operand(right),
        })
    }

    /// Inlines `items` as delimited literals. Items are case folded
    /// whenever the column is, regardless of `fold_operands`.
    pub fn in_list(&self, negated: bool, items: &[Value]) -> Condition {
        let list = items
            .iter()
            .map(|item| {
                let text = match item {
                    Value::Null => item.to_literal(),
                    other => format!("{d}{}{d}", other.to_literal(), d = self.delimiter),
                };
                self.fold(literal(&text))
            })
            .collect();

        Condition::InList {
            expr: self.column(),
            list,
            negated,
        }
    }

    /// Null checks always test the raw expression.
    pub fn null_check(&self, negated: bool) -> Condition {
        Condition::IsNull {
            expr: column(&self.expression),
            negated,
        }
    }

    fn column(&self) -> Expr {
        let raw = column(&self.expression);
        let coalesced = match self.null_default {
            Some(default) => call("coalesce", vec![raw, literal(default)]),
            None => raw,
        };
        self.fold(coalesced)
    }

    fn fold(&self, expr: Expr) -> Expr {
        if self.case_fold {
            call("lower", vec![expr])
        } else {
            expr
        }
    }

    fn fold_operand(&self, expr: Expr) -> Expr {
        if self.fold_operands {
            self.fold(expr)
        } else {
            expr
        }
    }
}
