pub mod condition;
pub mod expr;
