//! Column filters: predicate construction for one column and aggregation of
//! many columns into a single WHERE clause.

pub mod column;
pub mod config;
pub mod entry;
pub mod error;
pub mod param;
pub mod predicate;
pub mod set;
