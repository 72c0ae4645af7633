pub mod comparison;
pub mod error;
pub mod utils;
pub mod value;
pub mod value_kind;
