/*!
# Rust Language Module

This Rust module parses and evaluates calculator input one line at a time.

*/

#[macro_use]
mod error;
mod cursor;
mod eval;
mod operator;
mod parse;
mod var;

pub use error::Error;
pub use error::ErrorCode;
pub use eval::Evaluator;
pub use operator::Operator;
pub use parse::parse;
pub use parse::MAX_NESTING;
pub use parse::Statement;
pub use var::Var;

/// Integer type of every value the calculator produces.
pub type Integer = i64;

/// Zero-based character column within an input line.
pub type Column = usize;
