//! # calc
//!
//! An interactive integer calculator. Each line is either an expression
//! or a `let` assignment; variables persist for the rest of the session.
//!
//! ```text
//! >>> let x = (3+4)*5
//! >>> x / 2 - 1
//! 16
//! >>> x / (2 - 2)
//! division by zero
//! x / (2 - 2)
//!            ^
//! ```
//!
//! Expressions use `+`, `-`, `*` and `/` over 64-bit integers, with the
//! usual precedence and parentheses. Division truncates toward zero.
//! Integer literals may carry a sign, so `10 + -10` is `0`.

pub mod lang;
