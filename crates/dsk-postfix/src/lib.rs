//! dsk-postfix: evaluator for integer postfix expressions.
//!
//! Postfix notation writes arithmetic without parentheses or priority
//! rules: `1 2 - 3 4 + *` is the infix `(1 - 2) * (3 + 4)`. Expressions
//! contain decimal 32-bit integer operands and the operators `+ - * /`,
//! separated by whitespace. Evaluation runs left to right over a
//! [`dsk_list::Stack`].

pub mod error;
pub mod eval;

// Re-exports for ergonomics
pub use error::PostfixError;
pub use eval::evaluate;
