//! Postfix evaluation error types.

use dsk_core::DskError;
use thiserror::Error;

/// Errors raised by [`crate::evaluate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PostfixError {
    /// The expression contains no tokens.
    #[error("expression is empty")]
    Empty,

    /// A token is neither an operator nor a decimal 32-bit integer.
    #[error("invalid token `{0}`")]
    BadToken(String),

    /// An operator was applied with fewer than two operands on the stack.
    #[error("operator `{op}` is missing operands")]
    MissingOperands { op: char },

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// An intermediate result does not fit in 32 bits.
    #[error("arithmetic overflow applying `{op}`")]
    Overflow { op: char },

    /// More than one value remained after all tokens were consumed.
    #[error("expression left {count} values on the stack, expected 1")]
    TrailingOperands { count: usize },
}

impl From<PostfixError> for DskError {
    fn from(err: PostfixError) -> Self {
        match err {
            PostfixError::Empty => DskError::Empty {
                what: "postfix expression",
            },
            _ => DskError::InvalidArg {
                what: "postfix expression",
            },
        }
    }
}
