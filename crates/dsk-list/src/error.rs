//! List and stack error types.

use dsk_core::DskError;
use thiserror::Error;

/// Errors raised by [`crate::Stack`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// `pop` or `top` was called on an empty stack.
    #[error("stack is empty")]
    EmptyStack,
}

impl From<ListError> for DskError {
    fn from(err: ListError) -> Self {
        match err {
            ListError::EmptyStack => DskError::Empty { what: "stack" },
        }
    }
}
