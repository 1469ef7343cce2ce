use thiserror::Error;

pub type DskResult<T> = Result<T, DskError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DskError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Exhausted: {what} has no remaining elements")]
    Exhausted { what: &'static str },

    #[error("Empty: {what} has no elements")]
    Empty { what: &'static str },
}
