//! dsk-core: stable foundation for the dsk workspace.
//!
//! Contains:
//! - error (shared error types)
//!
//! Every dsk crate defines its own narrow error enum and converts it into
//! [`DskError`] at the workspace boundary, so callers that mix crates can
//! handle one error type.

pub mod error;

// Re-exports: nice ergonomics for downstream crates
pub use error::{DskError, DskResult};
