//! Graph-specific error types.

use dsk_core::DskError;
use thiserror::Error;

/// Errors raised by [`crate::HashGraph`] operations.
///
/// Every error is raised before any mutation takes place, so a failed
/// operation always leaves the graph unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex index is not in `[0, num_vertices)`.
    #[error("vertex {vertex} out of bounds for graph with {len} vertices")]
    VertexOutOfBounds { vertex: usize, len: usize },

    /// An edge cost is negative.
    #[error("edge cost {cost} is negative")]
    NegativeCost { cost: i64 },

    /// The neighbor iterator was advanced past its last element.
    #[error("neighbor iterator exhausted")]
    Exhausted,
}

impl From<GraphError> for DskError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::VertexOutOfBounds { vertex, len } => DskError::IndexOob {
                what: "vertex",
                index: vertex,
                len,
            },
            GraphError::NegativeCost { .. } => DskError::InvalidArg { what: "edge cost" },
            GraphError::Exhausted => DskError::Exhausted {
                what: "neighbor iterator",
            },
        }
    }
}
