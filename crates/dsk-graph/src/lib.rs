//! dsk-graph: sparse weighted graph for the dsk workspace.
//!
//! Provides:
//! - [`HashGraph`]: a fixed-vertex-count directed graph backed by one
//!   adjacency map per vertex, with optional non-negative edge costs
//! - [`Neighbors`]: a single-pass iterator over a vertex's out-neighbors
//!
//! # Example
//!
//! ```
//! use dsk_graph::HashGraph;
//!
//! let mut g = HashGraph::new(3);
//! g.add_with_cost(0, 1, 5)?;
//! g.add(1, 2)?;
//! g.add_bi_with_cost(0, 2, 7)?;
//!
//! assert_eq!(g.num_edges(), 4);
//! assert_eq!(g.cost(0, 1)?, Some(5));
//! assert_eq!(g.cost(1, 2)?, None);
//! assert!(g.has_edge(2, 0)?);
//! # Ok::<(), dsk_graph::GraphError>(())
//! ```

pub mod error;
pub mod graph;

// Re-exports for ergonomics
pub use error::GraphError;
pub use graph::{GraphResult, HashGraph, Neighbors};
