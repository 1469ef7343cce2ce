//! Sparse weighted graph backed by per-vertex adjacency maps.

use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

use crate::error::GraphError;

/// Result alias used throughout this crate.
pub type GraphResult<T> = Result<T, GraphError>;

/// A directed graph with a fixed number of vertices, implemented with one
/// hash map per vertex: `edges[v]` maps neighbor `w` to the optional cost of
/// the edge `v -> w`. Space is Theta(n + m) for `n` vertices and `m` edges.
///
/// Vertices are plain `usize` indices in `[0, num_vertices)` and exist for
/// the whole lifetime of the graph; only their incident edges change. At most
/// one edge exists per ordered pair, and re-adding an existing pair
/// overwrites its cost without changing the edge count. An undirected
/// connection is modeled as two independent directed edges (see
/// [`HashGraph::add_bi`]); removing only one of them leaves the other in
/// place.
///
/// Costs are non-negative; an edge added without a cost stores `None`, and
/// `cost()` cannot distinguish a costless edge from an absent one.
///
/// The graph is not synchronized. Sharing it across threads requires
/// external locking, like any `std` collection.
#[derive(Debug, Clone)]
pub struct HashGraph {
    /// `edges[v]` holds (neighbor, cost) pairs for the outgoing edges of `v`.
    /// All maps are allocated up front in `new`.
    edges: Vec<HashMap<usize, Option<i64>>>,

    /// Total number of directed edges across all adjacency maps.
    num_edges: usize,
}

impl HashGraph {
    /// Create a graph with `n` vertices and no edges. Time: O(n).
    pub fn new(n: usize) -> Self {
        Self {
            edges: vec![HashMap::new(); n],
            num_edges: 0,
        }
    }

    /// Number of vertices. O(1).
    pub fn num_vertices(&self) -> usize {
        self.edges.len()
    }

    /// Number of directed edges. O(1).
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn check_vertex(&self, v: usize) -> GraphResult<()> {
        if v >= self.edges.len() {
            return Err(GraphError::VertexOutOfBounds {
                vertex: v,
                len: self.edges.len(),
            });
        }
        Ok(())
    }

    fn check_cost(cost: i64) -> GraphResult<()> {
        if cost < 0 {
            return Err(GraphError::NegativeCost { cost });
        }
        Ok(())
    }

    /// Insert without checking parameters.
    fn insert_edge(&mut self, from: usize, to: usize, cost: Option<i64>) {
        if self.edges[from].insert(to, cost).is_none() {
            self.num_edges += 1;
        }
    }

    /// Delete without checking parameters.
    fn delete_edge(&mut self, from: usize, to: usize) {
        if self.edges[from].remove(&to).is_some() {
            self.num_edges -= 1;
        }
    }

    /// Out-degree of `v`: the number of outgoing edges. O(1).
    pub fn degree(&self, v: usize) -> GraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.edges[v].len())
    }

    /// Whether the directed edge `v -> w` exists. O(1) expected.
    ///
    /// `w` outside `[0, num_vertices)` is not an error; no edge can point
    /// there, so the answer is simply `false`.
    pub fn has_edge(&self, v: usize, w: usize) -> GraphResult<bool> {
        self.check_vertex(v)?;
        Ok(self.edges[v].contains_key(&w))
    }

    /// Cost of the edge `v -> w`, or `None` if the edge is absent or was
    /// added without a cost. O(1) expected.
    pub fn cost(&self, v: usize, w: usize) -> GraphResult<Option<i64>> {
        self.check_vertex(v)?;
        Ok(self.edges[v].get(&w).copied().flatten())
    }

    /// Insert the edge `from -> to` without a cost, overwriting the cost of
    /// an existing edge. The edge count grows only for a genuinely new edge.
    pub fn add(&mut self, from: usize, to: usize) -> GraphResult<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.insert_edge(from, to, None);
        Ok(())
    }

    /// Insert the edge `from -> to` with the given non-negative cost,
    /// overwriting the cost of an existing edge.
    pub fn add_with_cost(&mut self, from: usize, to: usize, cost: i64) -> GraphResult<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Self::check_cost(cost)?;
        self.insert_edge(from, to, Some(cost));
        Ok(())
    }

    /// Insert both `v -> w` and `w -> v` without a cost.
    pub fn add_bi(&mut self, v: usize, w: usize) -> GraphResult<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        self.insert_edge(v, w, None);
        self.insert_edge(w, v, None);
        Ok(())
    }

    /// Insert both `v -> w` and `w -> v` with the same non-negative cost.
    pub fn add_bi_with_cost(&mut self, v: usize, w: usize, cost: i64) -> GraphResult<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        Self::check_cost(cost)?;
        self.insert_edge(v, w, Some(cost));
        self.insert_edge(w, v, Some(cost));
        Ok(())
    }

    /// Remove the edge `from -> to` if present. Removing an absent edge is a
    /// no-op, not an error, and leaves the edge count unchanged.
    pub fn remove(&mut self, from: usize, to: usize) -> GraphResult<()> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        self.delete_edge(from, to);
        Ok(())
    }

    /// Remove both `v -> w` and `w -> v`; each direction independently is a
    /// no-op if absent.
    pub fn remove_bi(&mut self, v: usize, w: usize) -> GraphResult<()> {
        self.check_vertex(v)?;
        self.check_vertex(w)?;
        self.delete_edge(v, w);
        self.delete_edge(w, v);
        Ok(())
    }

    /// Single-pass iterator over the destinations of `v`'s outgoing edges,
    /// in the adjacency map's own (unordered) iteration order.
    ///
    /// The iterator borrows the graph, so the borrow checker rejects
    /// mutation while it is alive; issue a fresh call for a new pass.
    pub fn neighbors(&self, v: usize) -> GraphResult<Neighbors<'_>> {
        self.check_vertex(v)?;
        Ok(Neighbors {
            inner: self.edges[v].keys(),
        })
    }
}

/// Iterator over the out-neighbors of a single vertex.
///
/// Forward-only and not restartable. Besides the [`Iterator`] impl,
/// [`Neighbors::try_next`] reports exhaustion as [`GraphError::Exhausted`]
/// for callers that treat advancing past the end as an error.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    inner: hash_map::Keys<'a, usize, Option<i64>>,
}

impl Neighbors<'_> {
    /// Advance, failing with [`GraphError::Exhausted`] if nothing remains.
    pub fn try_next(&mut self) -> GraphResult<usize> {
        self.next().ok_or(GraphError::Exhausted)
    }
}

impl Iterator for Neighbors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbors<'_> {}

/// Diagnostic rendering of all edges as `{(from,to), (from,to,cost), ...}`.
///
/// The cost field is omitted exactly when the edge has no cost. An edgeless
/// graph renders as `{}`. This is a debug aid, not a serialization format;
/// neighbor order within a vertex is unspecified.
impl fmt::Display for HashGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (from, adjacent) in self.edges.iter().enumerate() {
            for (to, cost) in adjacent {
                if !first {
                    write!(f, ", ")?;
                }
                first = false;
                match cost {
                    Some(c) => write!(f, "({from},{to},{c})")?,
                    None => write!(f, "({from},{to})")?,
                }
            }
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_graph_is_empty() {
        let g = HashGraph::new(5);
        assert_eq!(g.num_vertices(), 5);
        assert_eq!(g.num_edges(), 0);
        for v in 0..5 {
            assert_eq!(g.degree(v).unwrap(), 0);
        }
    }

    #[test]
    fn zero_vertex_graph() {
        let g = HashGraph::new(0);
        assert_eq!(g.num_vertices(), 0);
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.to_string(), "{}");
        assert!(matches!(
            g.degree(0),
            Err(GraphError::VertexOutOfBounds { vertex: 0, len: 0 })
        ));
    }

    #[test]
    fn add_and_query() {
        let mut g = HashGraph::new(3);
        g.add_with_cost(0, 1, 5).unwrap();
        assert!(g.has_edge(0, 1).unwrap());
        assert!(!g.has_edge(1, 0).unwrap());
        assert_eq!(g.cost(0, 1).unwrap(), Some(5));
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.degree(0).unwrap(), 1);
    }

    #[test]
    fn costless_edge_reads_as_none() {
        let mut g = HashGraph::new(2);
        g.add(0, 1).unwrap();
        assert!(g.has_edge(0, 1).unwrap());
        // Indistinguishable from the absent edge 1 -> 0.
        assert_eq!(g.cost(0, 1).unwrap(), None);
        assert_eq!(g.cost(1, 0).unwrap(), None);
    }

    #[test]
    fn overwrite_updates_cost_not_count() {
        let mut g = HashGraph::new(2);
        g.add_with_cost(0, 1, 3).unwrap();
        g.add_with_cost(0, 1, 9).unwrap();
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.cost(0, 1).unwrap(), Some(9));

        // Overwriting with the costless form clears the cost too.
        g.add(0, 1).unwrap();
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.cost(0, 1).unwrap(), None);
    }

    #[test]
    fn remove_absent_edge_is_noop() {
        let mut g = HashGraph::new(2);
        g.add(0, 1).unwrap();
        g.remove(1, 0).unwrap();
        assert_eq!(g.num_edges(), 1);
        g.remove(0, 1).unwrap();
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn bidirectional_edges_are_independent() {
        let mut g = HashGraph::new(2);
        g.add_bi_with_cost(0, 1, 7).unwrap();
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.cost(0, 1).unwrap(), Some(7));
        assert_eq!(g.cost(1, 0).unwrap(), Some(7));

        // Removing one direction leaves the other.
        g.remove(0, 1).unwrap();
        assert!(!g.has_edge(0, 1).unwrap());
        assert!(g.has_edge(1, 0).unwrap());

        // remove_bi clears the remaining direction even though the other is
        // already gone.
        g.remove_bi(0, 1).unwrap();
        assert!(!g.has_edge(0, 1).unwrap());
        assert!(!g.has_edge(1, 0).unwrap());
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn negative_cost_rejected_without_mutation() {
        let mut g = HashGraph::new(2);
        assert_eq!(
            g.add_with_cost(0, 1, -1),
            Err(GraphError::NegativeCost { cost: -1 })
        );
        assert_eq!(
            g.add_bi_with_cost(0, 1, -4),
            Err(GraphError::NegativeCost { cost: -4 })
        );
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn out_of_bounds_vertex_rejected() {
        let mut g = HashGraph::new(3);
        assert!(g.add(3, 0).is_err());
        assert!(g.add(0, 3).is_err());
        assert!(g.add_bi(0, 3).is_err());
        assert!(g.remove(3, 0).is_err());
        assert!(g.remove_bi(0, 3).is_err());
        assert!(g.degree(3).is_err());
        assert!(g.has_edge(3, 0).is_err());
        assert!(g.cost(3, 0).is_err());
        assert!(g.neighbors(3).is_err());
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn query_with_out_of_range_destination_is_no_edge() {
        let mut g = HashGraph::new(2);
        g.add(0, 1).unwrap();
        assert!(!g.has_edge(0, 99).unwrap());
        assert_eq!(g.cost(0, 99).unwrap(), None);
    }

    #[test]
    fn neighbors_yields_each_destination_once() {
        let mut g = HashGraph::new(4);
        g.add(0, 1).unwrap();
        g.add_with_cost(0, 2, 8).unwrap();
        g.add(0, 3).unwrap();
        g.add(1, 0).unwrap();

        let mut seen: Vec<usize> = g.neighbors(0).unwrap().collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn neighbors_try_next_reports_exhaustion() {
        let mut g = HashGraph::new(2);
        g.add(0, 1).unwrap();

        let mut it = g.neighbors(0).unwrap();
        assert_eq!(it.try_next(), Ok(1));
        assert_eq!(it.try_next(), Err(GraphError::Exhausted));
        // Still exhausted on a repeat call.
        assert_eq!(it.try_next(), Err(GraphError::Exhausted));

        // A fresh call starts a new pass.
        assert_eq!(g.neighbors(0).unwrap().count(), 1);
    }

    #[test]
    fn display_single_edges() {
        let mut g = HashGraph::new(2);
        assert_eq!(g.to_string(), "{}");

        g.add_with_cost(0, 1, 5).unwrap();
        assert_eq!(g.to_string(), "{(0,1,5)}");

        g.add(0, 1).unwrap();
        assert_eq!(g.to_string(), "{(0,1)}");
    }

    #[test]
    fn display_mixed_edges() {
        let mut g = HashGraph::new(3);
        g.add(0, 1).unwrap();
        g.add_with_cost(1, 2, 4).unwrap();
        // Per-vertex order is fixed (one edge each), so the rendering is
        // deterministic here.
        assert_eq!(g.to_string(), "{(0,1), (1,2,4)}");
    }
}
