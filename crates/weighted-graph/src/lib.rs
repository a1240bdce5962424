//! Weighted graphs with shortest-path and minimum spanning tree algorithms.
//!
//! This crate provides:
//!
//! - **Digraph**: Directed weighted graph owning its shortest-path buffers
//! - **Graph**: Undirected weighted graph with symmetric adjacency
//! - **BFS**: Unweighted shortest-path tree
//! - **Dijkstra**: Weighted shortest-path tree for non-negative weights
//! - **Prim / Kruskal**: Minimum spanning trees
//! - **DisjointSet**: Union-find used for Kruskal's cycle rejection
//!
//! Vertices are numbered from 1; id 0 is the "no parent" sentinel.
//!
//! # Example
//!
//! ```
//! use weighted_graph::{Digraph, Distance, Edge, Graph, VertexId};
//!
//! let mut roads = Digraph::from_edges(4, &[
//!     Edge::new(1, 2, 4),
//!     Edge::new(1, 3, 1),
//!     Edge::new(3, 2, 2),
//!     Edge::new(2, 4, 5),
//! ])?;
//! roads.positive_weighted_shortest_paths(VertexId(1))?;
//! assert_eq!(roads.distance_to(VertexId(4))?, Distance::new(8));
//! assert_eq!(
//!     roads.path_to(VertexId(4))?,
//!     Some(vec![VertexId(1), VertexId(3), VertexId(2), VertexId(4)])
//! );
//!
//! let cables = Graph::from_edges(3, &[
//!     Edge::new(1, 2, 1),
//!     Edge::new(2, 3, 1),
//!     Edge::new(1, 3, 5),
//! ])?;
//! assert_eq!(cables.kruskal_mst().total_weight(), 2);
//! # Ok::<(), weighted_graph::GraphError>(())
//! ```

pub mod algorithms;
pub mod graph;
pub mod models;

// Re-export main types
pub use algorithms::bfs::{bfs_tree, unweighted_shortest_paths};
pub use algorithms::dijkstra::{dijkstra, positive_weighted_shortest_paths, ShortestPathConfig};
pub use algorithms::disjoint_set::DisjointSet;
pub use algorithms::mst::{kruskal_mst, prim_mst, MstConfig};
pub use algorithms::selection::VertexSelection;
pub use graph::{Digraph, Graph, GraphConfig};
pub use models::{
    AdjacencyList, Distance, Edge, ShortestPathTree, SpanningTree, VertexId, Weight,
    MAX_WEIGHT,
};

/// Graph error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Vertex id outside `1..=vertex_count`.
    #[error("Invalid vertex {vertex}: graph has vertices 1..={vertex_count}")]
    InvalidVertex { vertex: u32, vertex_count: usize },

    /// Vertex count of zero or beyond the id space.
    #[error("Invalid vertex count: {0}")]
    InvalidVertexCount(usize),

    /// Removal of an edge that is not in the graph.
    #[error("Edge ({from}, {to}) not found")]
    EdgeNotFound { from: u32, to: u32 },

    /// Negative weight inserted into a graph that forbids them.
    #[error("Negative weight {weight} on edge ({from}, {to}) not allowed")]
    NegativeWeightNotAllowed { from: u32, to: u32, weight: Weight },

    /// Weight magnitude above [`MAX_WEIGHT`].
    #[error("Weight {weight} on edge ({from}, {to}) is out of range")]
    WeightOutOfRange { from: u32, to: u32, weight: Weight },

    /// Result buffers sized for a different graph.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
