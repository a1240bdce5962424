//! Graph data models.
//!
//! This module provides the core data structures for representing graphs:
//! - [`AdjacencyList`]: Per-vertex edge lists
//! - [`Edge`]: Weighted vertex-to-vertex connection
//! - [`ShortestPathTree`], [`SpanningTree`]: Algorithm results
//! - [`VertexId`], [`Distance`], [`Weight`]: Vertex and path-length types

pub mod adjacency;
pub mod edge;
pub mod tree;
pub mod vertex;

pub use adjacency::AdjacencyList;
pub use edge::Edge;
pub use tree::{ShortestPathTree, SpanningTree};
pub use vertex::{Distance, VertexId, Weight, MAX_WEIGHT};
