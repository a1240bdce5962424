//! Graph algorithms.
//!
//! This module provides the shortest-path and spanning-tree engines:
//! - [`bfs`]: Unweighted shortest-path tree
//! - [`dijkstra`]: Weighted shortest-path tree (non-negative weights)
//! - [`mst`]: Prim and Kruskal minimum spanning trees
//! - [`disjoint_set`]: Union-find used by Kruskal
//! - [`selection`]: Minimum-distance vertex selection strategies

pub mod bfs;
pub mod dijkstra;
pub mod disjoint_set;
pub mod mst;
pub mod selection;

pub use bfs::{bfs_tree, unweighted_shortest_paths};
pub use dijkstra::{dijkstra, positive_weighted_shortest_paths, ShortestPathConfig};
pub use disjoint_set::DisjointSet;
pub use mst::{kruskal_mst, prim_mst, MstConfig};
pub use selection::VertexSelection;
