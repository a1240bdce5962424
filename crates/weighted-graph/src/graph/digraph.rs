//! Directed weighted graph with shortest-path trees.

use std::fmt;

use tracing::trace;

use super::GraphConfig;
use crate::algorithms::{bfs, dijkstra, ShortestPathConfig};
use crate::models::{AdjacencyList, Distance, Edge, ShortestPathTree, VertexId, Weight};
use crate::Result;

/// Directed graph on vertices `1..=vertex_count`.
///
/// The graph owns the [`ShortestPathTree`] filled by its shortest-path runs.
/// Each run resets and overwrites it.
///
/// # Example
///
/// ```
/// use weighted_graph::{Digraph, Distance, Edge, VertexId};
///
/// let mut g = Digraph::from_edges(3, &[
///     Edge::new(1, 2, 1),
///     Edge::new(2, 3, 1),
///     Edge::new(1, 3, 5),
/// ])?;
/// g.positive_weighted_shortest_paths(VertexId(1))?;
///
/// assert_eq!(g.distance_to(VertexId(3))?, Distance::new(2));
/// assert_eq!(g.parent_of(VertexId(3))?, VertexId(2));
/// # Ok::<(), weighted_graph::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Digraph {
    adj: AdjacencyList,
    n_edges: usize,
    config: GraphConfig,
    tree: ShortestPathTree,
}

impl Digraph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Self::with_config(vertex_count, GraphConfig::default())
    }

    /// Create an empty graph with the given configuration.
    pub fn with_config(vertex_count: usize, config: GraphConfig) -> Result<Self> {
        let adj = AdjacencyList::new(vertex_count)?;
        Ok(Self {
            adj,
            n_edges: 0,
            config,
            tree: ShortestPathTree::new(vertex_count),
        })
    }

    /// Create a graph with `vertex_count` vertices and the given edges.
    ///
    /// Later duplicates of an edge overwrite its weight.
    pub fn from_edges(vertex_count: usize, edges: &[Edge]) -> Result<Self> {
        let mut graph = Self::new(vertex_count)?;
        for &edge in edges {
            graph.insert_edge(edge)?;
        }
        Ok(graph)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.vertex_count()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    /// Insert directed edge `edge`, or update its weight if `from -> to` is
    /// already present.
    pub fn insert_edge(&mut self, edge: Edge) -> Result<()> {
        self.config.check_edge(&edge)?;
        if self.adj.upsert(edge)? {
            self.n_edges += 1;
            trace!(%edge, "insert edge");
        } else {
            trace!(%edge, "update edge weight");
        }
        Ok(())
    }

    /// Remove directed edge `from -> to`; the weight of `edge` is ignored.
    pub fn remove_edge(&mut self, edge: Edge) -> Result<()> {
        self.adj.remove(&edge)?;
        self.n_edges -= 1;
        trace!(%edge, "remove edge");
        Ok(())
    }

    /// Edges leaving `v`, in insertion order.
    pub fn neighbors(&self, v: VertexId) -> &[Edge] {
        self.adj.neighbors(v)
    }

    /// Check if edge `from -> to` exists.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adj.has_edge(from, to)
    }

    /// Weight of edge `from -> to`, if present.
    pub fn weight_of(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.adj.find(from, to).map(|e| e.weight)
    }

    /// All edges, grouped by tail vertex.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adj.entries()
    }

    /// Underlying adjacency lists.
    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adj
    }

    /// Build the unweighted (hop count) shortest-path tree from `source`.
    pub fn unweighted_shortest_paths(&mut self, source: VertexId) -> Result<()> {
        bfs::unweighted_shortest_paths(&self.adj, source, &mut self.tree)
    }

    /// Build the weighted shortest-path tree from `source` with Dijkstra's
    /// algorithm.
    ///
    /// All edge weights must be non-negative; the result is undefined
    /// otherwise.
    pub fn positive_weighted_shortest_paths(&mut self, source: VertexId) -> Result<()> {
        self.positive_weighted_shortest_paths_with_config(source, &ShortestPathConfig::default())
    }

    /// Dijkstra with an explicit configuration.
    pub fn positive_weighted_shortest_paths_with_config(
        &mut self,
        source: VertexId,
        config: &ShortestPathConfig,
    ) -> Result<()> {
        dijkstra::positive_weighted_shortest_paths(&self.adj, source, &mut self.tree, config)
    }

    /// Distance to `v` from the source of the last run.
    pub fn distance_to(&self, v: VertexId) -> Result<Distance> {
        self.adj.check_vertex(v)?;
        Ok(self.tree.distances()[v.index()])
    }

    /// Parent of `v` in the last shortest-path tree.
    pub fn parent_of(&self, v: VertexId) -> Result<VertexId> {
        self.adj.check_vertex(v)?;
        Ok(self.tree.parents()[v.index()])
    }

    /// Vertices on the last tree's path to `v`, source first.
    ///
    /// `Ok(None)` if `v` was not reached.
    pub fn path_to(&self, v: VertexId) -> Result<Option<Vec<VertexId>>> {
        self.adj.check_vertex(v)?;
        Ok(self.tree.path_to(v))
    }

    /// Result buffers of the last shortest-path run.
    pub fn shortest_path_tree(&self) -> &ShortestPathTree {
        &self.tree
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.adj, f)
    }
}
