//! Undirected weighted graph with minimum spanning trees.

use std::fmt;

use tracing::trace;

use super::GraphConfig;
use crate::algorithms::{mst, MstConfig};
use crate::models::{AdjacencyList, Edge, SpanningTree, VertexId, Weight};
use crate::Result;

/// Undirected graph on vertices `1..=vertex_count`.
///
/// Every edge `(u, v, w)` is stored as the adjacency entries `u -> v` and
/// `v -> u`, which are always inserted, updated and removed together. A
/// self-loop occupies a single entry. [`edge_count`](Graph::edge_count)
/// counts each undirected edge once.
///
/// # Example
///
/// ```
/// use weighted_graph::{Edge, Graph};
///
/// let g = Graph::from_edges(3, &[
///     Edge::new(1, 2, 1),
///     Edge::new(2, 3, 1),
///     Edge::new(1, 3, 5),
/// ])?;
///
/// assert_eq!(g.prim_mst().total_weight(), 2);
/// assert_eq!(g.kruskal_mst().total_weight(), 2);
/// # Ok::<(), weighted_graph::GraphError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    adj: AdjacencyList,
    n_edges: usize,
    config: GraphConfig,
}

impl Graph {
    /// Create a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Result<Self> {
        Self::with_config(vertex_count, GraphConfig::default())
    }

    /// Create an empty graph with the given configuration.
    pub fn with_config(vertex_count: usize, config: GraphConfig) -> Result<Self> {
        Ok(Self {
            adj: AdjacencyList::new(vertex_count)?,
            n_edges: 0,
            config,
        })
    }

    /// Create a graph with `vertex_count` vertices and the given edges.
    ///
    /// Later duplicates of an edge, in either orientation, overwrite its
    /// weight.
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

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.n_edges
    }

    /// Insert undirected edge `edge`, or update its weight if its endpoints
    /// are already linked.
    pub fn insert_edge(&mut self, edge: Edge) -> Result<()> {
        self.config.check_edge(&edge)?;
        self.adj.check_vertex(edge.from)?;
        self.adj.check_vertex(edge.to)?;

        let inserted = self.adj.upsert(edge)?;
        if edge.from != edge.to {
            let mirrored = self.adj.upsert(edge.reverse())?;
            debug_assert_eq!(inserted, mirrored, "asymmetric adjacency for {edge}");
        }

        if inserted {
            self.n_edges += 1;
            trace!(%edge, "insert edge");
        } else {
            trace!(%edge, "update edge weight");
        }
        Ok(())
    }

    /// Remove undirected edge `edge`, in either orientation; its weight is
    /// ignored.
    pub fn remove_edge(&mut self, edge: Edge) -> Result<()> {
        self.adj.remove(&edge)?;
        if edge.from != edge.to {
            self.adj.remove(&edge.reverse())?;
        }
        self.n_edges -= 1;
        trace!(%edge, "remove edge");
        Ok(())
    }

    /// Edges incident to `v`, each oriented away from `v`.
    pub fn neighbors(&self, v: VertexId) -> &[Edge] {
        self.adj.neighbors(v)
    }

    /// Check if `a` and `b` are linked.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        self.adj.has_edge(a, b)
    }

    /// Weight of the edge linking `a` and `b`, if present.
    pub fn weight_of(&self, a: VertexId, b: VertexId) -> Option<Weight> {
        self.adj.find(a, b).map(|e| e.weight)
    }

    /// Each undirected edge once, oriented with `from <= to`.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.adj.entries().filter(|e| e.from <= e.to)
    }

    /// Underlying adjacency lists.
    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adj
    }

    /// Prim's minimum spanning tree grown from vertex 1.
    ///
    /// On a disconnected graph only vertex 1's component is covered.
    pub fn prim_mst(&self) -> SpanningTree {
        let config = MstConfig::default();
        mst::prim_from(&self.adj, config.root, config.selection)
    }

    /// Prim's algorithm with an explicit root and selection strategy.
    pub fn prim_mst_with_config(&self, config: &MstConfig) -> Result<SpanningTree> {
        mst::prim_mst(&self.adj, config)
    }

    /// Kruskal's minimum spanning tree, or spanning forest when the graph is
    /// disconnected.
    pub fn kruskal_mst(&self) -> SpanningTree {
        mst::kruskal_mst(&self.adj)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.adj, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;

    fn v(id: u32) -> VertexId {
        VertexId(id)
    }

    #[test]
    fn test_insert_is_symmetric() {
        let mut g = Graph::new(3).unwrap();
        g.insert_edge(Edge::new(1, 2, 4)).unwrap();

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.adjacency().num_entries(), 2);
        assert_eq!(g.weight_of(v(1), v(2)), Some(4));
        assert_eq!(g.weight_of(v(2), v(1)), Some(4));
        assert!(g.adjacency().is_symmetric());
    }

    #[test]
    fn test_reverse_insert_updates_both_entries() {
        let mut g = Graph::new(2).unwrap();
        g.insert_edge(Edge::new(1, 2, 4)).unwrap();
        g.insert_edge(Edge::new(2, 1, 9)).unwrap();

        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight_of(v(1), v(2)), Some(9));
        assert_eq!(g.weight_of(v(2), v(1)), Some(9));
    }

    #[test]
    fn test_remove_either_orientation() {
        let mut g = Graph::from_edges(3, &[Edge::new(1, 2, 1), Edge::new(2, 3, 1)]).unwrap();
        g.remove_edge(Edge::new(3, 2, 0)).unwrap();

        assert_eq!(g.edge_count(), 1);
        assert!(!g.has_edge(v(2), v(3)));
        assert!(!g.has_edge(v(3), v(2)));
        assert!(g.adjacency().is_symmetric());
        assert!(matches!(
            g.remove_edge(Edge::new(2, 3, 1)),
            Err(GraphError::EdgeNotFound { from: 2, to: 3 })
        ));
    }

    #[test]
    fn test_self_loop() {
        let mut g = Graph::new(2).unwrap();
        g.insert_edge(Edge::new(1, 1, 3)).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.adjacency().num_entries(), 1);

        g.remove_edge(Edge::new(1, 1, 0)).unwrap();
        assert_eq!(g.edge_count(), 0);
        assert!(g.adjacency().is_empty());
    }

    #[test]
    fn test_invalid_insert_leaves_graph_untouched() {
        let mut g = Graph::new(2).unwrap();
        assert!(matches!(
            g.insert_edge(Edge::new(1, 5, 1)),
            Err(GraphError::InvalidVertex { vertex: 5, .. })
        ));
        assert!(g.adjacency().is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn test_edges_yields_each_once() {
        let g = Graph::from_edges(
            3,
            &[Edge::new(2, 1, 1), Edge::new(3, 2, 2), Edge::new(3, 3, 7)],
        )
        .unwrap();
        let mut edges: Vec<_> = g.edges().copied().collect();
        edges.sort();
        assert_eq!(
            edges,
            vec![Edge::new(1, 2, 1), Edge::new(2, 3, 2), Edge::new(3, 3, 7)]
        );
    }

    #[test]
    fn test_mst_triangle() {
        let g = Graph::from_edges(
            3,
            &[Edge::new(1, 2, 1), Edge::new(2, 3, 1), Edge::new(1, 3, 5)],
        )
        .unwrap();

        let prim = g.prim_mst();
        let kruskal = g.kruskal_mst();
        assert_eq!(prim.edges(), &[Edge::new(1, 2, 1), Edge::new(2, 3, 1)]);
        assert_eq!(kruskal.edges(), &[Edge::new(1, 2, 1), Edge::new(2, 3, 1)]);
        assert_eq!(prim.total_weight(), 2);
        assert_eq!(kruskal.total_weight(), 2);
    }

    #[test]
    fn test_prim_with_config() {
        let g = Graph::from_edges(2, &[Edge::new(1, 2, 3)]).unwrap();
        let mst = g
            .prim_mst_with_config(&MstConfig::new().with_root(v(2)))
            .unwrap();
        assert_eq!(mst.edges(), &[Edge::new(2, 1, 3)]);
        assert!(g
            .prim_mst_with_config(&MstConfig::new().with_root(v(3)))
            .is_err());
    }

    #[test]
    fn test_single_vertex_mst() {
        let g = Graph::new(1).unwrap();
        assert!(g.prim_mst().is_empty());
        assert_eq!(g.kruskal_mst().total_weight(), 0);
    }
}
