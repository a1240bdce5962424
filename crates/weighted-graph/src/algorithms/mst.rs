//! Minimum spanning tree algorithms.
//!
//! Both operate on symmetric adjacency lists (every edge stored in both
//! directions):
//!
//! - Prim's algorithm (greedy vertex growing from a root)
//! - Kruskal's algorithm (greedy edge selection with [`DisjointSet`] cycle
//!   rejection)
//!
//! On a disconnected graph Prim covers only the root's component, while
//! Kruskal returns a minimum spanning forest.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, trace};

use super::disjoint_set::DisjointSet;
use super::selection::{Frontier, VertexSelection};
use crate::models::{AdjacencyList, Distance, Edge, ShortestPathTree, SpanningTree, VertexId};
use crate::Result;

/// Prim configuration.
#[derive(Debug, Clone)]
pub struct MstConfig {
    /// Vertex the tree is grown from.
    pub root: VertexId,
    /// How the next vertex to attach is picked.
    pub selection: VertexSelection,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            root: VertexId(1),
            selection: VertexSelection::default(),
        }
    }
}

impl MstConfig {
    /// Create new configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root vertex.
    pub fn with_root(mut self, root: VertexId) -> Self {
        self.root = root;
        self
    }

    /// Set the vertex selection strategy.
    pub fn with_selection(mut self, selection: VertexSelection) -> Self {
        self.selection = selection;
        self
    }
}

/// Prim's minimum spanning tree.
///
/// Edges are returned in the order vertices join the tree, each as
/// `(parent, vertex, weight)`.
pub fn prim_mst(adj: &AdjacencyList, config: &MstConfig) -> Result<SpanningTree> {
    adj.check_vertex(config.root)?;
    Ok(prim_from(adj, config.root, config.selection))
}

pub(crate) fn prim_from(
    adj: &AdjacencyList,
    root: VertexId,
    selection: VertexSelection,
) -> SpanningTree {
    debug_assert!(adj.check_vertex(root).is_ok());

    // dist[v] holds the lightest known edge weight connecting v to the tree
    let mut keys = ShortestPathTree::new(adj.vertex_count());
    keys.reset(root);
    let mut frontier = Frontier::new(selection);
    frontier.push(root, Distance::ZERO);
    let mut mst = SpanningTree::new();

    while let Some(v) = frontier.pop_min(&keys) {
        keys.mark_done(v);
        if v != root {
            let edge = Edge::between(
                keys.parents()[v.index()],
                v,
                keys.dist_of(v).get(),
            );
            trace!(%edge, "prim attach");
            mst.push(edge);
        }

        for edge in adj.neighbors(v) {
            let u = edge.to;
            let weight = Distance::new(edge.weight);
            if !keys.is_done(u) && weight < keys.dist_of(u) {
                keys.set(u, weight, v);
                frontier.push(u, weight);
            }
        }
    }

    debug!(
        root = root.get(),
        edges = mst.len(),
        total_weight = mst.total_weight(),
        "prim complete"
    );
    mst
}

/// Kruskal's minimum spanning tree (forest on disconnected graphs).
///
/// Each undirected edge is considered once, lightest first; ties resolve by
/// endpoint ids. Edges are returned in acceptance order with `from < to`.
/// Self-loops never join the tree.
pub fn kruskal_mst(adj: &AdjacencyList) -> SpanningTree {
    let vertex_count = adj.vertex_count();
    let mut heap: BinaryHeap<Reverse<Edge>> = adj
        .entries()
        .filter(|e| e.from < e.to)
        .copied()
        .map(Reverse)
        .collect();

    let mut sets = DisjointSet::new(vertex_count);
    let mut mst = SpanningTree::new();
    let target = vertex_count.saturating_sub(1);

    while mst.len() < target {
        let Some(Reverse(edge)) = heap.pop() else {
            debug!(
                accepted = mst.len(),
                components = sets.num_sets(),
                "edge supply exhausted, graph is disconnected"
            );
            break;
        };

        let root_a = sets.find(edge.from);
        let root_b = sets.find(edge.to);
        if root_a != root_b {
            sets.join(root_a, root_b);
            trace!(%edge, "kruskal accept");
            mst.push(edge);
        }
    }

    debug!(
        edges = mst.len(),
        total_weight = mst.total_weight(),
        "kruskal complete"
    );
    mst
}
