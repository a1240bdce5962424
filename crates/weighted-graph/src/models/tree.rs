//! Algorithm result types.
//!
//! - [`ShortestPathTree`]: per-vertex distance and parent buffers filled by
//!   the shortest-path algorithms
//! - [`SpanningTree`]: edges selected by a minimum spanning tree run

use std::fmt;

use super::edge::Edge;
use super::vertex::{Distance, VertexId, Weight};

/// Shortest-path tree rooted at the source of the last run.
///
/// Buffers are sized `vertex_count + 1` and indexed by vertex id; slot 0 is
/// unused. A vertex that was not reached reads [`Distance::INFINITY`] with
/// parent [`VertexId::NONE`], and so does every vertex before the first run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: Option<VertexId>,
    dist: Vec<Distance>,
    parent: Vec<VertexId>,
    done: Vec<bool>,
}

impl ShortestPathTree {
    /// Create an empty tree for `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            source: None,
            dist: vec![Distance::INFINITY; vertex_count + 1],
            parent: vec![VertexId::NONE; vertex_count + 1],
            done: vec![false; vertex_count + 1],
        }
    }

    /// Number of vertices covered by the buffers.
    pub fn vertex_count(&self) -> usize {
        self.dist.len() - 1
    }

    /// Source of the last run, if any.
    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    /// Distance to `v`, or `None` if `v` is out of range.
    pub fn distance(&self, v: VertexId) -> Option<Distance> {
        self.in_range(v).then(|| self.dist[v.index()])
    }

    /// Parent of `v` in the tree, or `None` if `v` is out of range.
    pub fn parent(&self, v: VertexId) -> Option<VertexId> {
        self.in_range(v).then(|| self.parent[v.index()])
    }

    /// Check if `v` was reached by the last run.
    pub fn is_reached(&self, v: VertexId) -> bool {
        self.distance(v).is_some_and(|d| d.is_reachable())
    }

    /// Distance buffer, indexed by vertex id (slot 0 unused).
    pub fn distances(&self) -> &[Distance] {
        &self.dist
    }

    /// Parent buffer, indexed by vertex id (slot 0 unused).
    pub fn parents(&self) -> &[VertexId] {
        &self.parent
    }

    /// Vertices on the tree path from the source to `target`, inclusive.
    ///
    /// Returns `None` if `target` is out of range or was not reached.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reached(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = target;

        // Walk back to the root
        while !self.parent[current.index()].is_none() {
            current = self.parent[current.index()];
            path.push(current);
            debug_assert!(path.len() <= self.vertex_count(), "cycle in parent chain");
        }

        path.reverse();
        Some(path)
    }

    /// Render the path to `target` as `1 -> 2(1) -> 3(2)`, each hop
    /// annotated with its distance.
    pub fn format_path(&self, target: VertexId) -> Option<String> {
        let path = self.path_to(target)?;
        let mut hops = path.iter();
        let mut out = hops.next().map(|v| v.to_string()).unwrap_or_default();
        for v in hops {
            out.push_str(&format!(" -> {}({})", v, self.dist[v.index()].get()));
        }
        Some(out)
    }

    fn in_range(&self, v: VertexId) -> bool {
        !v.is_none() && v.index() < self.dist.len()
    }

    /// Clear all buffers and seed `source` with distance zero.
    pub(crate) fn reset(&mut self, source: VertexId) {
        self.dist.fill(Distance::INFINITY);
        self.parent.fill(VertexId::NONE);
        self.done.fill(false);
        self.dist[source.index()] = Distance::ZERO;
        self.source = Some(source);
    }

    pub(crate) fn dist_of(&self, v: VertexId) -> Distance {
        self.dist[v.index()]
    }

    pub(crate) fn set(&mut self, v: VertexId, dist: Distance, parent: VertexId) {
        self.dist[v.index()] = dist;
        self.parent[v.index()] = parent;
    }

    pub(crate) fn is_done(&self, v: VertexId) -> bool {
        self.done[v.index()]
    }

    pub(crate) fn mark_done(&mut self, v: VertexId) {
        self.done[v.index()] = true;
    }
}

impl fmt::Display for ShortestPathTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(22);
        writeln!(f, "{rule}")?;
        writeln!(f, "vertex    dist    path")?;
        writeln!(f, "{rule}")?;
        for v in 1..self.dist.len() {
            let d = self.dist[v];
            let shown = if d.is_reachable() { d.get() } else { -1 };
            writeln!(f, "{:4} : {:6} {:6}", v, shown, self.parent[v].get())?;
        }
        writeln!(f, "{rule}")
    }
}

/// Edges chosen by a minimum spanning tree algorithm, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanningTree {
    edges: Vec<Edge>,
    total_weight: Weight,
}

impl SpanningTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected edges.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Sum of selected edge weights.
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Number of selected edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if no edge was selected.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Check if the tree connects all `vertex_count` vertices.
    pub fn spans(&self, vertex_count: usize) -> bool {
        self.edges.len() + 1 == vertex_count
    }

    pub(crate) fn push(&mut self, edge: Edge) {
        self.total_weight += edge.weight;
        self.edges.push(edge);
    }
}

impl fmt::Display for SpanningTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.edges {
            writeln!(f, "{e}")?;
        }
        writeln!(f)?;
        writeln!(f, "total weight: {}", self.total_weight)
    }
}
