//! Edge-list adjacency representation.
//!
//! Each vertex owns an ordered list of its outgoing edges:
//! - `table[v]` = edges leaving vertex v, in insertion order
//! - slot 0 is allocated but never used, so vertex ids index directly
//!
//! Lookups scan a single list, so insert and remove are O(degree).

use std::fmt;

use super::edge::Edge;
use super::vertex::{VertexId, MAX_WEIGHT};
use crate::{GraphError, Result};

/// Per-vertex edge lists for a graph with a fixed vertex count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    /// Number of vertices (ids `1..=vertex_count`).
    vertex_count: usize,
    /// Edge lists, length = vertex_count + 1.
    table: Vec<Vec<Edge>>,
}

impl AdjacencyList {
    /// Create an adjacency list with `vertex_count` vertices and no edges.
    ///
    /// Fails with [`GraphError::InvalidVertexCount`] when `vertex_count` is
    /// zero or does not fit the `u32` id space.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count < 1 || vertex_count > u32::MAX as usize {
            return Err(GraphError::InvalidVertexCount(vertex_count));
        }
        Ok(Self {
            vertex_count,
            table: vec![Vec::new(); vertex_count + 1],
        })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Total number of stored adjacency entries.
    pub fn num_entries(&self) -> usize {
        self.table.iter().map(Vec::len).sum()
    }

    /// Check if no edges are stored.
    pub fn is_empty(&self) -> bool {
        self.table.iter().all(Vec::is_empty)
    }

    /// Check that `v` names a vertex of this graph.
    pub fn check_vertex(&self, v: VertexId) -> Result<()> {
        if v.is_none() || v.index() > self.vertex_count {
            return Err(GraphError::InvalidVertex {
                vertex: v.get(),
                vertex_count: self.vertex_count,
            });
        }
        Ok(())
    }

    /// All vertex ids in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (1..=self.vertex_count as u32).map(VertexId)
    }

    /// Number of edges leaving `v` (0 for out-of-range ids).
    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors(v).len()
    }

    /// Edges leaving `v` in insertion order (empty for out-of-range ids).
    pub fn neighbors(&self, v: VertexId) -> &[Edge] {
        match self.table.get(v.index()) {
            Some(list) if !v.is_none() => list,
            _ => &[],
        }
    }

    /// Find the stored edge `from -> to`.
    pub fn find(&self, from: VertexId, to: VertexId) -> Option<&Edge> {
        self.neighbors(from).iter().find(|e| e.to == to)
    }

    /// Check if edge `from -> to` exists.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.find(from, to).is_some()
    }

    /// Iterate over every stored entry, vertex by vertex.
    pub fn entries(&self) -> impl Iterator<Item = &Edge> {
        self.table.iter().flatten()
    }

    /// Insert `edge`, or overwrite the weight of the entry linking the same
    /// nodes.
    ///
    /// Returns `true` when a new entry was appended. Fails with
    /// [`GraphError::WeightOutOfRange`] when `|weight| > MAX_WEIGHT`.
    pub fn upsert(&mut self, edge: Edge) -> Result<bool> {
        self.check_vertex(edge.from)?;
        self.check_vertex(edge.to)?;
        if !(-MAX_WEIGHT..=MAX_WEIGHT).contains(&edge.weight) {
            return Err(GraphError::WeightOutOfRange {
                from: edge.from.get(),
                to: edge.to.get(),
                weight: edge.weight,
            });
        }

        let list = &mut self.table[edge.from.index()];
        match list.iter_mut().find(|e| e.links_same_nodes(&edge)) {
            Some(existing) => {
                existing.weight = edge.weight;
                Ok(false)
            }
            None => {
                list.push(edge);
                Ok(true)
            }
        }
    }

    /// Remove the entry linking the same nodes as `edge`; its weight is
    /// ignored for the lookup.
    ///
    /// Returns the removed entry. Remaining entries keep their order.
    pub fn remove(&mut self, edge: &Edge) -> Result<Edge> {
        self.check_vertex(edge.from)?;
        self.check_vertex(edge.to)?;

        let list = &mut self.table[edge.from.index()];
        let pos = list
            .iter()
            .position(|e| e.links_same_nodes(edge))
            .ok_or(GraphError::EdgeNotFound {
                from: edge.from.get(),
                to: edge.to.get(),
            })?;
        Ok(list.remove(pos))
    }

    /// Check that every entry `u -> v` has a mirror `v -> u` of equal weight.
    pub fn is_symmetric(&self) -> bool {
        self.entries().all(|e| {
            self.find(e.to, e.from)
                .is_some_and(|mirror| mirror.weight == e.weight)
        })
    }
}

impl fmt::Display for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(66);
        writeln!(f, "{rule}")?;
        writeln!(f, "Vertex  adjacency lists")?;
        writeln!(f, "{rule}")?;
        for v in self.vertices() {
            write!(f, "{:4} : ", v.get())?;
            for e in self.neighbors(v) {
                write!(f, "({:2}, {:2}) ", e.to.get(), e.weight)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{rule}")
    }
}
