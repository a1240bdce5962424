//! Weighted edge type.

use std::cmp::Ordering;
use std::fmt;

use super::vertex::{VertexId, Weight};

/// A weighted connection between two vertices.
///
/// In a [`Digraph`](crate::Digraph) the edge points from `from` to `to`. In an
/// undirected [`Graph`](crate::Graph) the same value is stored once per
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    /// Tail vertex.
    pub from: VertexId,
    /// Head vertex.
    pub to: VertexId,
    /// Edge weight.
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub const fn new(from: u32, to: u32, weight: Weight) -> Self {
        Self {
            from: VertexId(from),
            to: VertexId(to),
            weight,
        }
    }

    /// Create a new edge from typed endpoints.
    pub const fn between(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// The same edge pointing the other way.
    pub const fn reverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    /// True if both edges connect the same ordered pair of vertices.
    ///
    /// Weights are not compared.
    pub fn links_same_nodes(&self, other: &Edge) -> bool {
        self.from == other.from && self.to == other.to
    }
}

/// Edges order by weight first, then by endpoints, so a heap of edges yields
/// the lightest edge and equal weights resolve deterministically.
impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:2}, {:2}, {:2})", self.from, self.to, self.weight)
    }
}
