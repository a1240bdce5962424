//! Vertex types for graph algorithms.
//!
//! This module provides strongly-typed wrappers for graph concepts:
//! - [`VertexId`]: Identifier for graph vertices, numbered from 1
//! - [`Distance`]: Path length from a source, with an infinity sentinel
//! - [`Weight`]: Integer edge weight

/// Integer edge weight.
pub type Weight = i64;

/// Largest weight magnitude an edge may carry.
///
/// With at most `u32::MAX` vertices, any path or spanning tree built from
/// weights in `-MAX_WEIGHT..=MAX_WEIGHT` sums to a value strictly inside the
/// `i64` range, so it never reaches [`Distance::INFINITY`] or overflows.
pub const MAX_WEIGHT: Weight = i32::MAX as Weight;

/// Vertex identifier.
///
/// Vertices are numbered `1..=vertex_count`. Id 0 is never a real vertex and
/// is reserved for [`VertexId::NONE`], which marks "no parent" in path-tracking
/// buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct VertexId(pub u32);

impl VertexId {
    /// Sentinel for "no parent" / "unset".
    pub const NONE: VertexId = VertexId(0);

    /// Create a new vertex ID.
    pub const fn new(id: u32) -> Self {
        VertexId(id)
    }

    /// Check if this is the [`VertexId::NONE`] sentinel.
    pub const fn is_none(&self) -> bool {
        self.0 == 0
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Index into a per-vertex buffer sized `vertex_count + 1`.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for VertexId {
    fn from(id: u32) -> Self {
        VertexId(id)
    }
}

impl From<VertexId> for usize {
    fn from(id: VertexId) -> Self {
        id.0 as usize
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Distance from the source of a shortest-path run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Distance(pub i64);

impl Distance {
    /// Infinity (unreached).
    pub const INFINITY: Distance = Distance(i64::MAX);

    /// Zero distance (source vertex).
    pub const ZERO: Distance = Distance(0);

    /// Create a new distance.
    pub const fn new(d: i64) -> Self {
        Distance(d)
    }

    /// Check if the vertex was reached.
    pub const fn is_reachable(&self) -> bool {
        self.0 != i64::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Increment distance by 1, saturating at infinity.
    pub const fn increment(&self) -> Self {
        self.add_weight(1)
    }

    /// Extend the distance by an edge weight, saturating at infinity.
    pub const fn add_weight(&self, weight: Weight) -> Self {
        if self.0 == i64::MAX {
            Distance::INFINITY
        } else {
            Distance(self.0.saturating_add(weight))
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::INFINITY
    }
}

impl From<i64> for Distance {
    fn from(d: i64) -> Self {
        Distance(d)
    }
}
