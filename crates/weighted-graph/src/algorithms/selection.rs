//! Minimum-distance vertex selection shared by Dijkstra and Prim.
//!
//! Both algorithms repeatedly pick the unfinished vertex with the smallest
//! tentative distance. Two strategies are available:
//!
//! - [`VertexSelection::LinearScan`]: scan every vertex, O(V) per pick and
//!   O(V² + E) per run. The first vertex in id order wins ties.
//! - [`VertexSelection::BinaryHeap`]: lazy-deletion min-heap keyed by
//!   `(distance, vertex)`, O((V + E) log V) per run. Keying on the vertex id
//!   as well reproduces the linear scan's tie-break, so both strategies
//!   finalize vertices in the same order.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::models::{Distance, ShortestPathTree, VertexId};

/// Strategy used to pick the next vertex to finalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VertexSelection {
    /// Scan all vertices on every pick.
    #[default]
    LinearScan,
    /// Pop from a binary heap of tentative distances.
    BinaryHeap,
}

/// Pending vertices for one algorithm run.
pub(crate) enum Frontier {
    Scan,
    Heap(BinaryHeap<Reverse<(Distance, VertexId)>>),
}

impl Frontier {
    pub(crate) fn new(selection: VertexSelection) -> Self {
        match selection {
            VertexSelection::LinearScan => Frontier::Scan,
            VertexSelection::BinaryHeap => Frontier::Heap(BinaryHeap::new()),
        }
    }

    /// Record that `v` now has tentative distance `dist`.
    pub(crate) fn push(&mut self, v: VertexId, dist: Distance) {
        if let Frontier::Heap(heap) = self {
            heap.push(Reverse((dist, v)));
        }
    }

    /// Unfinished vertex with the smallest finite distance, if any.
    pub(crate) fn pop_min(&mut self, tree: &ShortestPathTree) -> Option<VertexId> {
        match self {
            Frontier::Scan => {
                let mut best: Option<(Distance, VertexId)> = None;
                for id in 1..=tree.vertex_count() as u32 {
                    let v = VertexId(id);
                    let d = tree.dist_of(v);
                    if tree.is_done(v) || !d.is_reachable() {
                        continue;
                    }
                    if best.map_or(true, |(min, _)| d < min) {
                        best = Some((d, v));
                    }
                }
                best.map(|(_, v)| v)
            }
            Frontier::Heap(heap) => {
                while let Some(Reverse((d, v))) = heap.pop() {
                    // Skip entries superseded by a later relaxation
                    if !tree.is_done(v) && tree.dist_of(v) == d {
                        return Some(v);
                    }
                }
                None
            }
        }
    }
}
