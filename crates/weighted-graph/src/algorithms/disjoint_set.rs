//! Disjoint set (union-find) over vertex ids.
//!
//! Tracks a partition of the vertices `1..=vertex_count` into components.
//! Supports:
//! - `find(v)`: Find representative of v's set
//! - `join(a, b)`: Merge two sets given their representatives
//!
//! Path halving plus union by rank keep both operations near O(1) amortized.

use std::cmp::Ordering;

use crate::models::VertexId;

/// Union-find over `1..=vertex_count`.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    /// Parent pointers (parent[v] = parent of v, or v if root). Slot 0 unused.
    parent: Vec<u32>,
    /// Rank (tree height upper bound) for union by rank.
    rank: Vec<u32>,
    /// Number of disjoint sets.
    num_sets: usize,
}

impl DisjointSet {
    /// Create `vertex_count` singleton sets, one per vertex.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            parent: (0..=vertex_count as u32).collect(),
            rank: vec![0; vertex_count + 1],
            num_sets: vertex_count,
        }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Representative of v's set.
    ///
    /// Compresses by path halving: each visited vertex is re-pointed at its
    /// grandparent, so repeated lookups flatten the tree.
    pub fn find(&mut self, v: VertexId) -> VertexId {
        debug_assert!(
            !v.is_none() && v.index() < self.parent.len(),
            "vertex {v} out of range"
        );
        let mut current = v.index();
        loop {
            let up = self.parent[current] as usize;
            if up == current {
                return VertexId(current as u32);
            }
            let grandparent = self.parent[up];
            self.parent[current] = grandparent;
            current = grandparent as usize;
        }
    }

    /// Merge the sets whose representatives are `root_a` and `root_b`.
    ///
    /// Both arguments must already be roots, as returned by [`find`]. Passing
    /// any other vertex corrupts the partition; this is only checked in debug
    /// builds. Joining a root with itself is a no-op.
    ///
    /// [`find`]: DisjointSet::find
    pub fn join(&mut self, root_a: VertexId, root_b: VertexId) {
        debug_assert_eq!(self.parent[root_a.index()], root_a.0, "{root_a} is not a root");
        debug_assert_eq!(self.parent[root_b.index()], root_b.0, "{root_b} is not a root");

        if root_a == root_b {
            return;
        }

        // The shallower tree hangs below the deeper one; on a tie `root_a`
        // stays the representative and grows by one level.
        let (upper, lower) = match self.rank[root_a.index()].cmp(&self.rank[root_b.index()]) {
            Ordering::Less => (root_b, root_a),
            Ordering::Greater => (root_a, root_b),
            Ordering::Equal => {
                self.rank[root_a.index()] += 1;
                (root_a, root_b)
            }
        };
        self.parent[lower.index()] = upper.0;
        self.num_sets -= 1;
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns true if a merge occurred.
    pub fn union(&mut self, a: VertexId, b: VertexId) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        self.join(root_a, root_b);
        true
    }

    /// Check if two vertices are in the same set.
    pub fn connected(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(id: u32) -> VertexId {
        VertexId(id)
    }

    #[test]
    fn test_singleton_sets() {
        let mut ds = DisjointSet::new(5);
        assert_eq!(ds.len(), 5);
        assert_eq!(ds.num_sets(), 5);

        for i in 1..=5 {
            assert_eq!(ds.find(v(i)), v(i));
        }
    }

    #[test]
    fn test_join_roots() {
        let mut ds = DisjointSet::new(4);

        let (a, b) = (ds.find(v(1)), ds.find(v(2)));
        ds.join(a, b);
        assert_eq!(ds.num_sets(), 3);
        assert!(ds.connected(v(1), v(2)));
        assert!(!ds.connected(v(1), v(3)));

        let (a, b) = (ds.find(v(3)), ds.find(v(2)));
        ds.join(a, b);
        assert_eq!(ds.num_sets(), 2);
        assert!(ds.connected(v(3), v(1)));
    }

    #[test]
    fn test_join_same_root_is_noop() {
        let mut ds = DisjointSet::new(3);
        let root = ds.find(v(2));
        ds.join(root, root);
        assert_eq!(ds.num_sets(), 3);
    }

    #[test]
    fn test_union_reports_merge() {
        let mut ds = DisjointSet::new(3);

        assert!(ds.union(v(1), v(2)));
        assert!(ds.union(v(2), v(3)));
        assert!(!ds.union(v(1), v(3)));
        assert_eq!(ds.num_sets(), 1);
    }

    #[test]
    fn test_path_compression() {
        let mut ds = DisjointSet::new(10);

        for i in 1..10 {
            ds.union(v(i), v(i + 1));
        }

        let root = ds.find(v(10));
        for i in 1..=10 {
            assert_eq!(ds.find(v(i)), root);
        }
    }

    #[test]
    fn test_find_halves_long_paths() {
        let mut ds = DisjointSet::new(8);
        // Build the chain 8 -> 7 -> ... -> 1 directly
        for i in 2..=8u32 {
            ds.parent[i as usize] = i - 1;
        }

        assert_eq!(ds.find(v(8)), v(1));
        // Every other vertex on the path now skips a level
        assert_eq!(ds.parent[8], 6);
        assert_eq!(ds.parent[6], 4);
        assert_eq!(ds.parent[4], 2);
        assert_eq!(ds.find(v(8)), v(1));
        assert!(ds.parent[8] < 6);
    }

    #[test]
    fn test_rank_keeps_deeper_root() {
        let mut ds = DisjointSet::new(4);
        ds.union(v(1), v(2));
        let deep = ds.find(v(1));

        let shallow = ds.find(v(3));
        ds.join(shallow, deep);
        assert_eq!(ds.find(v(3)), deep);
        assert_eq!(ds.rank[deep.index()], 1);
    }

    #[test]
    fn test_empty_disjoint_set() {
        let ds = DisjointSet::new(0);
        assert!(ds.is_empty());
        assert_eq!(ds.num_sets(), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "is not a root")]
    fn test_join_non_root_panics_in_debug() {
        let mut ds = DisjointSet::new(3);
        ds.union(v(1), v(2));
        let child = if ds.find(v(1)) == v(1) { v(2) } else { v(1) };
        ds.join(child, v(3));
    }
}
