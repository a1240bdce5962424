//! Breadth-first search shortest-path tree.
//!
//! BFS computes unweighted (hop count) distances from a source vertex to all
//! reachable vertices, treating every edge as weight 1.

use std::collections::VecDeque;

use tracing::debug;

use crate::models::{AdjacencyList, ShortestPathTree, VertexId};
use crate::{GraphError, Result};

/// Unweighted single-source shortest paths.
///
/// Uses a queue-based approach with O(V + E) complexity. Every vertex is
/// finalized on first discovery; later edges into it are ignored, so among
/// equally distant candidates the parent is the one whose edge was inserted
/// first at the earliest-dequeued vertex.
///
/// # Arguments
///
/// * `adj` - Adjacency lists to traverse
/// * `source` - Root of the tree
/// * `tree` - Buffers to fill; they are reset before the traversal
pub fn unweighted_shortest_paths(
    adj: &AdjacencyList,
    source: VertexId,
    tree: &mut ShortestPathTree,
) -> Result<()> {
    adj.check_vertex(source)?;
    if tree.vertex_count() != adj.vertex_count() {
        return Err(GraphError::DimensionMismatch {
            expected: adj.vertex_count(),
            actual: tree.vertex_count(),
        });
    }

    tree.reset(source);
    let mut queue = VecDeque::from([source]);
    let mut reached = 1usize;

    while let Some(v) = queue.pop_front() {
        let current_dist = tree.dist_of(v);

        for edge in adj.neighbors(v) {
            if !tree.dist_of(edge.to).is_reachable() {
                tree.set(edge.to, current_dist.increment(), v);
                queue.push_back(edge.to);
                reached += 1;
            }
        }
    }

    debug!(source = source.get(), reached, "unweighted shortest paths complete");
    Ok(())
}

/// Unweighted shortest paths into a freshly allocated tree.
pub fn bfs_tree(adj: &AdjacencyList, source: VertexId) -> Result<ShortestPathTree> {
    let mut tree = ShortestPathTree::new(adj.vertex_count());
    unweighted_shortest_paths(adj, source, &mut tree)?;
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Distance, Edge};

    fn v(id: u32) -> VertexId {
        VertexId(id)
    }

    fn make_adj(n: usize, edges: &[(u32, u32)]) -> AdjacencyList {
        let mut adj = AdjacencyList::new(n).unwrap();
        for &(from, to) in edges {
            adj.upsert(Edge::new(from, to, 1)).unwrap();
        }
        adj
    }

    fn make_line(n: u32) -> AdjacencyList {
        // 1 -> 2 -> ... -> n
        let edges: Vec<_> = (1..n).map(|i| (i, i + 1)).collect();
        make_adj(n as usize, &edges)
    }

    #[test]
    fn test_bfs_line_graph() {
        let tree = bfs_tree(&make_line(5), v(1)).unwrap();

        for i in 1..=5 {
            assert_eq!(tree.distance(v(i)), Some(Distance::new(i as i64 - 1)));
        }
        assert_eq!(tree.parent(v(1)), Some(VertexId::NONE));
        assert_eq!(tree.parent(v(5)), Some(v(4)));
    }

    #[test]
    fn test_bfs_star_graph() {
        let edges: Vec<_> = (2..=5).map(|i| (1, i)).collect();
        let tree = bfs_tree(&make_adj(5, &edges), v(1)).unwrap();

        for i in 2..=5 {
            assert_eq!(tree.distance(v(i)), Some(Distance::new(1)));
            assert_eq!(tree.parent(v(i)), Some(v(1)));
        }
    }

    #[test]
    fn test_bfs_ignores_weights() {
        let mut adj = AdjacencyList::new(3).unwrap();
        adj.upsert(Edge::new(1, 2, 100)).unwrap();
        adj.upsert(Edge::new(2, 3, 100)).unwrap();
        adj.upsert(Edge::new(1, 3, 500)).unwrap();

        let tree = bfs_tree(&adj, v(1)).unwrap();
        assert_eq!(tree.distance(v(3)), Some(Distance::new(1)));
        assert_eq!(tree.parent(v(3)), Some(v(1)));
    }

    #[test]
    fn test_bfs_first_discovery_wins() {
        // 1 -> 3 -> 4 and 1 -> 2 -> 4; 3 is inserted first so it claims 4
        let adj = make_adj(4, &[(1, 3), (1, 2), (2, 4), (3, 4)]);
        let tree = bfs_tree(&adj, v(1)).unwrap();

        assert_eq!(tree.distance(v(4)), Some(Distance::new(2)));
        assert_eq!(tree.parent(v(4)), Some(v(3)));
    }

    #[test]
    fn test_bfs_unreachable() {
        // 1 -> 2, 3 -> 4, and 2 cannot reach 1
        let adj = make_adj(4, &[(1, 2), (3, 4), (4, 1)]);
        let tree = bfs_tree(&adj, v(1)).unwrap();

        assert_eq!(tree.distance(v(2)), Some(Distance::new(1)));
        assert_eq!(tree.distance(v(3)), Some(Distance::INFINITY));
        assert_eq!(tree.parent(v(3)), Some(VertexId::NONE));
        assert_eq!(tree.distance(v(4)), Some(Distance::INFINITY));
    }

    #[test]
    fn test_bfs_cycle_back_to_source() {
        let adj = make_adj(3, &[(1, 2), (2, 3), (3, 1)]);
        let tree = bfs_tree(&adj, v(1)).unwrap();

        assert_eq!(tree.distance(v(1)), Some(Distance::ZERO));
        assert_eq!(tree.parent(v(1)), Some(VertexId::NONE));
        assert_eq!(tree.path_to(v(3)), Some(vec![v(1), v(2), v(3)]));
    }

    #[test]
    fn test_invalid_source_error() {
        let adj = make_line(3);
        assert!(matches!(
            bfs_tree(&adj, v(100)),
            Err(GraphError::InvalidVertex { vertex: 100, .. })
        ));
        assert!(matches!(
            bfs_tree(&adj, VertexId::NONE),
            Err(GraphError::InvalidVertex { vertex: 0, .. })
        ));
    }

    #[test]
    fn test_tree_size_mismatch() {
        let adj = make_line(3);
        let mut tree = ShortestPathTree::new(5);
        let result = unweighted_shortest_paths(&adj, v(1), &mut tree);
        assert!(matches!(
            result,
            Err(GraphError::DimensionMismatch { expected: 3, actual: 5 })
        ));
    }
}
