//! Dijkstra's shortest-path algorithm for non-negative edge weights.
//!
//! Label-setting: each round finalizes the unfinished vertex with the smallest
//! tentative distance and relaxes its outgoing edges. The result is undefined
//! when an edge weight is negative; build the graph with
//! [`GraphConfig::non_negative_weights`](crate::GraphConfig::non_negative_weights)
//! to reject such edges at insertion.

use tracing::{debug, trace};

use super::selection::{Frontier, VertexSelection};
use crate::models::{AdjacencyList, ShortestPathTree, VertexId};
use crate::{GraphError, Result};

/// Dijkstra configuration.
#[derive(Debug, Clone, Default)]
pub struct ShortestPathConfig {
    /// How the next vertex to finalize is picked.
    pub selection: VertexSelection,
}

impl ShortestPathConfig {
    /// Create new configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vertex selection strategy.
    pub fn with_selection(mut self, selection: VertexSelection) -> Self {
        self.selection = selection;
        self
    }
}

/// Weighted single-source shortest paths.
///
/// # Arguments
///
/// * `adj` - Adjacency lists with non-negative weights
/// * `source` - Root of the tree
/// * `tree` - Buffers to fill; they are reset before the run
/// * `config` - Vertex selection strategy
pub fn positive_weighted_shortest_paths(
    adj: &AdjacencyList,
    source: VertexId,
    tree: &mut ShortestPathTree,
    config: &ShortestPathConfig,
) -> Result<()> {
    adj.check_vertex(source)?;
    if tree.vertex_count() != adj.vertex_count() {
        return Err(GraphError::DimensionMismatch {
            expected: adj.vertex_count(),
            actual: tree.vertex_count(),
        });
    }

    tree.reset(source);
    let mut frontier = Frontier::new(config.selection);
    frontier.push(source, tree.dist_of(source));
    let mut settled = 0usize;

    while let Some(v) = frontier.pop_min(tree) {
        tree.mark_done(v);
        settled += 1;
        let current_dist = tree.dist_of(v);

        for edge in adj.neighbors(v) {
            let u = edge.to;
            if tree.is_done(u) {
                continue;
            }
            let candidate = current_dist.add_weight(edge.weight);
            if tree.dist_of(u) > candidate {
                trace!(from = v.get(), to = u.get(), dist = candidate.get(), "relax");
                tree.set(u, candidate, v);
                frontier.push(u, candidate);
            }
        }
    }

    debug!(
        source = source.get(),
        settled,
        selection = ?config.selection,
        "weighted shortest paths complete"
    );
    Ok(())
}

/// Dijkstra with the default configuration into a freshly allocated tree.
pub fn dijkstra(adj: &AdjacencyList, source: VertexId) -> Result<ShortestPathTree> {
    let mut tree = ShortestPathTree::new(adj.vertex_count());
    positive_weighted_shortest_paths(adj, source, &mut tree, &ShortestPathConfig::default())?;
    Ok(tree)
}
