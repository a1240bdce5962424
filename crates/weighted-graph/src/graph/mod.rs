//! Weighted graphs.
//!
//! - [`Digraph`]: directed graph with shortest-path trees
//! - [`Graph`]: undirected graph with minimum spanning trees
//!
//! Both are simple graphs: inserting an edge between already linked vertices
//! updates its weight instead of adding a parallel edge.

pub mod digraph;
pub mod undirected;

pub use digraph::Digraph;
pub use undirected::Graph;

use crate::models::Edge;
use crate::{GraphError, Result};

/// Graph construction options.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Accept edges with negative weight.
    pub allow_negative_weights: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            allow_negative_weights: true,
        }
    }
}

impl GraphConfig {
    /// Create new configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject negative weights at insertion, for graphs used with Dijkstra.
    pub fn non_negative_weights(mut self) -> Self {
        self.allow_negative_weights = false;
        self
    }

    pub(crate) fn check_edge(&self, edge: &Edge) -> Result<()> {
        if !self.allow_negative_weights && edge.weight < 0 {
            return Err(GraphError::NegativeWeightNotAllowed {
                from: edge.from.get(),
                to: edge.to.get(),
                weight: edge.weight,
            });
        }
        Ok(())
    }
}
