//! Fuzz target for graph mutation and algorithm runs.
//!
//! Applies random edge insertions and removals to a directed and an
//! undirected graph, runs the algorithms in between, and checks the
//! structural and optimality invariants after every step.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use weighted_graph::{
    Digraph, DisjointSet, Edge, Graph, MstConfig, ShortestPathConfig, VertexId, VertexSelection,
};

/// Operations that can be performed on the graphs.
#[derive(Debug, Arbitrary)]
enum GraphOp {
    /// Insert (or re-weight) an edge in both graphs.
    Insert { from: u8, to: u8, weight: u8 },
    /// Remove an edge from both graphs.
    Remove { from: u8, to: u8 },
    /// Run BFS and Dijkstra from a source.
    ShortestPaths { source: u8, heap: bool },
    /// Run Prim and Kruskal.
    SpanningTrees { heap: bool },
}

/// Fuzz input: vertex count and operation sequence.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    vertex_count: u8,
    ops: Vec<GraphOp>,
}

fn selection(heap: bool) -> VertexSelection {
    if heap {
        VertexSelection::BinaryHeap
    } else {
        VertexSelection::LinearScan
    }
}

fuzz_target!(|input: FuzzInput| {
    if input.ops.len() > 200 {
        return;
    }

    let n = input.vertex_count as usize;
    let (mut digraph, mut graph) = match (Digraph::new(n), Graph::new(n)) {
        (Ok(d), Ok(g)) => (d, g),
        _ => {
            assert_eq!(n, 0, "construction may only fail for zero vertices");
            return;
        }
    };

    for op in &input.ops {
        match *op {
            GraphOp::Insert { from, to, weight } => {
                let edge = Edge::new(from as u32, to as u32, weight as i64);
                let in_range = (1..=n).contains(&(from as usize)) && (1..=n).contains(&(to as usize));
                let before = digraph.edge_count();
                let existed = digraph.has_edge(edge.from, edge.to);

                assert_eq!(digraph.insert_edge(edge).is_ok(), in_range);
                assert_eq!(graph.insert_edge(edge).is_ok(), in_range);

                if in_range {
                    let expected = if existed { before } else { before + 1 };
                    assert_eq!(digraph.edge_count(), expected);
                    assert_eq!(digraph.weight_of(edge.from, edge.to), Some(edge.weight));
                    assert_eq!(graph.weight_of(edge.to, edge.from), Some(edge.weight));
                }
            }
            GraphOp::Remove { from, to } => {
                let edge = Edge::new(from as u32, to as u32, 0);
                let present = digraph.has_edge(edge.from, edge.to);
                assert_eq!(digraph.remove_edge(edge).is_ok(), present);
                assert!(!digraph.has_edge(edge.from, edge.to));

                let present = graph.has_edge(edge.from, edge.to);
                assert_eq!(graph.remove_edge(edge).is_ok(), present);
                assert!(!graph.has_edge(edge.to, edge.from));
            }
            GraphOp::ShortestPaths { source, heap } => {
                let source = VertexId(source as u32);
                if digraph.unweighted_shortest_paths(source).is_err() {
                    assert!(source.is_none() || source.index() > n);
                    continue;
                }
                let hops = digraph.shortest_path_tree().clone();

                let config = ShortestPathConfig::new().with_selection(selection(heap));
                digraph
                    .positive_weighted_shortest_paths_with_config(source, &config)
                    .unwrap();
                let tree = digraph.shortest_path_tree();

                for e in digraph.edges() {
                    let du = tree.distance(e.from).unwrap();
                    if du.is_reachable() {
                        assert!(tree.distance(e.to).unwrap() <= du.add_weight(e.weight));
                    }
                }
                for id in 1..=n as u32 {
                    let v = VertexId(id);
                    // Both algorithms reach exactly the same vertices
                    assert_eq!(hops.is_reached(v), tree.is_reached(v));
                    if let Some(path) = tree.path_to(v) {
                        assert_eq!(path.first(), Some(&source));
                        assert_eq!(path.last(), Some(&v));
                    }
                }
            }
            GraphOp::SpanningTrees { heap } => {
                let config = MstConfig::new().with_selection(selection(heap));
                let prim = graph.prim_mst_with_config(&config).unwrap();
                let kruskal = graph.kruskal_mst();

                let mut sets = DisjointSet::new(n);
                for e in kruskal.edges() {
                    assert!(sets.union(e.from, e.to), "kruskal selected a cycle");
                }
                // A spanning forest leaves one tree per component
                assert_eq!(kruskal.len() + sets.num_sets(), n);

                if kruskal.spans(n) {
                    assert!(prim.spans(n));
                    assert_eq!(prim.total_weight(), kruskal.total_weight());
                }
            }
        }
        assert!(graph.adjacency().is_symmetric());
    }
});
