//! Seeded random graph generators shared by the integration tests.

#![allow(dead_code)]

use rand::prelude::*;
use rand::rngs::SmallRng;
use weighted_graph::{Edge, Weight};

/// Random edge list on `1..=n` with roughly `density * n * (n - 1)` entries.
pub fn random_edges(rng: &mut SmallRng, n: u32, density: f64, max_weight: Weight) -> Vec<Edge> {
    let mut edges = Vec::new();
    for from in 1..=n {
        for to in 1..=n {
            if from != to && rng.gen_bool(density) {
                edges.push(Edge::new(from, to, rng.gen_range(0..=max_weight)));
            }
        }
    }
    edges
}

/// Random connected undirected edge list: a random spanning path plus extra
/// random edges.
pub fn random_connected_edges(
    rng: &mut SmallRng,
    n: u32,
    extra: usize,
    max_weight: Weight,
) -> Vec<Edge> {
    let mut order: Vec<u32> = (1..=n).collect();
    order.shuffle(rng);

    let mut edges: Vec<Edge> = order
        .windows(2)
        .map(|w| Edge::new(w[0], w[1], rng.gen_range(1..=max_weight)))
        .collect();

    for _ in 0..extra {
        let a = rng.gen_range(1..=n);
        let b = rng.gen_range(1..=n);
        if a != b {
            edges.push(Edge::new(a, b, rng.gen_range(1..=max_weight)));
        }
    }
    edges
}

/// Deterministic generator for a test case.
pub fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
