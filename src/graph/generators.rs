use crate::graph::{AdjacencyGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::ops::Range;

/// Generates a random directed graph with roughly `edge_factor * n` edges
/// and integer-valued weights drawn uniformly from `weight_range`. Integer
/// values keep float sums exact, so test comparisons are order-independent.
pub fn random_directed(
    n: usize,
    edge_factor: f64,
    weight_range: Range<i64>,
) -> AdjacencyGraph<OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::with_vertices(n);
    let mut rng = rand::thread_rng();

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(weight_range.clone()) as f64);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a random connected undirected graph: a random spanning tree
/// plus `extra_edges` additional edges. Suitable as Prim input.
pub fn random_connected_undirected(
    n: usize,
    extra_edges: usize,
    weight_range: Range<i64>,
) -> AdjacencyGraph<OrderedFloat<f64>> {
    assert!(n > 0, "graph must have at least one vertex");

    let mut graph = AdjacencyGraph::with_vertices(n);
    let mut rng = rand::thread_rng();

    // Spanning tree first so the graph is connected by construction
    for v in 1..n {
        let u = rng.gen_range(0..v);
        let weight = OrderedFloat(rng.gen_range(weight_range.clone()) as f64);
        graph.add_undirected_edge(u, v, weight);
    }

    let mut added = 0;
    while added < extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(weight_range.clone()) as f64);
            graph.add_undirected_edge(u, v, weight);
            added += 1;
        }
    }

    graph
}
