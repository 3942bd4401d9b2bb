use frontier_graph::algorithm::SingleSourceShortestPaths;
use frontier_graph::graph::{generators, Graph, MutableGraph};
use frontier_graph::{AdjacencyGraph, BellmanFord, Dijkstra};
use ordered_float::OrderedFloat;

type W = OrderedFloat<f64>;

/// Exhaustive simple-path enumeration, only viable on tiny graphs
fn brute_force_distances(graph: &AdjacencyGraph<W>, source: usize) -> Vec<W> {
    fn walk(
        graph: &AdjacencyGraph<W>,
        vertex: usize,
        cost: W,
        on_path: &mut Vec<bool>,
        best: &mut Vec<W>,
    ) {
        if cost < best[vertex] {
            best[vertex] = cost;
        }
        on_path[vertex] = true;
        for (next, weight) in graph.outgoing_edges(vertex) {
            if !on_path[next] {
                walk(graph, next, cost + weight, on_path, best);
            }
        }
        on_path[vertex] = false;
    }

    let n = graph.vertex_count();
    let mut best = vec![OrderedFloat(f64::INFINITY); n];
    let mut on_path = vec![false; n];
    walk(graph, source, OrderedFloat(0.0), &mut on_path, &mut best);
    best
}

#[test]
fn test_dijkstra_matches_brute_force_on_small_graphs() {
    for _ in 0..50 {
        let graph = generators::random_directed(8, 2.5, 1..20);
        for source in 0..graph.vertex_count() {
            let computed = Dijkstra::new().shortest_paths(&graph, source).unwrap();
            let expected = brute_force_distances(&graph, source);
            assert_eq!(computed, expected, "mismatch from source {source}");
        }
    }
}

#[test]
fn test_dijkstra_agrees_with_bellman_ford_on_non_negative_graphs() {
    for _ in 0..10 {
        let graph = generators::random_directed(40, 3.0, 1..100);
        let dijkstra = Dijkstra::new().shortest_paths(&graph, 0).unwrap();
        let bellman_ford = BellmanFord::new().shortest_paths(&graph, 0).unwrap();
        assert_eq!(dijkstra, bellman_ford);
    }
}

#[test]
fn test_unreachable_vertices_stay_infinite() {
    // 0 -> 1, vertex 2 isolated
    let mut graph: AdjacencyGraph<W> = AdjacencyGraph::with_vertices(3);
    graph.add_edge(0, 1, OrderedFloat(4.0));

    let distances = Dijkstra::new().shortest_paths(&graph, 0).unwrap();
    assert_eq!(distances[0], OrderedFloat(0.0));
    assert_eq!(distances[1], OrderedFloat(4.0));
    assert!(distances[2].is_infinite());
}

#[test]
fn test_dijkstra_rejects_missing_source() {
    let graph: AdjacencyGraph<W> = AdjacencyGraph::with_vertices(2);
    assert!(Dijkstra::new().shortest_paths(&graph, 5).is_err());
}

#[test]
fn test_dijkstra_prefers_cheaper_indirect_path() {
    let mut graph: AdjacencyGraph<W> = AdjacencyGraph::with_vertices(3);
    graph.add_edge(0, 1, OrderedFloat(1.0));
    graph.add_edge(1, 2, OrderedFloat(2.0));
    graph.add_edge(0, 2, OrderedFloat(10.0));

    let distances = Dijkstra::new().shortest_paths(&graph, 0).unwrap();
    assert_eq!(distances[2], OrderedFloat(3.0));
}
