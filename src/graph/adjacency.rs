use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// An adjacency-list graph over dense `usize` vertex ids.
///
/// Edges are stored directed; undirected graphs store both directions via
/// [`MutableGraph::add_undirected_edge`]. Negative weights are accepted,
/// each algorithm enforces its own sign precondition.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: HashMap<usize, Vec<(usize, W)>>,
}

impl<W> AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyGraph {
            vertex_count: 0,
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new graph with the specified number of vertices
    pub fn with_vertices(vertices: usize) -> Self {
        let mut graph = AdjacencyGraph {
            vertex_count: vertices,
            outgoing_edges: HashMap::with_capacity(vertices),
        };

        for v in 0..vertices {
            graph.outgoing_edges.insert(v, Vec::new());
        }

        graph
    }

    /// Returns true if any stored edge has a negative weight
    pub fn has_negative_edge(&self) -> bool {
        self.outgoing_edges
            .values()
            .flatten()
            .any(|(_, weight)| *weight < W::zero())
    }
}

impl<W> Default for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        if let Some(edges) = self.outgoing_edges.get(&from) {
            edges.iter().any(|(target, _)| *target == to)
        } else {
            false
        }
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges
            .get(&from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<W> MutableGraph<W> for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        let new_id = self.vertex_count;
        self.outgoing_edges.insert(new_id, Vec::new());
        self.vertex_count += 1;
        new_id
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return false;
        }

        let outgoing = self.outgoing_edges.entry(from).or_default();

        // Update in place if the edge already exists
        for edge in outgoing.iter_mut() {
            if edge.0 == to {
                edge.1 = weight;
                return true;
            }
        }

        outgoing.push((to, weight));
        true
    }
}
