use num_traits::{Float, Zero};
use rayon::prelude::*;
use std::fmt::Debug;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::frontier::{self, ShortestPathRule};
use crate::algorithm::SingleSourceShortestPaths;
use crate::graph::{AdjacencyGraph, Graph, MutableGraph};
use crate::Result;

/// Johnson's all-pairs shortest path pipeline.
///
/// Makes Dijkstra usable on graphs with negative edges: a virtual source
/// with zero-weight edges to every vertex feeds Bellman-Ford, whose
/// distances become vertex potentials; reweighting each edge by
/// `w + h(tail) - h(head)` yields all-non-negative weights while preserving
/// relative path costs, after which one Dijkstra run per source recovers
/// true distances. A negative cycle anywhere surfaces as
/// [`crate::Error::NegativeCycle`], never as a numeric answer.
#[derive(Debug, Default)]
pub struct Johnson;

impl Johnson {
    /// Creates a new Johnson pipeline instance
    pub fn new() -> Self {
        Johnson
    }

    /// Computes per-vertex potentials: Bellman-Ford distances from a
    /// virtual vertex joined to every real vertex by a zero-weight edge.
    /// All potentials are finite because the virtual source reaches
    /// everything.
    pub fn potentials<W, G>(&self, graph: &G) -> Result<Vec<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut augmented = AdjacencyGraph::with_vertices(n + 1);
        for tail in 0..n {
            for (head, weight) in graph.outgoing_edges(tail) {
                augmented.add_edge(tail, head, weight);
            }
            augmented.add_edge(n, tail, W::zero());
        }

        let mut potentials = BellmanFord::new().shortest_paths(&augmented, n)?;
        potentials.truncate(n);
        Ok(potentials)
    }

    /// Reweights every edge (u, v, w) to `w + h(u) - h(v)`. With `h` the
    /// shortest-path potentials this is non-negative for every edge, by the
    /// triangle inequality.
    pub fn reweight<W, G>(&self, graph: &G, potentials: &[W]) -> AdjacencyGraph<W>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut reweighted = AdjacencyGraph::with_vertices(n);
        for tail in 0..n {
            for (head, weight) in graph.outgoing_edges(tail) {
                reweighted.add_edge(tail, head, weight + potentials[tail] - potentials[head]);
            }
        }
        reweighted
    }

    /// Computes the minimum shortest-path distance over all ordered
    /// (source, destination) pairs, self-pairs included, or
    /// [`crate::Error::NegativeCycle`] when no finite answer exists.
    /// Unreachable pairs never contribute; a graph with no negative edge
    /// therefore answers zero, and an empty graph `W::infinity()`.
    pub fn shortest_shortest_path<W, G>(&self, graph: &G) -> Result<W>
    where
        W: Float + Zero + Debug + Copy + Ord + Send + Sync,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let potentials = self.potentials(graph)?;
        let reweighted = self.reweight(graph, &potentials);

        log::debug!("johnson: reweighting done, fanning out {n} dijkstra runs");

        // One independent Dijkstra per source; each run owns its heap and
        // score table, so the fan-out parallelizes freely.
        (0..n)
            .into_par_iter()
            .map(|source| {
                let shifted = frontier::expand(&reweighted, source, &ShortestPathRule)?;
                let mut best = W::infinity();
                for (dest, score) in shifted.iter().enumerate() {
                    if score.is_finite() {
                        // Undo the potential shift to recover the true cost
                        let true_distance = *score + potentials[dest] - potentials[source];
                        best = std::cmp::min(best, true_distance);
                    }
                }
                Ok(best)
            })
            .try_reduce(W::infinity, |a, b| Ok(std::cmp::min(a, b)))
    }
}
