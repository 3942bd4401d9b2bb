use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::SingleSourceShortestPaths;
use crate::graph::Graph;
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths with negative-cycle detection.
///
/// Tolerates negative edge weights. Round k relaxes every edge using only
/// round k-1's distances (the classical snapshot requirement), so up to n
/// rounds suffice: a round that changes nothing means convergence, and n
/// rounds without one means a negative cycle is reachable from the source.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> SingleSourceShortestPaths<W, G> for BellmanFord
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn shortest_paths(&self, graph: &G, source: usize) -> Result<Vec<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(source));
        }

        let n = graph.vertex_count();
        let mut previous = vec![W::infinity(); n];
        let mut current = vec![W::infinity(); n];
        current[source] = W::zero();

        for round in 0..n {
            previous.copy_from_slice(&current);
            let mut changed = false;

            for tail in 0..n {
                // Unreached tails cannot relax anything yet
                if previous[tail].is_infinite() {
                    continue;
                }
                for (head, length) in graph.outgoing_edges(tail) {
                    let candidate = previous[tail] + length;
                    if candidate < current[head] {
                        current[head] = candidate;
                        changed = true;
                    }
                }
            }

            if !changed {
                log::debug!("bellman-ford converged after {} rounds", round + 1);
                return Ok(current);
            }
        }

        // Still relaxing after n rounds: some improvement used a walk of
        // length >= n, which must repeat a vertex
        log::debug!("bellman-ford detected a negative cycle from source {source}");
        Err(Error::NegativeCycle)
    }
}
