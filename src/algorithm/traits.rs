use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::Result;

/// Trait for single-source shortest path algorithms
pub trait SingleSourceShortestPaths<W, G>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest distances from a source vertex to all other
    /// vertices. Unreachable vertices carry `W::infinity()`.
    fn shortest_paths(&self, graph: &G, source: usize) -> Result<Vec<W>>;
}
