use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::frontier::{self, ShortestPathRule};
use crate::algorithm::SingleSourceShortestPaths;
use crate::graph::Graph;
use crate::Result;

/// Classic Dijkstra's algorithm, expressed as frontier expansion in
/// shortest-path mode.
///
/// Precondition: all edge weights non-negative. The algorithm does not
/// check this; callers with negative edges must reweight first (see
/// [`crate::Johnson`]).
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> SingleSourceShortestPaths<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_paths(&self, graph: &G, source: usize) -> Result<Vec<W>> {
        frontier::expand(graph, source, &ShortestPathRule)
    }
}
