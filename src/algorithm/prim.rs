use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::frontier::{self, SpanningTreeRule};
use crate::graph::Graph;
use crate::{Error, Result};

/// Prim's minimum spanning tree algorithm.
///
/// Frontier expansion in spanning-tree mode: each popped score is the
/// weight of the cheapest edge connecting that vertex to the tree built so
/// far, and the MST total is their sum. Negative weights are fine, MST
/// correctness depends only on relative order.
///
/// Precondition: the graph is connected (and undirected, with both
/// directions stored). An unreachable vertex is reported as
/// [`Error::Disconnected`] rather than silently producing a partial total.
#[derive(Debug, Default)]
pub struct Prim {
    /// Root vertex to grow the tree from; the total is root-independent
    root: usize,
}

impl Prim {
    /// Creates a new Prim instance rooted at vertex 0
    pub fn new() -> Self {
        Prim { root: 0 }
    }

    /// Set the root vertex to grow the tree from
    pub fn with_root(mut self, root: usize) -> Self {
        self.root = root;
        self
    }

    /// Computes the total weight of the minimum spanning tree
    pub fn total_weight<W, G>(&self, graph: &G) -> Result<W>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        let scores = frontier::expand(graph, self.root, &SpanningTreeRule)?;

        let mut total = W::zero();
        for (v, score) in scores.iter().enumerate() {
            if score.is_infinite() {
                return Err(Error::Disconnected(v));
            }
            total = total + *score;
        }

        log::debug!(
            "prim finished: {} vertices, total weight {total:?}",
            scores.len()
        );
        Ok(total)
    }
}
