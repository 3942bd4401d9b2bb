//! Greedy frontier expansion shared by Prim and Dijkstra.
//!
//! Both algorithms are the same loop: pop the minimum-score vertex from an
//! indexed heap, move it from unexplored to explored, and relax every edge
//! crossing the explored/unexplored cut. Only the candidate-score rule
//! differs, so it is the trait parameter.

use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::data_structures::IndexedHeap;
use crate::graph::Graph;
use crate::{Error, Result};

/// Produces the candidate score for an unexplored neighbor when the
/// frontier crosses edge (v, u, w) after popping v with score `popped`.
pub trait RelaxationRule<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn candidate(&self, popped: W, edge_weight: W) -> W;
}

/// Shortest-path relaxation: candidate = score(v) + w.
///
/// Requires non-negative edge weights; the caller guarantees this (Johnson
/// does so by reweighting). Violations silently break the cut invariant and
/// yield incorrect distances, not an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortestPathRule;

impl<W> RelaxationRule<W> for ShortestPathRule
where
    W: Float + Zero + Debug + Copy,
{
    fn candidate(&self, popped: W, edge_weight: W) -> W {
        popped + edge_weight
    }
}

/// Spanning-tree relaxation: candidate = w, the cheapest edge crossing the
/// cut regardless of accumulated distance. Correct for negative weights.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpanningTreeRule;

impl<W> RelaxationRule<W> for SpanningTreeRule
where
    W: Float + Zero + Debug + Copy,
{
    fn candidate(&self, _popped: W, edge_weight: W) -> W {
        edge_weight
    }
}

/// Runs the greedy expansion from `start` and returns the final per-vertex
/// score array: the popped score for every explored vertex, `W::infinity()`
/// for vertices unreachable from `start`.
///
/// Callers accumulate as their mode requires: Prim sums the array, Dijkstra
/// returns it as the distance table.
pub fn expand<W, G, R>(graph: &G, start: usize, rule: &R) -> Result<Vec<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
    R: RelaxationRule<W>,
{
    if !graph.has_vertex(start) {
        return Err(Error::SourceNotFound(start));
    }

    let n = graph.vertex_count();
    let mut heap = IndexedHeap::with_capacity(n);
    for v in 0..n {
        let score = if v == start { W::zero() } else { W::infinity() };
        heap.insert_or_update(v, score);
    }

    let mut explored = vec![false; n];
    let mut scores = vec![W::infinity(); n];

    while !heap.is_empty() {
        let (score, v) = heap.pop_min()?;
        if score.is_infinite() {
            // Heap order: everything still queued is unreachable too
            log::trace!(
                "frontier exhausted reachable vertices, {} left unexplored",
                heap.len() + 1
            );
            break;
        }

        explored[v] = true;
        scores[v] = score;
        log::trace!("explored vertex {v} with score {score:?}");

        for (u, weight) in graph.outgoing_edges(v) {
            if explored[u] {
                continue;
            }
            let candidate = rule.candidate(score, weight);
            if candidate < heap.current_score(u)? {
                heap.insert_or_update(u, candidate);
            }
        }
    }

    Ok(scores)
}
