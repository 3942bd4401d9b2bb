//! Frontier Graph - indexed priority queue and the greedy graph algorithms
//! built on top of it.
//!
//! The crate centers on one data structure, an index-addressable binary
//! min-heap with an O(log n) decrease-key ([`IndexedHeap`]), and one
//! algorithmic pattern, greedy frontier expansion driven by relaxation of
//! tentative scores. The same expansion loop computes Prim's minimum
//! spanning tree and Dijkstra's single-source shortest paths; Bellman-Ford
//! and Johnson's all-pairs pipeline (negative-cycle detection, reweighting,
//! repeated Dijkstra) complete the set.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, johnson::Johnson, prim::Prim,
};
pub use data_structures::IndexedHeap;
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("pop from an empty priority queue")]
    EmptyQueue,

    #[error("vertex {0} is not tracked by the queue")]
    NotTracked(usize),

    #[error("negative cycle reachable from the source")]
    NegativeCycle,

    #[error("source vertex {0} not found in graph")]
    SourceNotFound(usize),

    #[error("graph is disconnected: vertex {0} is unreachable")]
    Disconnected(usize),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed edge list: {0}")]
    Parse(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
