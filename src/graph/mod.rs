pub mod adjacency;
pub mod edge_list;
pub mod generators;
pub mod traits;

pub use adjacency::AdjacencyGraph;
pub use traits::{Graph, MutableGraph};
