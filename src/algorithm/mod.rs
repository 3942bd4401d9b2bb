pub mod bellman_ford;
pub mod dijkstra;
pub mod frontier;
pub mod johnson;
pub mod prim;
pub mod traits;

pub use traits::SingleSourceShortestPaths;
