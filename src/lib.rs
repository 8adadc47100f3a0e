//! Weighted undirected graph over hash maps, with single-source
//! shortest-path queries via binary-heap Dijkstra.

pub mod dijkstra;
pub mod graph;

pub use dijkstra::UNREACHABLE;
pub use graph::{GraphError, WeightedGraph};
