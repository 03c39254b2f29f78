//! In-memory undirected weighted graphs with Dijkstra shortest paths.
//!
//! [`WeightedGraph`] owns vertices and the symmetric weight map;
//! [`GraphAlgo`] binds a graph and answers copy, connectivity and
//! shortest-path queries, and saves or loads it as JSON lines.

pub mod algo;
pub mod bench_utils;
pub mod client;
pub mod config;
pub mod dijkstra;
pub mod errors;
pub mod graph;
pub mod recovery;
pub mod shared;

pub use crate::algo::{GraphAlgo, deep_copy};
pub use crate::config::GraphConfig;
pub use crate::dijkstra::{ShortestPathTree, dijkstra};
pub use crate::errors::GraphError;
pub use crate::graph::{NO_TAG, Vertex, WeightedGraph};
pub use crate::shared::SharedGraph;
