mod types;
mod weighted_graph;

pub use types::{NO_TAG, Vertex};
pub use weighted_graph::WeightedGraph;
