//! Construction options for [`WeightedGraph`](crate::graph::WeightedGraph).

/// Capacity hints applied when a graph is created.
///
/// # Default Configuration
///
/// ```rust
/// use wgraph::GraphConfig;
/// let config = GraphConfig::default();
/// assert!(config.reserve_vertex_capacity.is_none());
/// assert!(config.reserve_degree_capacity.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphConfig {
    /// Expected number of vertices.
    ///
    /// **Default:** `None`
    ///
    /// This is a hint, not a limit. The graph grows past it as needed.
    pub reserve_vertex_capacity: Option<usize>,

    /// Expected number of neighbors per vertex, reserved in each adjacency
    /// bucket as the vertex is added.
    ///
    /// **Default:** `None`
    pub reserve_degree_capacity: Option<usize>,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.reserve_vertex_capacity = Some(capacity);
        self
    }

    pub fn with_degree_capacity(mut self, capacity: usize) -> Self {
        self.reserve_degree_capacity = Some(capacity);
        self
    }
}
