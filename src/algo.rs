use std::path::Path;

use tracing::warn;

use crate::{
    dijkstra::{ShortestPathTree, dijkstra},
    graph::{Vertex, WeightedGraph},
    recovery::{dump_graph_to_path, load_graph_from_path},
};

/// Algorithms over an owned, re-bindable [`WeightedGraph`].
///
/// Queries borrow the graph immutably and keep their working state local,
/// so they leave tags, info and the modification count untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphAlgo {
    graph: Option<WeightedGraph>,
}

impl Default for GraphAlgo {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphAlgo {
    /// Binds a fresh empty graph.
    pub fn new() -> Self {
        Self::from_graph(WeightedGraph::new())
    }

    pub fn from_graph(graph: WeightedGraph) -> Self {
        Self { graph: Some(graph) }
    }

    pub fn unbound() -> Self {
        Self { graph: None }
    }

    /// Binds `graph` and hands back the previously bound one unchanged.
    pub fn init(&mut self, graph: WeightedGraph) -> Option<WeightedGraph> {
        self.graph.replace(graph)
    }

    pub fn detach(&mut self) -> Option<WeightedGraph> {
        self.graph.take()
    }

    pub fn graph(&self) -> Option<&WeightedGraph> {
        self.graph.as_ref()
    }

    pub fn graph_mut(&mut self) -> Option<&mut WeightedGraph> {
        self.graph.as_mut()
    }

    /// Deep copy of the bound graph, or `None` when nothing is bound.
    pub fn copy(&self) -> Option<WeightedGraph> {
        self.graph.as_ref().map(deep_copy)
    }

    /// Vacuously true for an empty or unbound graph.
    pub fn is_connected(&self) -> bool {
        let Some(graph) = self.graph.as_ref() else {
            return true;
        };
        let Some(first) = graph.vertex_keys().next() else {
            return true;
        };
        dijkstra(graph, first).is_ok_and(|tree| tree.is_spanning())
    }

    /// Weight of the lightest path from `src` to `dst`.
    ///
    /// `None` when either vertex is missing or `dst` is unreachable.
    pub fn shortest_path_distance(&self, src: i64, dst: i64) -> Option<f64> {
        let (_, tree) = self.tree_for(src, dst)?;
        tree.distance_to(dst)
    }

    /// Vertices on the lightest path from `src` to `dst`, both included.
    pub fn shortest_path(&self, src: i64, dst: i64) -> Option<Vec<&Vertex>> {
        let (graph, tree) = self.tree_for(src, dst)?;
        let keys = tree.path_to(dst)?;
        keys.into_iter().map(|key| graph.get_vertex(key)).collect()
    }

    /// Writes the bound graph to `path`, replacing any previous content.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> bool {
        let path = path.as_ref();
        let Some(graph) = self.graph.as_ref() else {
            warn!(path = %path.display(), "save skipped: no graph bound");
            return false;
        };
        match dump_graph_to_path(graph, path) {
            Ok(()) => true,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to save graph");
                false
            }
        }
    }

    /// Replaces the bound graph with the one stored at `path`. On failure the
    /// bound graph is kept as it was.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        match load_graph_from_path(path) {
            Ok(graph) => {
                self.graph = Some(graph);
                true
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to load graph");
                false
            }
        }
    }

    fn tree_for(&self, src: i64, dst: i64) -> Option<(&WeightedGraph, ShortestPathTree)> {
        let graph = self.graph.as_ref()?;
        if !graph.contains_vertex(dst) {
            return None;
        }
        let tree = dijkstra(graph, src).ok()?;
        Some((graph, tree))
    }
}

/// Copies vertices, their tag and info, and every edge into a new graph.
///
/// The copy ends with the source's modification count so that it compares
/// equal to the source at the moment it was taken.
pub fn deep_copy(source: &WeightedGraph) -> WeightedGraph {
    let mut copy = WeightedGraph::new();
    for vertex in source.vertices() {
        let key = vertex.key();
        copy.add_vertex(key);
        if let Some(target) = copy.get_vertex_mut(key) {
            target.set_tag(vertex.tag());
            match vertex.info() {
                Some(info) => target.set_info(info),
                None => target.clear_info(),
            }
        }
        if let Ok(neighbors) = source.neighbor_weights(key) {
            for (neighbor, weight) in neighbors {
                copy.connect(key, neighbor, weight);
            }
        }
    }
    copy.restore_modification_count(source.modification_count());
    copy
}
