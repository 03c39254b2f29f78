use std::fmt;

use ahash::AHashMap;

use crate::{
    config::GraphConfig,
    errors::GraphError,
    graph::types::{NO_TAG, Vertex},
};

/// Undirected weighted graph keyed by caller-assigned `i64` vertex keys.
///
/// Every edge is stored in both endpoints' adjacency buckets with the same
/// weight. `edge_count` counts unordered pairs, and `modification_count`
/// grows by one on every structural change.
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    vertices: AHashMap<i64, Vertex>,
    adjacency: AHashMap<i64, AHashMap<i64, f64>>,
    edge_count: usize,
    modification_count: u64,
    degree_hint: usize,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &GraphConfig) -> Self {
        let capacity = config.reserve_vertex_capacity.unwrap_or(0);
        Self {
            vertices: AHashMap::with_capacity(capacity),
            adjacency: AHashMap::with_capacity(capacity),
            edge_count: 0,
            modification_count: 0,
            degree_hint: config.reserve_degree_capacity.unwrap_or(0),
        }
    }

    /// Adds a vertex with default tag and info. Existing keys are left alone.
    pub fn add_vertex(&mut self, key: i64) {
        if self.vertices.contains_key(&key) {
            return;
        }
        self.vertices.insert(key, Vertex::new(key));
        self.adjacency
            .insert(key, AHashMap::with_capacity(self.degree_hint));
        self.modification_count += 1;
    }

    pub fn get_vertex(&self, key: i64) -> Option<&Vertex> {
        self.vertices.get(&key)
    }

    pub fn get_vertex_mut(&mut self, key: i64) -> Option<&mut Vertex> {
        self.vertices.get_mut(&key)
    }

    pub fn contains_vertex(&self, key: i64) -> bool {
        self.vertices.contains_key(&key)
    }

    /// Creates or reweights the edge `{a, b}`.
    ///
    /// Negative or non-finite weights, self loops and unknown endpoints are
    /// ignored. Reconnecting with the current weight changes nothing.
    pub fn connect(&mut self, a: i64, b: i64, weight: f64) {
        if !weight.is_finite() || weight < 0.0 {
            return;
        }
        if a == b || !self.contains_vertex(a) || !self.contains_vertex(b) {
            return;
        }
        let is_new = match self.edge_weight(a, b) {
            Some(current) if current == weight => return,
            Some(_) => false,
            None => true,
        };
        self.set_directed(a, b, weight);
        self.set_directed(b, a, weight);
        self.modification_count += 1;
        if is_new {
            self.edge_count += 1;
        }
    }

    /// Returns false when `a` has no adjacency bucket, unlike [`neighbors`](Self::neighbors).
    pub fn has_edge(&self, a: i64, b: i64) -> bool {
        self.adjacency
            .get(&a)
            .is_some_and(|bucket| bucket.contains_key(&b))
    }

    pub fn edge_weight(&self, a: i64, b: i64) -> Option<f64> {
        self.adjacency.get(&a)?.get(&b).copied()
    }

    /// Vertices adjacent to `key`, in O(degree).
    ///
    /// Asking for the neighbors of a vertex that does not exist is a caller
    /// error and reported as [`GraphError::NotFound`].
    pub fn neighbors(&self, key: i64) -> Result<Vec<&Vertex>, GraphError> {
        let bucket = self.bucket(key)?;
        Ok(bucket
            .keys()
            .filter_map(|neighbor| self.vertices.get(neighbor))
            .collect())
    }

    pub fn neighbor_weights(
        &self,
        key: i64,
    ) -> Result<impl Iterator<Item = (i64, f64)> + '_, GraphError> {
        let bucket = self.bucket(key)?;
        Ok(bucket.iter().map(|(&neighbor, &weight)| (neighbor, weight)))
    }

    /// All vertices in hash map order, which is not insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    pub fn vertex_keys(&self) -> impl Iterator<Item = i64> + '_ {
        self.vertices.keys().copied()
    }

    /// Each unordered edge once, as `(low, high, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (i64, i64, f64)> + '_ {
        self.adjacency.iter().flat_map(|(&a, bucket)| {
            bucket
                .iter()
                .filter(move |&(&b, _)| a < b)
                .map(move |(&b, &weight)| (a, b, weight))
        })
    }

    /// Removes a vertex after detaching all of its edges.
    ///
    /// Each detached edge counts as one modification and the vertex removal
    /// as one more.
    pub fn remove_vertex(&mut self, key: i64) -> Option<Vertex> {
        if !self.contains_vertex(key) {
            return None;
        }
        let incident: Vec<i64> = self
            .adjacency
            .get(&key)
            .map(|bucket| bucket.keys().copied().collect())
            .unwrap_or_default();
        for neighbor in incident {
            self.remove_edge(key, neighbor);
        }
        self.adjacency.remove(&key);
        let removed = self.vertices.remove(&key);
        self.modification_count += 1;
        removed
    }

    pub fn remove_edge(&mut self, a: i64, b: i64) {
        if a == b || !self.has_edge(a, b) {
            return;
        }
        if let Some(bucket) = self.adjacency.get_mut(&a) {
            bucket.remove(&b);
        }
        if let Some(bucket) = self.adjacency.get_mut(&b) {
            bucket.remove(&a);
        }
        self.modification_count += 1;
        self.edge_count -= 1;
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn modification_count(&self) -> u64 {
        self.modification_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl WeightedGraph {
    pub(crate) fn restore_modification_count(&mut self, count: u64) {
        self.modification_count = count;
    }

    fn bucket(&self, key: i64) -> Result<&AHashMap<i64, f64>, GraphError> {
        self.adjacency
            .get(&key)
            .ok_or_else(|| GraphError::not_found(format!("vertex {key}")))
    }

    fn set_directed(&mut self, from: i64, to: i64, weight: f64) {
        if let Some(bucket) = self.adjacency.get_mut(&from) {
            bucket.insert(to, weight);
        }
    }
}

/// Order-independent structural equality.
///
/// Counters must match, every vertex must exist on both sides with the same
/// tag and info, and each vertex must have the same neighbors at the same
/// weights.
impl PartialEq for WeightedGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.edge_count != other.edge_count
            || self.modification_count != other.modification_count
            || self.vertices.len() != other.vertices.len()
        {
            return false;
        }
        self.vertices.iter().all(|(key, vertex)| {
            let Some(theirs) = other.vertices.get(key) else {
                return false;
            };
            if !vertex.same_fields(theirs) {
                return false;
            }
            match (self.adjacency.get(key), other.adjacency.get(key)) {
                (Some(mine), Some(their_bucket)) => {
                    mine.len() == their_bucket.len()
                        && mine
                            .iter()
                            .all(|(neighbor, weight)| their_bucket.get(neighbor) == Some(weight))
                }
                (None, None) => true,
                _ => false,
            }
        })
    }
}

impl fmt::Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<i64> = self.vertex_keys().collect();
        keys.sort_unstable();
        for key in keys {
            let Some(vertex) = self.vertices.get(&key) else {
                continue;
            };
            let mut neighbors: Vec<i64> = self
                .adjacency
                .get(&key)
                .map(|bucket| bucket.keys().copied().collect())
                .unwrap_or_default();
            neighbors.sort_unstable();
            let tag = if vertex.tag() == NO_TAG {
                "-".to_owned()
            } else {
                vertex.tag().to_string()
            };
            writeln!(
                f,
                "key: {} | tag: {} | info: {} | neighbors: {:?}",
                key,
                tag,
                vertex.info().unwrap_or("-"),
                neighbors
            )?;
        }
        Ok(())
    }
}
