//! Single-source shortest paths over non-negative edge weights.
//!
//! The working state lives in the returned [`ShortestPathTree`]; the graph is
//! only borrowed, so queries never touch vertex tags or info and any number
//! of them may run against the same graph at once.

use std::{cmp::Ordering, collections::BinaryHeap};

use ahash::{AHashMap, AHashSet};

use crate::{errors::GraphError, graph::WeightedGraph};

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first,
/// breaking ties on the smaller key.
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    distance: f64,
    key: i64,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.key.cmp(&self.key))
    }
}

/// Distances and predecessors from one source to every vertex of a graph.
///
/// Only reached vertices carry a distance. A reached vertex may still sit at
/// `f64::INFINITY` when the path weights overflow.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathTree {
    source: i64,
    vertex_count: usize,
    distances: AHashMap<i64, f64>,
    predecessors: AHashMap<i64, i64>,
}

impl ShortestPathTree {
    pub fn source(&self) -> i64 {
        self.source
    }

    /// `None` when `key` is unknown or unreachable from the source.
    pub fn distance_to(&self, key: i64) -> Option<f64> {
        self.distances.get(&key).copied()
    }

    pub fn is_reached(&self, key: i64) -> bool {
        self.distances.contains_key(&key)
    }

    /// The vertex preceding `key` on its shortest path. The source has none.
    pub fn predecessor(&self, key: i64) -> Option<i64> {
        self.predecessors.get(&key).copied()
    }

    /// Keys from the source to `key`, both ends included.
    pub fn path_to(&self, key: i64) -> Option<Vec<i64>> {
        if !self.is_reached(key) {
            return None;
        }
        let mut path = vec![key];
        let mut current = key;
        while current != self.source {
            let parent = self.predecessor(current)?;
            path.push(parent);
            if path.len() > self.vertex_count {
                return None;
            }
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    pub fn reached_count(&self) -> usize {
        self.distances.len()
    }

    /// True when every vertex the tree was computed over is reachable.
    pub fn is_spanning(&self) -> bool {
        self.reached_count() == self.vertex_count
    }
}

/// Runs Dijkstra from `source`.
///
/// Every vertex is queued once up front. Relaxation pushes a fresh entry
/// instead of decreasing a key, so stale duplicates may be popped later;
/// finalized vertices are skipped and live distances are always read from
/// the distance map rather than from the entry. A vertex counts as reached
/// once it has a distance, whether or not that distance is finite.
pub fn dijkstra(graph: &WeightedGraph, source: i64) -> Result<ShortestPathTree, GraphError> {
    if !graph.contains_vertex(source) {
        return Err(GraphError::not_found(format!("vertex {source}")));
    }
    let vertex_count = graph.vertex_count();
    let mut distances = AHashMap::with_capacity(vertex_count);
    let mut predecessors = AHashMap::new();
    let mut finalized = AHashSet::with_capacity(vertex_count);
    let mut queue = BinaryHeap::with_capacity(vertex_count);

    distances.insert(source, 0.0);
    for key in graph.vertex_keys() {
        let distance = if key == source { 0.0 } else { f64::INFINITY };
        queue.push(QueueEntry { distance, key });
    }

    while let Some(QueueEntry { key, .. }) = queue.pop() {
        if finalized.contains(&key) {
            continue;
        }
        finalized.insert(key);
        let Some(current) = distances.get(&key).copied() else {
            continue;
        };
        for (neighbor, weight) in graph.neighbor_weights(key)? {
            if finalized.contains(&neighbor) {
                continue;
            }
            let candidate = current + weight;
            let improves = match distances.get(&neighbor) {
                Some(&best) => candidate < best,
                None => true,
            };
            if improves {
                distances.insert(neighbor, candidate);
                predecessors.insert(neighbor, key);
                queue.push(QueueEntry {
                    distance: candidate,
                    key: neighbor,
                });
            }
        }
    }

    Ok(ShortestPathTree {
        source,
        vertex_count,
        distances,
        predecessors,
    })
}
