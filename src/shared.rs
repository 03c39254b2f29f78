use std::sync::Arc;

use parking_lot::RwLock;

use crate::{algo::GraphAlgo, graph::WeightedGraph};

/// Cloneable handle to a [`GraphAlgo`] shared between threads.
///
/// Queries run under the read lock and may overlap; mutations, `init` and
/// `load` take the write lock.
#[derive(Clone, Default)]
pub struct SharedGraph {
    inner: Arc<RwLock<GraphAlgo>>,
}

impl SharedGraph {
    pub fn new(algo: GraphAlgo) -> Self {
        Self {
            inner: Arc::new(RwLock::new(algo)),
        }
    }

    pub fn from_graph(graph: WeightedGraph) -> Self {
        Self::new(GraphAlgo::from_graph(graph))
    }

    pub fn read<R>(&self, f: impl FnOnce(&GraphAlgo) -> R) -> R {
        f(&*self.inner.read())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut GraphAlgo) -> R) -> R {
        f(&mut *self.inner.write())
    }

    /// Deep copy of the current graph taken under the read lock.
    pub fn snapshot(&self) -> Option<WeightedGraph> {
        self.read(GraphAlgo::copy)
    }
}
