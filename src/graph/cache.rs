//! Process-wide cache of built graphs, one per board order.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use rustc_hash::FxHashMap;
use tracing::debug;

use super::builder::GeodesicGraph;
use crate::error::GeodesicError;

/// Cache of shared graphs keyed by board order.
///
/// A graph is generated the first time its order is requested and handed
/// out as an `Arc` afterwards. Games of the same order share one graph.
#[derive(Debug, Default)]
pub struct GraphCache {
    graphs: Mutex<FxHashMap<u16, Arc<GeodesicGraph>>>,
}

impl GraphCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the graph for `order`, building it on first use.
    pub fn get(&self, order: u16) -> Result<Arc<GeodesicGraph>, GeodesicError> {
        let mut graphs = self.graphs.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(graph) = graphs.get(&order) {
            debug!(order, "serving cached geodesic graph");
            return Ok(Arc::clone(graph));
        }

        let graph = Arc::new(GeodesicGraph::try_build(order)?);
        graphs.insert(order, Arc::clone(&graph));
        Ok(graph)
    }

    /// Number of distinct orders built so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphs.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached graph. Games holding a graph keep theirs alive.
    pub fn clear(&self) {
        self.graphs.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

fn global() -> &'static GraphCache {
    static CACHE: OnceLock<GraphCache> = OnceLock::new();
    CACHE.get_or_init(GraphCache::new)
}

/// Get the shared graph for `order` from the process-wide cache.
///
/// ```
/// use std::sync::Arc;
/// use geodesic_y::graph::shared_graph;
///
/// let a = shared_graph(5).unwrap();
/// let b = shared_graph(5).unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub fn shared_graph(order: u16) -> Result<Arc<GeodesicGraph>, GeodesicError> {
    global().get(order)
}
