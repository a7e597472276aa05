//! Board topology: node ids, side masks, graph generation and caching.
//!
//! The graph only depends on the board order, so it is built once and
//! shared read-only between every game of that order.

pub mod builder;
pub mod cache;
pub mod edge;
pub mod node;

pub use builder::{cell_count, GeodesicGraph, NeighborList, DEFAULT_ORDER, MIN_ORDER};
pub use cache::{shared_graph, GraphCache};
pub use edge::{EdgeMask, Side};
pub use node::Node;
