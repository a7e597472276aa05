//! Geodesic graph generation.
//!
//! The triangle is grown ring by ring from the center. Ring `i` adds three
//! straight runs of `i` nodes (right, bottom, left). Runs are chained
//! internally, closed corner to corner, and stitched to the previous ring:
//! the ends of an outer run touch one node of the inner run below them and
//! every interior node touches two consecutive inner nodes.
//!
//! For order 3 (nine nodes) this produces:
//!
//! ```text
//! ring 1: right [0]    bottom [1]    left [2]
//! ring 2: right [3 4]  bottom [5 6]  left [7 8]
//! ```
//!
//! with corners 3, 5 and 7 on the outside.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::edge::{EdgeMask, Side};
use super::node::Node;
use crate::error::GeodesicError;

/// Smallest order that yields a playable board (a single triangle).
pub const MIN_ORDER: u16 = 2;

/// Default order used by the original game parameters.
pub const DEFAULT_ORDER: u16 = 9;

/// Neighbor list of a single node. Interior nodes have six neighbors.
pub type NeighborList = SmallVec<[Node; 6]>;

/// Number of cells on a board of the given order.
///
/// Ring `i` contributes `3·i` nodes for `i` in `1..order`.
///
/// ```
/// use geodesic_y::graph::cell_count;
///
/// assert_eq!(cell_count(2), 3);
/// assert_eq!(cell_count(3), 9);
/// assert_eq!(cell_count(9), 108);
/// ```
#[must_use]
pub const fn cell_count(order: u16) -> usize {
    let k = (order as usize).saturating_sub(1);
    3 * (k * k + k) / 2
}

/// The adjacency graph and boundary sets of one board order.
///
/// Immutable once built; share it between games with an `Arc`
/// (see [`super::cache::shared_graph`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeodesicGraph {
    order: u16,
    neighbors: Vec<NeighborList>,
    right: Vec<Node>,
    bottom: Vec<Node>,
    left: Vec<Node>,
    masks: Vec<EdgeMask>,
}

/// The three runs of one ring, in allocation order.
#[derive(Default)]
struct Ring {
    runs: [Vec<Node>; 3],
}

fn join(neighbors: &mut [NeighborList], a: Node, b: Node) {
    neighbors[a.index()].push(b);
    neighbors[b.index()].push(a);
}

impl GeodesicGraph {
    /// Build the graph for `order`.
    ///
    /// # Panics
    ///
    /// Panics if `order` is below [`MIN_ORDER`] or the board would not fit
    /// in 16-bit node ids.
    #[must_use]
    pub fn build(order: u16) -> Self {
        match Self::try_build(order) {
            Ok(graph) => graph,
            Err(err) => panic!("cannot build geodesic graph: {err}"),
        }
    }

    /// Build the graph for `order`, reporting invalid orders as errors.
    pub fn try_build(order: u16) -> Result<Self, GeodesicError> {
        if order < MIN_ORDER {
            return Err(GeodesicError::BoardOrderTooSmall { order, min: MIN_ORDER });
        }
        let cells = cell_count(order);
        if cells > usize::from(u16::MAX) {
            return Err(GeodesicError::BoardOrderTooLarge { order, cells });
        }

        let mut neighbors: Vec<NeighborList> = vec![NeighborList::new(); cells];
        let mut next: u16 = 0;
        let mut inner = Ring::default();

        for size in 1..order {
            let mut ring = Ring::default();

            for run in ring.runs.iter_mut() {
                for j in 0..size {
                    let node = Node(next);
                    next += 1;
                    if j > 0 {
                        join(&mut neighbors, node, Node(node.0 - 1));
                    }
                    run.push(node);
                }
            }

            // Close the ring: each run's last node meets the next run's first.
            for r in 0..3 {
                let last = ring.runs[r][usize::from(size) - 1];
                let first = ring.runs[(r + 1) % 3][0];
                join(&mut neighbors, last, first);
            }

            if size > 1 {
                for r in 0..3 {
                    let outer = &ring.runs[r];
                    let below = &inner.runs[r];
                    let below_next = &inner.runs[(r + 1) % 3];
                    let last = outer.len() - 1;

                    join(&mut neighbors, outer[0], below[0]);
                    for j in 1..last {
                        join(&mut neighbors, outer[j], below[j - 1]);
                        join(&mut neighbors, outer[j], below[j]);
                    }
                    join(&mut neighbors, outer[last], below[below.len() - 1]);
                    join(&mut neighbors, outer[last], below_next[0]);
                }
            }

            inner = ring;
        }

        for list in neighbors.iter_mut() {
            list.sort_unstable();
        }

        let [mut right, mut bottom, mut left] = inner.runs;
        let corners = [right[0], bottom[0], left[0]];

        // Each side also takes the first node of the following run so that the
        // three corners sit on two sides each.
        right.push(corners[1]);
        bottom.push(corners[2]);
        left.push(corners[0]);

        let mut masks = vec![EdgeMask::NONE; cells];
        for (side, nodes) in [(Side::Right, &right), (Side::Bottom, &bottom), (Side::Left, &left)] {
            for node in nodes {
                masks[node.index()] |= side.mask();
            }
        }

        debug!(order, cells, "generated geodesic graph");

        Ok(Self {
            order,
            neighbors,
            right,
            bottom,
            left,
            masks,
        })
    }

    /// Board order this graph was built for.
    #[must_use]
    pub fn order(&self) -> u16 {
        self.order
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Always false for a built graph; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Check whether `node` lies on this board.
    #[must_use]
    pub fn contains(&self, node: Node) -> bool {
        node.index() < self.neighbors.len()
    }

    /// Iterate over every node id.
    pub fn nodes(&self) -> impl Iterator<Item = Node> {
        (0..self.neighbors.len() as u16).map(Node)
    }

    /// Neighbors of `node`, in ascending order.
    #[inline]
    #[must_use]
    pub fn neighbors(&self, node: Node) -> &[Node] {
        &self.neighbors[node.index()]
    }

    /// Check whether two nodes share an edge.
    #[must_use]
    pub fn are_adjacent(&self, a: Node, b: Node) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Static boundary membership of `node`.
    #[inline]
    #[must_use]
    pub fn edge_mask(&self, node: Node) -> EdgeMask {
        self.masks[node.index()]
    }

    /// Nodes on one side of the board, corners included.
    #[must_use]
    pub fn side(&self, side: Side) -> &[Node] {
        match side {
            Side::Right => &self.right,
            Side::Bottom => &self.bottom,
            Side::Left => &self.left,
        }
    }

    /// The three corner nodes: right/left, right/bottom, bottom/left.
    #[must_use]
    pub fn corners(&self) -> [Node; 3] {
        [self.right[0], self.bottom[0], self.left[0]]
    }

    /// Total number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(|n| n.len()).sum::<usize>() / 2
    }
}
