//! Per-node board cells.
//!
//! Each cell doubles as a union-find entry: `parent` links it into its
//! group, and the group leader (the cell whose parent is itself) carries the
//! authoritative `size` and `edges` for the whole group.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::graph::{EdgeMask, Node};

/// One board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Stone on this cell, `None` when empty.
    pub owner: Option<PlayerId>,

    /// Union-find parent. A cell is a leader iff `parent` is its own node.
    pub parent: Node,

    /// Number of cells in the group. Only meaningful at a leader.
    pub size: u16,

    /// Sides touched by the group. Only meaningful at a leader.
    pub edges: EdgeMask,
}

impl Cell {
    /// An empty cell that leads its own singleton group.
    #[must_use]
    pub const fn new(node: Node, edges: EdgeMask) -> Self {
        Self {
            owner: None,
            parent: node,
            size: 1,
            edges,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.owner.is_none()
    }

    /// True if `player` has a stone here.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// True if this cell is the leader of its group.
    #[must_use]
    pub fn is_leader(&self, node: Node) -> bool {
        self.parent == node
    }
}
