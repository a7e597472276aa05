//! MCTS node and edge structures.
//!
//! Uses arena-based allocation with index references (`TreeId`) for
//! efficiency and serializability.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlayerId, PlayerMap};

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeId(pub u32);

impl TreeId {
    /// Sentinel value representing no node.
    pub const NONE: TreeId = TreeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TreeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "TreeId(NONE)")
        } else {
            write!(f, "TreeId({})", self.0)
        }
    }
}

/// Edge representing an action from a parent node to a child.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Edge<A> {
    /// The action this edge represents.
    pub action: A,

    /// Child node (NONE if not yet expanded).
    pub child: TreeId,

    /// Visit count for this action.
    pub visits: u32,

    /// Total reward accumulated for this action (per player).
    pub total_reward: PlayerMap<f64>,
}

impl<A> Edge<A> {
    /// Create a new, unvisited edge.
    pub fn new(action: A, player_count: usize) -> Self {
        Self {
            action,
            child: TreeId::NONE,
            visits: 0,
            total_reward: PlayerMap::with_value(player_count, 0.0),
        }
    }

    /// Get the mean reward for a player.
    #[must_use]
    pub fn mean_reward(&self, player: PlayerId) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.total_reward[player] / f64::from(self.visits)
        }
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.child.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSNode<A> {
    /// Parent node (NONE for root).
    pub parent: TreeId,

    /// Index of the edge from parent that led to this node.
    pub parent_edge_idx: u16,

    /// Player to move at this node, `None` once the game is over.
    pub to_move: Option<PlayerId>,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Total visits to this node.
    pub visits: u32,

    pub is_terminal: bool,

    /// Terminal rewards (if terminal).
    pub terminal_reward: Option<PlayerMap<f64>>,

    /// Outgoing edges, one per legal action.
    pub edges: SmallVec<[Edge<A>; 8]>,
}

impl<A> MCTSNode<A> {
    pub fn new(parent: TreeId, parent_edge_idx: u16, to_move: Option<PlayerId>, depth: u16) -> Self {
        Self {
            parent,
            parent_edge_idx,
            to_move,
            depth,
            visits: 0,
            is_terminal: false,
            terminal_reward: None,
            edges: SmallVec::new(),
        }
    }

    pub fn root(to_move: Option<PlayerId>) -> Self {
        Self::new(TreeId::NONE, 0, to_move, 0)
    }

    /// Check if all edges have been expanded.
    #[must_use]
    pub fn is_fully_expanded(&self) -> bool {
        !self.edges.is_empty() && self.edges.iter().all(Edge::is_expanded)
    }

    #[must_use]
    pub fn has_unexpanded(&self) -> bool {
        self.edges.iter().any(|e| !e.is_expanded())
    }

    /// Get indices of unexpanded edges.
    pub fn unexpanded_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, e)| !e.is_expanded())
            .map(|(i, _)| i)
    }

    /// Get the edge with the most visits.
    #[must_use]
    pub fn best_edge_by_visits(&self) -> Option<&Edge<A>> {
        self.edges.iter().max_by_key(|e| e.visits)
    }

    /// Get the edge with the highest mean reward for a player.
    #[must_use]
    pub fn best_edge_by_reward(&self, player: PlayerId) -> Option<&Edge<A>> {
        self.edges
            .iter()
            .max_by(|a, b| a.mean_reward(player).total_cmp(&b.mean_reward(player)))
    }
}
