//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references for efficiency,
//! cache-friendliness, and serializability.

use serde::{Deserialize, Serialize};

use super::node::{MCTSNode, TreeId};
use crate::core::PlayerId;

/// Arena-based MCTS tree over actions of type `A`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MCTSTree<A> {
    nodes: Vec<MCTSNode<A>>,

    /// The root node ID (always 0 after a reset).
    root: TreeId,

    player_count: usize,
}

impl<A> MCTSTree<A> {
    /// Create a new tree with a root node.
    pub fn new(root_player: Option<PlayerId>, player_count: usize) -> Self {
        Self::with_capacity(root_player, player_count, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(root_player: Option<PlayerId>, player_count: usize, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root(root_player));
        Self {
            nodes,
            root: TreeId::new(0),
            player_count,
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> TreeId {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: TreeId) -> &MCTSNode<A> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: TreeId) -> &mut MCTSNode<A> {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node, returning its ID.
    pub fn alloc(&mut self, node: MCTSNode<A>) -> TreeId {
        let id = TreeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let terminal_count = self.nodes.iter().filter(|n| n.is_terminal).count();
        let total_edges: usize = self.nodes.iter().map(|n| n.edges.len()).sum();
        let expanded_edges = self
            .nodes
            .iter()
            .flat_map(|n| n.edges.iter())
            .filter(|e| e.is_expanded())
            .count();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count,
            total_edges,
            expanded_edges,
        }
    }

    /// Clear the tree and reset with a new root.
    pub fn reset(&mut self, root_player: Option<PlayerId>) {
        self.nodes.clear();
        self.nodes.push(MCTSNode::root(root_player));
        self.root = TreeId::new(0);
    }

    #[must_use]
    pub fn root_node(&self) -> &MCTSNode<A> {
        self.get(self.root)
    }

    pub fn root_node_mut(&mut self) -> &mut MCTSNode<A> {
        let root = self.root;
        self.get_mut(root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (TreeId, &MCTSNode<A>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (TreeId::new(i as u32), n))
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeStats {
    pub node_count: usize,

    pub max_depth: u16,

    /// Nodes holding a finished game.
    pub terminal_count: usize,

    /// Total number of edges (actions).
    pub total_edges: usize,

    /// Number of edges with a child node.
    pub expanded_edges: usize,
}

impl TreeStats {
    /// Average edges per node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        if self.node_count == 0 {
            0.0
        } else {
            self.total_edges as f64 / self.node_count as f64
        }
    }

    /// Expanded edges over total edges.
    #[must_use]
    pub fn expansion_ratio(&self) -> f64 {
        if self.total_edges == 0 {
            0.0
        } else {
            self.expanded_edges as f64 / self.total_edges as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;
    use crate::mcts::node::Edge;

    #[test]
    fn test_tree_new_and_alloc() {
        let mut tree: MCTSTree<Node> = MCTSTree::new(Some(PlayerId::FIRST), 2);
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root(), TreeId::new(0));

        let child_id = tree.alloc(MCTSNode::new(tree.root(), 0, Some(PlayerId::SECOND), 1));

        assert_eq!(child_id, TreeId::new(1));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(child_id).to_move, Some(PlayerId::SECOND));
    }

    #[test]
    fn test_tree_reset() {
        let mut tree: MCTSTree<Node> = MCTSTree::new(Some(PlayerId::FIRST), 2);
        tree.alloc(MCTSNode::new(TreeId::new(0), 0, Some(PlayerId::SECOND), 1));
        tree.root_node_mut().visits = 7;

        tree.reset(Some(PlayerId::SECOND));

        assert_eq!(tree.len(), 1);
        assert_eq!(tree.root_node().to_move, Some(PlayerId::SECOND));
        assert_eq!(tree.root_node().visits, 0);
    }

    #[test]
    fn test_tree_stats() {
        let mut tree = MCTSTree::new(Some(PlayerId::FIRST), 2);

        let root = tree.root();
        tree.get_mut(root).edges.push(Edge::new(Node::new(1), 2));
        tree.get_mut(root).edges.push(Edge::new(Node::new(2), 2));

        let child_id = tree.alloc(MCTSNode::new(root, 0, None, 1));
        tree.get_mut(root).edges[0].child = child_id;
        tree.get_mut(child_id).is_terminal = true;

        let stats = tree.stats();

        assert_eq!(stats.node_count, 2);
        assert_eq!(stats.max_depth, 1);
        assert_eq!(stats.terminal_count, 1);
        assert_eq!(stats.total_edges, 2);
        assert_eq!(stats.expanded_edges, 1);
        assert_eq!(stats.expansion_ratio(), 0.5);
        assert_eq!(stats.branching_factor(), 1.0);
    }

    #[test]
    fn test_tree_serialization() {
        let mut tree: MCTSTree<Node> = MCTSTree::new(Some(PlayerId::FIRST), 2);
        tree.root_node_mut().visits = 50;
        tree.alloc(MCTSNode::new(TreeId::new(0), 0, Some(PlayerId::SECOND), 1));

        let json = serde_json::to_string(&tree).unwrap();
        let deserialized: MCTSTree<Node> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 2);
        assert_eq!(deserialized.player_count(), 2);
        assert_eq!(deserialized.root_node().visits, 50);
        assert_eq!(deserialized.iter().count(), 2);
    }
}
