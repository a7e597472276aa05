//! Board node identifiers.
//!
//! Nodes are numbered densely from 0, ring by ring from the center of the
//! triangle outward, and within a ring run by run (right, bottom, left).

use serde::{Deserialize, Serialize};

/// Identifier of one cell of the board.
///
/// Node ids double as action ids: playing on node `n` is action `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Node(pub u16);

impl Node {
    /// Create a node id.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Index into per-node tables.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for Node {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl From<Node> for usize {
    fn from(node: Node) -> Self {
        node.index()
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_basics() {
        let node = Node::new(7);

        assert_eq!(node.index(), 7);
        assert_eq!(node.raw(), 7);
        assert_eq!(Node::from(7u16), node);
        assert_eq!(usize::from(node), 7);
        assert_eq!(format!("{}", node), "7");
    }

    #[test]
    fn test_node_ordering() {
        let mut nodes = vec![Node(3), Node(0), Node(2)];
        nodes.sort();
        assert_eq!(nodes, vec![Node(0), Node(2), Node(3)]);
    }
}
