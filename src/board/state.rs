//! Board state: stone placement and incremental win detection.
//!
//! ## Union-find
//!
//! Every cell is a union-find entry addressed by its `Node`. A new stone is
//! merged with each same-colored neighbor, and the group leader carries the
//! OR of its members' side masks. A move wins as soon as the mover's leader
//! touches all three sides, so the win check never scans the board.
//!
//! - `find_leader` points the queried node straight at its root
//!   (single-hop compression).
//! - `join_groups` is union by size; the first argument's leader absorbs
//!   on ties.
//!
//! ## Cloning
//!
//! Cloning deep-copies the cells and shares the graph. The move history is
//! an `im::Vector`, so branches share their common prefix.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::cell::Cell;
use crate::core::{ActionRecord, PlayerId, PlayerMap};
use crate::error::GeodesicError;
use crate::graph::{shared_graph, EdgeMask, GeodesicGraph, Node};

/// Number of players in Geodesic Y.
pub const PLAYER_COUNT: usize = 2;

/// Game outcome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No group spans all three sides yet.
    #[default]
    Undecided,
    /// The player connected all three sides.
    Won(PlayerId),
}

impl Outcome {
    /// The winner, if any.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            Outcome::Undecided => None,
            Outcome::Won(player) => Some(player),
        }
    }

    #[must_use]
    pub const fn is_decided(self) -> bool {
        matches!(self, Outcome::Won(_))
    }
}

/// A Geodesic Y game in progress.
#[derive(Clone, Debug)]
pub struct GeodesicYState {
    graph: Arc<GeodesicGraph>,
    cells: Vec<Cell>,
    current_player: PlayerId,
    outcome: Outcome,
    moves_made: u32,
    last_move: Option<Node>,
    history: im::Vector<ActionRecord<Node>>,
    ansi_color_output: bool,
}

impl GeodesicYState {
    /// Start a game on a board of the given order.
    ///
    /// # Panics
    ///
    /// Panics if `order` is below 2 or too large to index with a `Node`.
    #[must_use]
    pub fn new(order: u16) -> Self {
        match Self::try_new(order) {
            Ok(state) => state,
            Err(err) => panic!("cannot create geodesic y board: {err}"),
        }
    }

    /// Start a game, reporting an invalid order as an error.
    pub fn try_new(order: u16) -> Result<Self, GeodesicError> {
        shared_graph(order).map(Self::with_graph)
    }

    /// Start a game on an already built graph.
    #[must_use]
    pub fn with_graph(graph: Arc<GeodesicGraph>) -> Self {
        let cells = graph
            .nodes()
            .map(|node| Cell::new(node, graph.edge_mask(node)))
            .collect();

        Self {
            graph,
            cells,
            current_player: PlayerId::FIRST,
            outcome: Outcome::Undecided,
            moves_made: 0,
            last_move: None,
            history: im::Vector::new(),
            ansi_color_output: false,
        }
    }

    /// Enable or disable ANSI colors in the board rendering.
    #[must_use]
    pub fn with_ansi_color_output(mut self, enabled: bool) -> Self {
        self.ansi_color_output = enabled;
        self
    }

    // === Queries ===

    /// The shared board graph.
    #[must_use]
    pub fn graph(&self) -> &Arc<GeodesicGraph> {
        &self.graph
    }

    /// Board order.
    #[must_use]
    pub fn order(&self) -> u16 {
        self.graph.order()
    }

    /// Number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// # Panics
    ///
    /// Panics if `node` is off the board.
    #[must_use]
    pub fn cell(&self, node: Node) -> &Cell {
        &self.cells[node.index()]
    }

    /// Stone on `node`, `None` when empty.
    #[must_use]
    pub fn owner(&self, node: Node) -> Option<PlayerId> {
        self.cell(node).owner
    }

    /// Player to move. After the game ends this is the loser, since the turn
    /// still passes on the winning move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.outcome.winner()
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Stones placed so far.
    #[must_use]
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    #[must_use]
    pub fn last_move(&self) -> Option<Node> {
        self.last_move
    }

    /// Every move in the order it was played.
    #[must_use]
    pub fn history(&self) -> &im::Vector<ActionRecord<Node>> {
        &self.history
    }

    #[must_use]
    pub fn ansi_color_output(&self) -> bool {
        self.ansi_color_output
    }

    /// Empty cells in ascending order, or nothing once the game is over.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Node> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.graph
            .nodes()
            .filter(|&node| self.cell(node).is_empty())
            .collect()
    }

    /// Per-player returns: `+1` for the winner, `-1` for the loser, zero
    /// for both while undecided.
    #[must_use]
    pub fn returns(&self) -> PlayerMap<f64> {
        PlayerMap::new(PLAYER_COUNT, |player| match self.outcome {
            Outcome::Undecided => 0.0,
            Outcome::Won(winner) if winner == player => 1.0,
            Outcome::Won(_) => -1.0,
        })
    }

    // === Moves ===

    /// Place the current player's stone on `node`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is occupied, the node is off the board or the game
    /// is already decided.
    pub fn apply_move(&mut self, node: Node) {
        if let Err(err) = self.try_apply_move(node) {
            panic!("illegal move {node}: {err}");
        }
    }

    /// Place the current player's stone on `node`, rejecting illegal moves.
    ///
    /// On error the state is unchanged.
    pub fn try_apply_move(&mut self, node: Node) -> Result<(), GeodesicError> {
        if self.is_terminal() {
            return Err(GeodesicError::GameOver);
        }
        if !self.graph.contains(node) {
            return Err(GeodesicError::NodeOutOfRange {
                node,
                cells: self.cells.len(),
            });
        }
        if !self.cell(node).is_empty() {
            return Err(GeodesicError::CellOccupied(node));
        }

        self.place(node);
        Ok(())
    }

    fn place(&mut self, node: Node) {
        let player = self.current_player;

        self.history
            .push_back(ActionRecord::new(player, node, self.moves_made));
        self.cells[node.index()].owner = Some(player);
        self.moves_made += 1;
        self.last_move = Some(node);
        trace!(%player, %node, ply = self.moves_made, "placed stone");

        let graph = Arc::clone(&self.graph);
        for &neighbor in graph.neighbors(node) {
            if self.cell(neighbor).is_owned_by(player) {
                self.join_groups(node, neighbor);
            }
        }

        let leader = self.find_leader(node);
        if self.cell(leader).edges.is_complete() {
            self.outcome = Outcome::Won(player);
            debug!(%player, moves = self.moves_made, "game won");
        }

        self.current_player = player.opponent();
    }

    // === Union-find ===

    /// Leader of `node`'s group, compressing `node` onto it.
    pub fn find_leader(&mut self, node: Node) -> Node {
        let leader = self.leader(node);
        self.cells[node.index()].parent = leader;
        leader
    }

    /// Leader of `node`'s group without touching any parent links.
    #[must_use]
    pub fn leader(&self, node: Node) -> Node {
        let mut current = node;
        loop {
            let parent = self.cell(current).parent;
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    /// Merge the groups of `a` and `b`.
    ///
    /// Returns `true` if they were already in the same group.
    pub fn join_groups(&mut self, a: Node, b: Node) -> bool {
        let mut leader_a = self.find_leader(a);
        let mut leader_b = self.find_leader(b);
        if leader_a == leader_b {
            return true;
        }

        if self.cell(leader_a).size < self.cell(leader_b).size {
            std::mem::swap(&mut leader_a, &mut leader_b);
        }

        let absorbed = self.cells[leader_b.index()];
        self.cells[leader_b.index()].parent = leader_a;

        let leader = &mut self.cells[leader_a.index()];
        leader.size += absorbed.size;
        leader.edges |= absorbed.edges;
        trace!(leader = %leader_a, absorbed = %leader_b, size = leader.size, edges = %leader.edges, "joined groups");

        false
    }

    /// Number of cells in `node`'s group.
    #[must_use]
    pub fn group_size(&self, node: Node) -> usize {
        usize::from(self.cell(self.leader(node)).size)
    }

    /// Sides touched by `node`'s group.
    #[must_use]
    pub fn group_edges(&self, node: Node) -> EdgeMask {
        self.cell(self.leader(node)).edges
    }
}
