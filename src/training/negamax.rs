//! Fixed-depth alpha-beta opponent for Geodesic Y.

use tracing::debug;

use crate::board::GeodesicYState;
use crate::core::PlayerId;
use crate::graph::Node;

use super::agent::Agent;

/// Plies searched when no depth is given.
pub const DEFAULT_DEPTH: u32 = 4;

/// Negamax with alpha-beta pruning over a connectivity heuristic.
///
/// Leaves score `+inf`/`-inf` for a decided game and otherwise count
/// same-colour adjacencies of the side to move. Ties go to the lowest
/// numbered cell.
#[derive(Clone, Debug)]
pub struct NegamaxAgent {
    depth: u32,
}

impl NegamaxAgent {
    pub fn new(depth: u32) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Default for NegamaxAgent {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Agent<GeodesicYState> for NegamaxAgent {
    fn choose_action(&mut self, state: &GeodesicYState) -> Option<Node> {
        let legal = state.legal_actions();
        let mut best = *legal.first()?;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;

        for node in legal {
            let mut child = state.clone();
            child.apply_move(node);
            let value = -negamax(&child, self.depth.saturating_sub(1), -beta, -alpha);
            if value > alpha {
                alpha = value;
                best = node;
            }
            if alpha >= beta {
                break;
            }
        }

        debug!(depth = self.depth, %best, value = alpha, "negamax move");
        Some(best)
    }

    fn name(&self) -> &str {
        "negamax"
    }
}

fn negamax(state: &GeodesicYState, depth: u32, mut alpha: f64, beta: f64) -> f64 {
    let value = evaluate(state);
    if value.is_infinite() || depth == 0 {
        return value;
    }

    let mut best = f64::NEG_INFINITY;
    for node in state.legal_actions() {
        let mut child = state.clone();
        child.apply_move(node);
        let child_value = -negamax(&child, depth - 1, -beta, -alpha);
        best = best.max(child_value);
        alpha = alpha.max(child_value);
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Score `state` for the player to move.
pub fn evaluate(state: &GeodesicYState) -> f64 {
    let to_move = state.current_player();
    match state.winner() {
        Some(winner) if winner == to_move => f64::INFINITY,
        Some(_) => f64::NEG_INFINITY,
        None => f64::from(same_colour_adjacencies(state, to_move)),
    }
}

/// Each stone of `player` counts its neighbours of the same colour, so every
/// connected pair contributes two.
fn same_colour_adjacencies(state: &GeodesicYState, player: PlayerId) -> u32 {
    let graph = state.graph();
    graph
        .nodes()
        .filter(|&node| state.owner(node) == Some(player))
        .map(|node| {
            graph
                .neighbors(node)
                .iter()
                .filter(|&&n| state.owner(n) == Some(player))
                .count() as u32
        })
        .sum()
}
