//! # geodesic-y
//!
//! Rules engine for Geodesic Y, a two-player connection game played on the
//! cells of a recursively subdivided triangle. Players alternately claim
//! empty cells; the first to own a connected group touching all three sides
//! wins. The game can never end in a draw.
//!
//! ## Design Principles
//!
//! 1. **Shared Topology**: the cell graph depends only on the board order.
//!    It is generated once per order and shared behind an `Arc`.
//!
//! 2. **Incremental Win Detection**: cells form a union-find forest whose
//!    leaders carry group size and the union of touched sides, so a move
//!    costs near-constant time.
//!
//! 3. **Search Friendly**: states are cheap to clone and every generic
//!    driver (MCTS, self-play) only talks to the `Game`/`GameState` traits.
//!
//! ## Modules
//!
//! - `graph`: node ids, side masks, graph generation and caching
//! - `board`: game state, union-find, text rendering
//! - `core`: players, configuration, move records, RNG
//! - `rules`: `Game` and `GameState` traits
//! - `games`: the `GeodesicYGame` definition
//! - `nn`: tensor encoding of states
//! - `mcts`: Monte Carlo Tree Search
//! - `training`: agents, self-play and trajectories
//!
//! ## Example
//!
//! ```rust
//! use geodesic_y::{GeodesicYState, Node, PlayerId};
//!
//! let mut state = GeodesicYState::new(2);
//! for cell in [0, 1, 2] {
//!     state.apply_move(Node::new(cell));
//! }
//! assert_eq!(state.winner(), Some(PlayerId::FIRST));
//! ```

pub mod board;
pub mod core;
pub mod error;
pub mod games;
pub mod graph;
pub mod mcts;
pub mod nn;
pub mod rules;
pub mod training;

// Re-export commonly used types
pub use crate::board::{Cell, GeodesicYState, Outcome, PLAYER_COUNT};

pub use crate::core::{ActionRecord, GameConfig, GameRng, PlayerId, PlayerMap, GAME_NAME};

pub use crate::error::{ConfigError, GeodesicError};

pub use crate::games::GeodesicYGame;

pub use crate::graph::{shared_graph, EdgeMask, GeodesicGraph, Node, Side};

pub use crate::rules::{Game, GameResult, GameState};

pub use crate::mcts::{
    MCTSConfig, MCTSSearch, MCTSTree, RandomSimulation, SearchStats, SelectionPolicy,
    SimulationPolicy, UCB1,
};

pub use crate::nn::{EncodedState, GeodesicYEncoder, StateEncoder};

pub use crate::training::{SelfPlayConfig, SelfPlayWorker, Trajectory};
