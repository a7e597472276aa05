//! Monte Carlo Tree Search over any `GameState`.
//!
//! ## Overview
//!
//! - **UCT**: every node is expanded with all legal actions, children are
//!   picked with UCB1 from the perspective of the player to move
//! - **Rollouts**: leaves are scored by uniform random playouts
//! - **N-Player Rewards**: each edge accumulates rewards per player
//!   (win 1, loss 0, draw 0.5)
//! - **Deterministic**: the same seed gives the same search
//! - **Serializable**: tree and config can be saved/loaded
//!
//! ## Usage
//!
//! ```rust
//! use geodesic_y::board::GeodesicYState;
//! use geodesic_y::mcts::{MCTSConfig, MCTSSearch};
//!
//! let state = GeodesicYState::new(4);
//! let mut search = MCTSSearch::new(MCTSConfig::default().with_seed(7));
//!
//! let action = search.search(&state, 200).expect("game is not over");
//! assert!(state.legal_actions().contains(&action));
//!
//! // Visit distribution for training
//! let probs = search.action_probabilities();
//! let total: f64 = probs.iter().map(|(_, p)| p).sum();
//! assert!((total - 1.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod node;
pub mod policy;
pub mod search;
pub mod stats;
pub mod tree;

pub use config::MCTSConfig;
pub use node::{Edge, MCTSNode, TreeId};
pub use policy::{RandomSimulation, SelectionPolicy, SimulationPolicy, UCB1};
pub use search::MCTSSearch;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
