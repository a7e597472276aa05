//! Training data generation.
//!
//! ## Overview
//!
//! - **Trajectory**: Records a complete game with states, policies, and outcome
//! - **Agent**: Chooses moves for one seat (random, MCTS or negamax)
//! - **SelfPlayWorker**: Runs MCTS-vs-itself games to generate trajectories
//!
//! ## Usage
//!
//! ```rust
//! use geodesic_y::games::GeodesicYGame;
//! use geodesic_y::training::{SelfPlayConfig, SelfPlayWorker};
//!
//! let game: GeodesicYGame = "board_size=3".parse().unwrap();
//! let encoder = Box::new(game.encoder());
//! let config = SelfPlayConfig::default().with_mcts_iterations(20);
//! let worker = SelfPlayWorker::new(game, encoder, config);
//!
//! let trajectory = worker.play_game(7);
//! assert!(trajectory.winner.is_some());
//!
//! let samples = trajectory.to_training_samples(9);
//! assert_eq!(samples.len(), trajectory.len());
//! ```

pub mod agent;
pub mod negamax;
pub mod self_play;
pub mod trajectory;

pub use agent::{Agent, MctsAgent, RandomAgent};
pub use negamax::NegamaxAgent;
pub use self_play::{play_match, SelfPlayConfig, SelfPlayWorker};
pub use trajectory::{Step, TrainingSample, Trajectory};
