//! Knobs for a single Geodesic Y search.
//!
//! Every field has a default, so a partial JSON object such as
//! `{"seed": 9}` deserializes into a usable config.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MCTSConfig {
    /// Weight of the exploration term in UCB1.
    pub exploration_constant: f64,

    /// Plies a playout may run before it is scored as a draw. Zero lets
    /// every playout fill the board, which always produces a winner.
    pub max_depth: u32,

    /// Cap on tree nodes; the search loop stops once it is reached.
    pub max_nodes: usize,

    /// Seeds the expansion shuffle, playouts and final sampling.
    pub seed: u64,

    /// Zero plays the most visited cell. Positive values sample a cell
    /// with weight `visits^(1 / temperature)`.
    pub temperature: f64,

    /// Random playouts averaged per leaf evaluation.
    pub rollouts: u32,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            exploration_constant: std::f64::consts::SQRT_2,
            max_depth: 0,
            max_nodes: 100_000,
            seed: 42,
            temperature: 0.0,
            rollouts: 1,
        }
    }
}

impl MCTSConfig {
    #[must_use]
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_max_nodes(mut self, nodes: usize) -> Self {
        self.max_nodes = nodes;
        self
    }

    #[must_use]
    pub fn with_temperature(mut self, temp: f64) -> Self {
        self.temperature = temp;
        self
    }

    /// Playouts per leaf. Zero is treated as one.
    #[must_use]
    pub fn with_rollouts(mut self, rollouts: u32) -> Self {
        self.rollouts = rollouts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MCTSConfig::default();
        assert!((config.exploration_constant - std::f64::consts::SQRT_2).abs() < 0.001);
        assert_eq!(config.max_depth, 0);
        assert_eq!(config.max_nodes, 100_000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.rollouts, 1);
    }

    #[test]
    fn test_builders_chain() {
        let config = MCTSConfig::default()
            .with_exploration(2.0)
            .with_seed(123)
            .with_max_depth(50)
            .with_max_nodes(500)
            .with_temperature(1.0)
            .with_rollouts(5);

        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.seed, 123);
        assert_eq!(config.max_depth, 50);
        assert_eq!(config.max_nodes, 500);
        assert_eq!(config.temperature, 1.0);
        assert_eq!(config.rollouts, 5);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = MCTSConfig::default().with_seed(7).with_rollouts(3);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<MCTSConfig>(&json).unwrap(), config);

        let partial: MCTSConfig = serde_json::from_str(r#"{"seed":9}"#).unwrap();
        assert_eq!(partial, MCTSConfig::default().with_seed(9));
    }
}
