//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Counters collected during one search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Iterations performed.
    pub iterations: u32,

    /// Nodes expanded (added to the tree).
    pub nodes_expanded: u32,

    /// Random rollouts performed.
    pub simulations: u32,

    /// Iterations that ended on an already known terminal node.
    pub terminal_hits: u32,

    /// Deepest node created.
    pub max_depth: u16,

    /// Wall time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        Self::per_second(self.iterations, self.time_us)
    }

    #[must_use]
    pub fn simulations_per_second(&self) -> f64 {
        Self::per_second(self.simulations, self.time_us)
    }

    /// Average nodes expanded per iteration.
    #[must_use]
    pub fn avg_nodes_per_iteration(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            f64::from(self.nodes_expanded) / f64::from(self.iterations)
        }
    }

    fn per_second(count: u32, time_us: u64) -> f64 {
        if time_us == 0 {
            0.0
        } else {
            f64::from(count) / (time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rates() {
        let mut stats = SearchStats::new();
        assert_eq!(stats.iterations_per_second(), 0.0);

        stats.iterations = 1000;
        stats.simulations = 500;
        stats.nodes_expanded = 250;
        stats.time_us = 1_000_000;

        assert_eq!(stats.iterations_per_second(), 1000.0);
        assert_eq!(stats.simulations_per_second(), 500.0);
        assert_eq!(stats.avg_nodes_per_iteration(), 0.25);
    }

    #[test]
    fn test_reset() {
        let mut stats = SearchStats::new();
        stats.iterations = 100;
        stats.terminal_hits = 3;

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }
}
