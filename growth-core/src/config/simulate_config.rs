use serde::{Deserialize, Serialize};

use super::defaults;

/// Trajectory simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulateConfig {
    /// Monte Carlo draws per simulation run.
    pub sample_count: usize,
    /// Forward horizon in months.
    pub months_ahead: u32,
    /// Monthly random-walk standard deviation of theta (z units).
    pub process_std: f64,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            sample_count: defaults::DEFAULT_SIMULATE_SAMPLES,
            months_ahead: defaults::DEFAULT_MONTHS_AHEAD,
            process_std: defaults::DEFAULT_PROCESS_STD,
        }
    }
}
