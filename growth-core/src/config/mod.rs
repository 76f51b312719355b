pub mod belief_config;
pub mod recommend_config;
pub mod simulate_config;

pub use belief_config::BeliefConfig;
pub use recommend_config::RecommendConfig;
pub use simulate_config::SimulateConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{GrowthError, GrowthResult};

/// Default values shared by the config sections.
pub mod defaults {
    /// Prior mean over theta: "average child".
    pub const DEFAULT_PRIOR_MEAN: f64 = 0.0;
    /// Prior variance over theta: maximally uncertain.
    pub const DEFAULT_PRIOR_VAR: f64 = 1.0;
    /// Observation noise std in z units (measurement error plus
    /// within-person variation); variance 0.04.
    pub const DEFAULT_OBS_STD: f64 = 0.2;
    /// Monte Carlo draws for a size recommendation.
    pub const DEFAULT_RECOMMEND_SAMPLES: usize = 5000;
    /// Monte Carlo draws per simulated trajectory run.
    pub const DEFAULT_SIMULATE_SAMPLES: usize = 2000;
    /// Default forward horizon (months).
    pub const DEFAULT_MONTHS_AHEAD: u32 = 24;
    /// Monthly random-walk std of theta in z units.
    pub const DEFAULT_PROCESS_STD: f64 = 0.1;
}

/// Top-level configuration for the growth estimation workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthConfig {
    pub belief: BeliefConfig,
    pub recommend: RecommendConfig,
    pub simulate: SimulateConfig,
}

impl GrowthConfig {
    /// Parse a config from a TOML string. Missing sections and fields fall
    /// back to their defaults.
    pub fn from_toml(input: &str) -> GrowthResult<Self> {
        toml::from_str(input).map_err(|e| GrowthError::Config {
            reason: e.to_string(),
        })
    }
}
