use serde::{Deserialize, Serialize};

use super::defaults;

/// Belief model configuration: the theta prior and observation noise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BeliefConfig {
    /// Prior mean of theta (relative growth position in z units).
    pub prior_mean: f64,
    /// Prior variance of theta.
    pub prior_var: f64,
    /// Observation noise standard deviation in z units.
    pub obs_std: f64,
}

impl BeliefConfig {
    /// Observation noise variance used by the conjugate update.
    pub fn obs_var(&self) -> f64 {
        self.obs_std * self.obs_std
    }
}

impl Default for BeliefConfig {
    fn default() -> Self {
        Self {
            prior_mean: defaults::DEFAULT_PRIOR_MEAN,
            prior_var: defaults::DEFAULT_PRIOR_VAR,
            obs_std: defaults::DEFAULT_OBS_STD,
        }
    }
}
