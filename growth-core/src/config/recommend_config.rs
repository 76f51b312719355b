use serde::{Deserialize, Serialize};

use super::defaults;

/// Size recommendation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Monte Carlo draws per recommendation.
    pub sample_count: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            sample_count: defaults::DEFAULT_RECOMMEND_SAMPLES,
        }
    }
}
