use serde::{Deserialize, Serialize};

/// Empirical probability that a predicted height lands in one size bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeScore {
    pub code: String,
    /// Fraction of retained samples inside the bucket's `[min, max)` range.
    pub probability: f64,
}

/// Output of a size recommendation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeRecommendation {
    /// Winning size code. Ties go to the first-listed bucket.
    pub best: String,
    /// Per-bucket scores in catalog order.
    pub scores: Vec<SizeScore>,
    /// Raw predicted-height sample set, for inspection or plotting.
    pub samples: Vec<f64>,
    /// Samples dropped because the inverse LMS transform had no real
    /// solution. Always reported, never silent.
    pub dropped_samples: usize,
}
