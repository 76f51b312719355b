use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One height measurement after it has been incorporated into a belief.
///
/// Immutable once recorded. Carries both the derived z-score and the
/// posterior that resulted from fusing it, so the full update trail can be
/// audited or displayed without replaying the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Measurement date as supplied by the caller.
    pub date: NaiveDate,
    /// Whole calendar months since birth at `date`, clamped to 0.
    pub age_months: u32,
    /// Raw measured height (cm).
    pub height_cm: f64,
    /// LMS-standardized z-score of the measurement.
    pub z_score: f64,
    /// Posterior mean immediately after this observation was fused.
    pub posterior_mean: f64,
    /// Posterior variance immediately after this observation was fused.
    pub posterior_var: f64,
}
