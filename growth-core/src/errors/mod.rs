use chrono::NaiveDate;

use crate::types::Sex;

/// Result alias used across the workspace.
pub type GrowthResult<T> = Result<T, GrowthError>;

/// Error taxonomy for the growth estimation core.
///
/// Every variant carries the inputs that triggered it so failures can be
/// diagnosed without replaying the call. All failures are deterministic
/// given the same inputs; nothing here is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GrowthError {
    /// No reference chart row for the requested (sex, age) key. Indicates a
    /// data-coverage gap, not a transient fault.
    #[error("no reference chart row for sex={sex}, age_months={age_months}")]
    ChartMissing { sex: Sex, age_months: u32 },

    /// Observation input outside the model's domain. The observation is
    /// rejected and the belief left unchanged.
    #[error("invalid observation on {date}: height={height_cm}cm ({reason})")]
    InvalidObservation {
        date: NaiveDate,
        height_cm: f64,
        reason: String,
    },

    /// The inverse LMS transform has no real solution for this z-score
    /// (requires 1 + L·S·z > 0 when L ≠ 0).
    #[error("inverse LMS undefined for z={z} with L={l}, M={m}, S={s}")]
    InvalidZRange { z: f64, l: f64, m: f64, s: f64 },

    /// A projection or simulation was requested on a belief with no
    /// incorporated observations.
    #[error("{operation} requires at least one incorporated observation")]
    EmptyHistory { operation: String },

    /// Size code absent from the supplied catalog table.
    #[error("unknown size code: {code}")]
    UnknownSize { code: String },

    /// Malformed configuration input.
    #[error("config error: {reason}")]
    Config { reason: String },
}
