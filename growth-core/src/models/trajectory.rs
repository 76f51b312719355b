use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One month of a forward growth simulation.
///
/// Samples are paired by index across a run's points: index i at month m is
/// the random-walk continuation of index i at month m−1, so each index
/// traces one simulated individual trajectory. Dropped samples (no real
/// inverse LMS solution at that month) are excluded from `heights` and
/// counted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Months after the simulation origin (0 = origin itself).
    pub month_offset: u32,
    pub date: NaiveDate,
    pub age_months: u32,
    /// Simulated heights (cm) at this month.
    pub heights: Vec<f64>,
    pub dropped_samples: usize,
}

/// Percentile summary of one trajectory point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryBand {
    pub month_offset: u32,
    pub date: NaiveDate,
    pub age_months: u32,
    pub mean: f64,
    pub p5: f64,
    pub p50: f64,
    pub p95: f64,
}

/// Probability of having outgrown a given size at one future month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutgrowPoint {
    pub month_offset: u32,
    pub date: NaiveDate,
    /// Fraction of simulated heights strictly above the size's upper bound.
    pub prob_over: f64,
}
