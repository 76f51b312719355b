use serde::{Deserialize, Serialize};

/// LMS parameters for one (sex, age-in-months) reference chart row.
///
/// The triple defines the population height distribution at that age:
/// `l` is the Box-Cox power, `m` the median (cm, > 0), `s` the coefficient
/// of variation (> 0). Standard in pediatric growth charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsParams {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl LmsParams {
    pub fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }
}
