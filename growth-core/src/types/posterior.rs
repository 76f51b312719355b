use serde::{Deserialize, Serialize};

/// Read-only snapshot of a belief's current posterior over theta,
/// the child's persistent relative growth position in z-space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Posterior {
    pub mean: f64,
    pub var: f64,
}

impl Posterior {
    pub fn new(mean: f64, var: f64) -> Self {
        Self { mean, var }
    }

    /// Standard deviation of the posterior.
    pub fn std(self) -> f64 {
        self.var.sqrt()
    }
}
