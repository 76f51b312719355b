use growth_core::errors::{GrowthError, GrowthResult};
use growth_core::types::LmsParams;

/// Convert a raw height (cm) to a population z-score.
///
/// `z = ((h/M)^L − 1) / (L·S)` when `L ≠ 0`, `ln(h/M) / S` when `L = 0`
/// (the degenerate log-normal case).
///
/// Preconditions: `height_cm > 0`, `M > 0`, `S > 0`. Callers guard the
/// height domain (the belief model rejects non-positive heights before
/// reaching this function).
pub fn height_to_z(height_cm: f64, lms: LmsParams) -> f64 {
    let LmsParams { l, m, s } = lms;
    if l != 0.0 {
        ((height_cm / m).powf(l) - 1.0) / (l * s)
    } else {
        (height_cm / m).ln() / s
    }
}

/// Convert a z-score back to a height (cm) — exact algebraic inverse of
/// `height_to_z`.
///
/// `M·(1 + L·S·z)^(1/L)` when `L ≠ 0`, valid only while `1 + L·S·z > 0`;
/// outside that domain the inversion has no real solution and fails with
/// `InvalidZRange` rather than producing a complex or negative height.
/// `M·exp(S·z)` when `L = 0`.
pub fn z_to_height(z: f64, lms: LmsParams) -> GrowthResult<f64> {
    let LmsParams { l, m, s } = lms;
    if l != 0.0 {
        let base = 1.0 + l * s * z;
        if base <= 0.0 {
            return Err(GrowthError::InvalidZRange { z, l, m, s });
        }
        Ok(m * base.powf(1.0 / l))
    } else {
        Ok(m * (s * z).exp())
    }
}
