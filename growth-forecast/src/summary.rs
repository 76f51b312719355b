use growth_core::models::{TrajectoryBand, TrajectoryPoint};

/// Reduce each trajectory point's sample set to mean and 5th/50th/95th
/// percentile bands.
///
/// A point whose samples were all dropped yields NaN statistics; callers
/// that care should check `dropped_samples` on the points first.
pub fn summarize(points: &[TrajectoryPoint]) -> Vec<TrajectoryBand> {
    points
        .iter()
        .map(|p| {
            let mut sorted = p.heights.clone();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            TrajectoryBand {
                month_offset: p.month_offset,
                date: p.date,
                age_months: p.age_months,
                mean: mean(&p.heights),
                p5: percentile(&sorted, 5.0),
                p50: percentile(&sorted, 50.0),
                p95: percentile(&sorted, 95.0),
            }
        })
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Linear-interpolation percentile over an already sorted slice.
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = (pct / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
