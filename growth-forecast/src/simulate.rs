use chrono::Months;
use rand::Rng;

use growth_belief::GrowthBelief;
use growth_chart::transform;
use growth_core::errors::{GrowthError, GrowthResult};
use growth_core::models::TrajectoryPoint;
use growth_core::traits::IReferenceChart;

use crate::sampler;

pub(crate) fn run<C, R>(
    chart: &C,
    belief: &GrowthBelief,
    months_ahead: u32,
    sample_count: usize,
    process_std: f64,
    rng: &mut R,
) -> GrowthResult<Vec<TrajectoryPoint>>
where
    C: IReferenceChart,
    R: Rng + ?Sized,
{
    let origin = belief
        .last_observation_date()
        .ok_or_else(|| GrowthError::EmptyHistory {
            operation: "simulate".into(),
        })?;

    let mut theta_samples = sampler::draw_posterior(belief.posterior(), sample_count, rng);

    let mut points = Vec::with_capacity(months_ahead as usize + 1);
    for month_offset in 0..=months_ahead {
        // Offset 0 uses the posterior draws as-is; every later month adds
        // one step of z-space random walk to each sample, keeping index
        // pairing across months.
        if month_offset > 0 {
            sampler::add_process_noise(&mut theta_samples, process_std, rng);
        }

        let date = origin
            .checked_add_months(Months::new(month_offset))
            .ok_or_else(|| GrowthError::Config {
                reason: format!("target date out of range at month offset {month_offset}"),
            })?;
        let age_months = belief.age_in_months(date);
        let lms = chart.lookup(belief.sex(), age_months)?;

        let mut heights = Vec::with_capacity(theta_samples.len());
        let mut dropped = 0usize;
        for &z in &theta_samples {
            match transform::z_to_height(z, lms) {
                Ok(h) => heights.push(h),
                Err(GrowthError::InvalidZRange { .. }) => dropped += 1,
                Err(e) => return Err(e),
            }
        }

        points.push(TrajectoryPoint {
            month_offset,
            date,
            age_months,
            heights,
            dropped_samples: dropped,
        });
    }

    Ok(points)
}
