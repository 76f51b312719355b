use chrono::NaiveDate;
use rand::Rng;

use growth_belief::GrowthBelief;
use growth_chart::transform;
use growth_core::errors::{GrowthError, GrowthResult};
use growth_core::models::{SizeRecommendation, SizeScore};
use growth_core::traits::IReferenceChart;
use growth_core::types::SizeTable;

use crate::sampler;

pub(crate) fn run<C, R>(
    chart: &C,
    belief: &GrowthBelief,
    target_date: NaiveDate,
    sizes: &SizeTable,
    sample_count: usize,
    rng: &mut R,
) -> GrowthResult<SizeRecommendation>
where
    C: IReferenceChart,
    R: Rng + ?Sized,
{
    if !belief.is_observed() {
        return Err(GrowthError::EmptyHistory {
            operation: "recommend".into(),
        });
    }

    let age_months = belief.age_in_months(target_date);
    let lms = chart.lookup(belief.sex(), age_months)?;

    let theta_samples = sampler::draw_posterior(belief.posterior(), sample_count, rng);

    // Map each theta sample to a predicted height. Samples with no real
    // inverse are dropped from the batch but counted, never silently lost.
    let mut heights = Vec::with_capacity(theta_samples.len());
    let mut dropped = 0usize;
    for z in theta_samples {
        match transform::z_to_height(z, lms) {
            Ok(h) => heights.push(h),
            Err(GrowthError::InvalidZRange { .. }) => dropped += 1,
            Err(e) => return Err(e),
        }
    }

    let retained = heights.len();
    let scores: Vec<SizeScore> = sizes
        .buckets()
        .iter()
        .map(|bucket| {
            let inside = heights.iter().filter(|h| bucket.contains(**h)).count();
            let probability = if retained == 0 {
                0.0
            } else {
                inside as f64 / retained as f64
            };
            SizeScore {
                code: bucket.code.clone(),
                probability,
            }
        })
        .collect();

    // Highest score wins; strict comparison keeps the first-listed bucket
    // on ties.
    let mut best: Option<&SizeScore> = None;
    for score in &scores {
        match best {
            Some(current) if score.probability <= current.probability => {}
            _ => best = Some(score),
        }
    }
    let best = best.map(|s| s.code.clone()).unwrap_or_default();

    Ok(SizeRecommendation {
        best,
        scores,
        samples: heights,
        dropped_samples: dropped,
    })
}
