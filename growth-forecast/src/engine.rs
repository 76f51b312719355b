use chrono::NaiveDate;
use rand::Rng;

use growth_belief::GrowthBelief;
use growth_core::errors::GrowthResult;
use growth_core::models::{SizeRecommendation, TrajectoryPoint};
use growth_core::traits::IReferenceChart;
use growth_core::types::SizeTable;

use crate::{recommend, simulate};

/// Forecast engine: projects a belief forward through the reference chart.
///
/// Holds the chart provider; everything else (belief, size table, sample
/// counts, RNG) is passed per call. The engine itself is stateless across
/// calls, so one instance can serve many children.
pub struct ForecastEngine<C: IReferenceChart> {
    chart: C,
}

impl<C: IReferenceChart> ForecastEngine<C> {
    pub fn new(chart: C) -> Self {
        Self { chart }
    }

    pub fn chart(&self) -> &C {
        &self.chart
    }

    /// Recommend a clothing size for `target_date`.
    ///
    /// Draws `sample_count` heights from the belief's posterior (static
    /// theta — no process noise; forward drift belongs to `simulate`) and
    /// scores each size bucket by the empirical probability that the
    /// predicted height falls inside it.
    ///
    /// Requires ≥ 1 incorporated observation (`EmptyHistory` otherwise).
    /// The bare prior would be a legitimate, if vague, posterior; requiring
    /// a grounding observation is deliberate policy, not mathematics.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        belief: &GrowthBelief,
        target_date: NaiveDate,
        sizes: &SizeTable,
        sample_count: usize,
        rng: &mut R,
    ) -> GrowthResult<SizeRecommendation> {
        recommend::run(&self.chart, belief, target_date, sizes, sample_count, rng)
    }

    /// Simulate monthly height distributions `months_ahead` months past
    /// the belief's most recent observation.
    ///
    /// Theta samples random-walk in z-space with std `process_std` per
    /// month; samples are paired by index across months, so each index is
    /// one simulated individual trajectory. Fails with `EmptyHistory` on a
    /// never-observed belief.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        belief: &GrowthBelief,
        months_ahead: u32,
        sample_count: usize,
        process_std: f64,
        rng: &mut R,
    ) -> GrowthResult<Vec<TrajectoryPoint>> {
        simulate::run(
            &self.chart,
            belief,
            months_ahead,
            sample_count,
            process_std,
            rng,
        )
    }
}
