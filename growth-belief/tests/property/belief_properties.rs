use chrono::NaiveDate;
use growth_belief::GrowthBelief;
use growth_chart::{ChartRow, LmsChart};
use growth_core::config::BeliefConfig;
use growth_core::types::Sex;
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn single_row_chart(m: f64, s: f64) -> LmsChart {
    LmsChart::from_rows([ChartRow {
        sex: Sex::Female,
        age_months: 24,
        l: 1.0,
        m,
        s,
    }])
}

// ── Posterior variance strictly decreases per observation ────────────────

proptest! {
    #[test]
    fn variance_strictly_decreases(
        obs_std in 0.05f64..1.0,
        heights in prop::collection::vec(60.0f64..110.0, 1..8),
    ) {
        let chart = single_row_chart(86.0, 0.04);
        let config = BeliefConfig {
            prior_mean: 0.0,
            prior_var: 1.0,
            obs_std,
        };
        let mut belief = GrowthBelief::new(Sex::Female, date(2022, 1, 28), &config);
        let when = date(2024, 1, 15);

        let mut prev = belief.posterior().var;
        for h in heights {
            belief.incorporate(&chart, when, h).unwrap();
            let var = belief.posterior().var;
            prop_assert!(var < prev, "variance not decreasing: {} >= {}", var, prev);
            prop_assert!(var > 0.0);
            prev = var;
        }
    }
}

// ── Swap symmetry at fixed age ───────────────────────────────────────────

proptest! {
    #[test]
    fn two_observations_commute_at_fixed_age(
        h_a in 60.0f64..110.0,
        h_b in 60.0f64..110.0,
    ) {
        let chart = single_row_chart(86.0, 0.04);
        let birth = date(2022, 1, 28);
        let when = date(2024, 1, 15);

        let mut ab = GrowthBelief::with_defaults(Sex::Female, birth);
        ab.incorporate(&chart, when, h_a).unwrap();
        ab.incorporate(&chart, when, h_b).unwrap();

        let mut ba = GrowthBelief::with_defaults(Sex::Female, birth);
        ba.incorporate(&chart, when, h_b).unwrap();
        ba.incorporate(&chart, when, h_a).unwrap();

        prop_assert!((ab.posterior().mean - ba.posterior().mean).abs() < 1e-10);
        prop_assert!((ab.posterior().var - ba.posterior().var).abs() < 1e-10);
    }
}

// ── Posterior mean stays between prior mean and observed z ───────────────

proptest! {
    #[test]
    fn posterior_mean_shrinks_toward_observation(
        prior_mean in -2.0f64..2.0,
        height in 60.0f64..110.0,
    ) {
        let chart = single_row_chart(86.0, 0.04);
        let config = BeliefConfig {
            prior_mean,
            prior_var: 1.0,
            obs_std: 0.2,
        };
        let mut belief = GrowthBelief::new(Sex::Female, date(2022, 1, 28), &config);
        belief.incorporate(&chart, date(2024, 1, 15), height).unwrap();

        let z = belief.history()[0].z_score;
        let post = belief.posterior().mean;
        let lo = prior_mean.min(z) - 1e-10;
        let hi = prior_mean.max(z) + 1e-10;
        prop_assert!(
            post >= lo && post <= hi,
            "posterior mean {} outside [{}, {}]", post, lo, hi
        );
    }
}
