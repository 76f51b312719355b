use chrono::NaiveDate;
use growth_belief::GrowthBelief;
use growth_chart::{ChartRow, LmsChart};
use growth_core::types::{Sex, SizeBucket, SizeTable};
use growth_forecast::{outgrow_curve, summarize, ForecastEngine};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn chart(slope: f64, s: f64) -> LmsChart {
    LmsChart::from_rows((0..=96).map(|age_months| ChartRow {
        sex: Sex::Female,
        age_months,
        l: 1.0,
        m: 75.0 + slope * age_months as f64,
        s,
    }))
}

fn observed(chart: &LmsChart, height: f64) -> GrowthBelief {
    let mut belief = GrowthBelief::with_defaults(Sex::Female, date(2021, 3, 5));
    belief.incorporate(chart, date(2023, 3, 15), height).unwrap();
    belief
}

// ── Bucket probabilities form a distribution over a gap-free cover ───────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn scores_sum_to_one_over_full_cover(
        seed in 0u64..1000,
        height in 80.0f64..100.0,
        sample_count in 200usize..2000,
    ) {
        let chart = chart(0.5, 0.04);
        let belief = observed(&chart, height);
        let engine = ForecastEngine::new(chart.clone());
        let mut rng = StdRng::seed_from_u64(seed);

        // Gap-free cover of every height the transform can produce here.
        let sizes = SizeTable::new(vec![
            SizeBucket::new("A", 0.0, 80.0),
            SizeBucket::new("B", 80.0, 90.0),
            SizeBucket::new("C", 90.0, 100.0),
            SizeBucket::new("D", 100.0, 1000.0),
        ]);

        let rec = engine
            .recommend(&belief, date(2023, 9, 15), &sizes, sample_count, &mut rng)
            .unwrap();

        prop_assert_eq!(rec.dropped_samples, 0);
        let total: f64 = rec.scores.iter().map(|s| s.probability).sum();
        prop_assert!((total - 1.0).abs() < 1e-9, "total = {}", total);

        // The winner's score is the maximum.
        let best = rec.scores.iter().find(|s| s.code == rec.best).unwrap();
        prop_assert!(rec.scores.iter().all(|s| s.probability <= best.probability));
    }
}

// ── Summaries are ordered and sized like their run ───────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]
    #[test]
    fn summary_bands_are_ordered(
        seed in 0u64..1000,
        months_ahead in 1u32..24,
        process_std in 0.0f64..0.5,
    ) {
        let chart = chart(0.5, 0.04);
        let belief = observed(&chart, 88.0);
        let engine = ForecastEngine::new(chart.clone());
        let mut rng = StdRng::seed_from_u64(seed);

        let points = engine
            .simulate(&belief, months_ahead, 500, process_std, &mut rng)
            .unwrap();
        prop_assert_eq!(points.len() as u32, months_ahead + 1);

        let bands = summarize(&points);
        prop_assert_eq!(bands.len(), points.len());
        for band in &bands {
            prop_assert!(band.p5 <= band.p50);
            prop_assert!(band.p50 <= band.p95);
            prop_assert!(band.mean >= band.p5 - 1e-9);
            prop_assert!(band.mean <= band.p95 + 1e-9);
        }
    }
}

// ── Outgrow probabilities are proper probabilities ───────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]
    #[test]
    fn outgrow_probs_stay_in_unit_interval(
        seed in 0u64..1000,
        h_max in 80.0f64..120.0,
        process_std in 0.0f64..0.5,
    ) {
        let chart = chart(0.5, 0.04);
        let belief = observed(&chart, 88.0);
        let engine = ForecastEngine::new(chart.clone());
        let mut rng = StdRng::seed_from_u64(seed);

        let sizes = SizeTable::new(vec![SizeBucket::new("cur", 70.0, h_max)]);
        let points = engine
            .simulate(&belief, 12, 400, process_std, &mut rng)
            .unwrap();
        let curve = outgrow_curve(&points, &sizes, "cur").unwrap();

        prop_assert_eq!(curve.len(), points.len());
        for p in &curve {
            prop_assert!((0.0..=1.0).contains(&p.prob_over));
        }
    }
}
