use growth_chart::{height_to_z, z_to_height};
use growth_core::types::LmsParams;
use proptest::prelude::*;

// ── Round-trip symmetry, L ≠ 0 ───────────────────────────────────────────

proptest! {
    #[test]
    fn height_round_trips_through_z(
        l in prop_oneof![-2.0f64..-0.05, 0.05f64..2.0],
        m in 45.0f64..130.0,
        s in 0.01f64..0.15,
        height in 40.0f64..160.0,
    ) {
        let lms = LmsParams::new(l, m, s);
        let z = height_to_z(height, lms);
        // Extreme (L, S, h/M) combinations can leave the invertible domain;
        // the property only binds where a real inverse exists.
        if let Ok(back) = z_to_height(z, lms) {
            prop_assert!(
                (back - height).abs() / height < 1e-6,
                "h={} -> z={} -> {}", height, z, back
            );
        }
    }
}

// ── Round-trip symmetry, L = 0 ───────────────────────────────────────────

proptest! {
    #[test]
    fn z_round_trips_through_height_log_normal(
        m in 45.0f64..130.0,
        s in 0.01f64..0.15,
        z in -5.0f64..5.0,
    ) {
        let lms = LmsParams::new(0.0, m, s);
        let h = z_to_height(z, lms).unwrap();
        let back = height_to_z(h, lms);
        prop_assert!((back - z).abs() < 1e-8, "z={} -> h={} -> {}", z, h, back);
    }
}

// ── Inverse stays in the real domain or fails loudly ─────────────────────

proptest! {
    #[test]
    fn inverse_is_positive_or_invalid(
        l in prop_oneof![-2.0f64..-0.05, 0.05f64..2.0],
        m in 45.0f64..130.0,
        s in 0.01f64..0.15,
        z in -50.0f64..50.0,
    ) {
        let lms = LmsParams::new(l, m, s);
        match z_to_height(z, lms) {
            Ok(h) => prop_assert!(h > 0.0, "non-positive height {} for z={}", h, z),
            Err(e) => prop_assert!(
                matches!(e, growth_core::errors::GrowthError::InvalidZRange { .. }),
                "unexpected error: {:?}", e
            ),
        }
    }
}

// ── Monotonicity: taller child, higher z ─────────────────────────────────

proptest! {
    #[test]
    fn z_increases_with_height(
        l in prop_oneof![-2.0f64..-0.05, 0.05f64..2.0, Just(0.0)],
        m in 45.0f64..130.0,
        s in 0.01f64..0.15,
        h in 40.0f64..159.0,
        delta in 0.1f64..20.0,
    ) {
        let lms = LmsParams::new(l, m, s);
        let z_lo = height_to_z(h, lms);
        let z_hi = height_to_z(h + delta, lms);
        prop_assert!(z_hi > z_lo, "z not increasing: {} vs {}", z_lo, z_hi);
    }
}
