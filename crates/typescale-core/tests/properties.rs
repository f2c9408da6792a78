//! Property tests for scale invariants.

use proptest::prelude::*;
use typescale_core::{compute_scale, interpolate, shift_scale};
use typescale_model::{FluidRange, ScaleParameters};

proptest! {
    #[test]
    fn scale_descends_for_ratio_above_one(base_size in 8.0f64..72.0, ratio in 1.001f64..2.0) {
        let scale = compute_scale(&ScaleParameters { base_size, ratio });
        prop_assert!(scale.is_descending(), "{scale:?}");
    }

    #[test]
    fn h6_and_p_always_match(base_size in 1.0f64..200.0, ratio in 0.5f64..3.0) {
        let scale = compute_scale(&ScaleParameters { base_size, ratio });
        prop_assert_eq!(scale.h6, scale.p);
    }

    #[test]
    fn shift_leaves_body_steps_alone(
        base_size in 8.0f64..40.0,
        ratio in 1.05f64..1.7,
        shift in -8i32..8,
    ) {
        let base = compute_scale(&ScaleParameters { base_size, ratio });
        let shifted = shift_scale(&base, ratio, shift);
        prop_assert_eq!(shifted.p, base.p);
        prop_assert_eq!(shifted.small, base.small);
        prop_assert_eq!(shifted.smaller, base.smaller);
    }

    #[test]
    fn interpolated_values_stay_between_endpoints(viewport in 0.0f64..3000.0) {
        let range = FluidRange::default();
        let params = interpolate(&range, viewport).unwrap();
        let tolerance = 1e-9;
        prop_assert!(params.base_size >= range.min_base - tolerance);
        prop_assert!(params.base_size <= range.max_base + tolerance);
        prop_assert!(params.ratio >= range.min_ratio - tolerance);
        prop_assert!(params.ratio <= range.max_ratio + tolerance);
    }
}
