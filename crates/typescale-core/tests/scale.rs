//! Tests for geometric scale generation.

use typescale_core::{compute_scale, shifted_scale};
use typescale_model::{ScaleParameters, ScaleStep, TypeScale};

fn params(base_size: f64, ratio: f64) -> ScaleParameters {
    ScaleParameters::new(base_size, ratio).expect("valid parameters")
}

#[test]
fn test_minor_third_from_16px() {
    let scale = compute_scale(&params(16.0, 1.2));

    assert_eq!(
        scale,
        TypeScale {
            h1: 39.81,
            h2: 33.18,
            h3: 27.65,
            h4: 23.04,
            h5: 19.2,
            h6: 16.0,
            p: 16.0,
            small: 13.33,
            smaller: 11.11,
        }
    );
}

#[test]
fn test_perfect_fourth_from_20px() {
    let scale = compute_scale(&params(20.0, 1.333));

    assert_eq!(scale.h1, 84.17);
    assert_eq!(scale.h2, 63.15);
    assert_eq!(scale.h3, 47.37);
    assert_eq!(scale.h4, 35.54);
    assert_eq!(scale.h5, 26.66);
    assert_eq!(scale.small, 15.0);
    assert_eq!(scale.smaller, 11.26);
}

#[test]
fn test_ratio_one_is_flat() {
    let scale = compute_scale(&params(16.0, 1.0));

    for (step, size) in scale.iter() {
        assert_eq!(size, 16.0, "{step} should equal the base");
    }
}

#[test]
fn test_ratio_below_one_inverts_order() {
    let scale = compute_scale(&params(16.0, 0.8));

    assert_eq!(scale.h1, 5.24);
    assert_eq!(scale.h5, 12.8);
    assert_eq!(scale.small, 20.0);
    assert_eq!(scale.smaller, 25.0);
    assert!(scale.h1 < scale.h6);
    assert!(scale.smaller > scale.p);
}

#[test]
fn test_every_value_has_at_most_two_decimals() {
    let scale = compute_scale(&params(17.0, 1.618));

    for (step, size) in scale.iter() {
        let hundredths = size * 100.0;
        assert!(
            (hundredths - hundredths.round()).abs() < 1e-6,
            "{step} = {size} has more than two decimals"
        );
    }
}

#[test]
fn test_non_finite_input_propagates() {
    let scale = compute_scale(&ScaleParameters {
        base_size: f64::NAN,
        ratio: 1.2,
    });
    assert!(scale.iter().all(|(_, size)| size.is_nan()));

    let scale = compute_scale(&ScaleParameters {
        base_size: 16.0,
        ratio: f64::INFINITY,
    });
    assert_eq!(scale.get(ScaleStep::H1), f64::INFINITY);
    assert_eq!(scale.get(ScaleStep::Small), 0.0);
}

#[test]
fn test_shifted_scale_recomputes_from_parameters() {
    let parameters = params(16.0, 1.2);

    // Moving the shift away and back lands on the unshifted scale because
    // nothing is carried over between calls.
    let _ = shifted_scale(&parameters, 2);
    assert_eq!(shifted_scale(&parameters, 0), compute_scale(&parameters));
    assert_eq!(shifted_scale(&parameters, 1).h1, 47.77);
}
