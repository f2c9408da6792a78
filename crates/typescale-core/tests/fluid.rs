//! Tests for fluid interpolation and CSS expressions.

use typescale_core::{
    compute_scale, fluid_css_expression, fluid_expressions, fluid_scale_at, interpolate,
    viewport_progress,
};
use typescale_model::{FluidMethod, FluidRange, ScaleError, ScaleParameters, ScaleStep};

fn default_range() -> FluidRange {
    FluidRange::new(320, 1240)
        .expect("valid range")
        .with_base(16.0, 20.0)
        .with_ratio(1.2, 1.333)
}

#[test]
fn test_interpolate_at_min_viewport_returns_min_endpoint() {
    let params = interpolate(&default_range(), 320.0).unwrap();
    assert_eq!(
        params,
        ScaleParameters {
            base_size: 16.0,
            ratio: 1.2
        }
    );
}

#[test]
fn test_interpolate_at_max_viewport_returns_max_endpoint() {
    let params = interpolate(&default_range(), 1240.0).unwrap();
    assert_eq!(
        params,
        ScaleParameters {
            base_size: 20.0,
            ratio: 1.333
        }
    );
}

#[test]
fn test_interpolate_at_midpoint_returns_mean() {
    let params = interpolate(&default_range(), 780.0).unwrap();
    assert_eq!(params.base_size, 18.0);
    assert_eq!(params.ratio, (1.2 + 1.333) / 2.0);
}

#[test]
fn test_interpolate_clamps_outside_range() {
    let range = default_range();
    assert_eq!(
        interpolate(&range, 0.0).unwrap(),
        interpolate(&range, 320.0).unwrap()
    );
    assert_eq!(
        interpolate(&range, 4000.0).unwrap(),
        interpolate(&range, 1240.0).unwrap()
    );
    assert_eq!(viewport_progress(&range, -100.0).unwrap(), 0.0);
    assert_eq!(viewport_progress(&range, 2000.0).unwrap(), 1.0);
}

#[test]
fn test_interpolate_rejects_empty_range() {
    let range = FluidRange {
        min_viewport: 768,
        max_viewport: 768,
        ..default_range()
    };
    assert_eq!(
        interpolate(&range, 768.0),
        Err(ScaleError::EmptyViewportRange { viewport: 768 })
    );
}

#[test]
fn test_fluid_scale_at_tablet_width() {
    let scale = fluid_scale_at(&default_range(), 768.0).unwrap();

    assert_eq!(scale.h1, 58.08);
    assert_eq!(scale.h5, 22.7);
    assert_eq!(scale.h6, 17.95);
    assert_eq!(scale.small, 14.19);
    assert_eq!(scale.smaller, 11.22);
}

#[test]
fn test_fluid_scale_at_endpoints_matches_static_scales() {
    let range = default_range();
    assert_eq!(
        fluid_scale_at(&range, 320.0).unwrap(),
        compute_scale(&range.min_params())
    );
    assert_eq!(
        fluid_scale_at(&range, 1240.0).unwrap(),
        compute_scale(&range.max_params())
    );
}

#[test]
fn test_clamp_expression() {
    let css = fluid_css_expression(16.0, 20.0, 320, 1240, FluidMethod::Clamp).unwrap();
    assert_eq!(
        css,
        "clamp(16px, 0.43478260869565216vw + 14.608695652173914px, 20px)"
    );
}

#[test]
fn test_locks_expression() {
    let css = fluid_css_expression(39.81, 84.17, 320, 1240, FluidMethod::Locks).unwrap();
    assert_eq!(
        css,
        "calc(39.81px + 4.821739130434782vw * (100vw - 320px) / 920)"
    );
}

#[test]
fn test_expression_with_shrinking_size() {
    // Larger at the small viewport: slope is negative.
    let css = fluid_css_expression(20.0, 16.0, 320, 1240, FluidMethod::Clamp).unwrap();
    assert!(css.starts_with("clamp(20px, -0.43478260869565216vw + "));
    assert!(css.ends_with(", 16px)"));
}

#[test]
fn test_expression_rejects_equal_viewports() {
    assert_eq!(
        fluid_css_expression(16.0, 20.0, 800, 800, FluidMethod::Clamp),
        Err(ScaleError::EmptyViewportRange { viewport: 800 })
    );
    assert_eq!(
        fluid_css_expression(16.0, 20.0, 900, 800, FluidMethod::Locks),
        Err(ScaleError::InvertedViewportRange { min: 900, max: 800 })
    );
}

#[test]
fn test_fluid_expressions_cover_every_step() {
    let expressions = fluid_expressions(&default_range(), FluidMethod::Clamp).unwrap();

    assert_eq!(expressions.len(), 9);
    let h1 = &expressions[ScaleStep::H1.index()];
    assert_eq!(h1.step, ScaleStep::H1);
    assert_eq!(h1.min_size, 39.81);
    assert_eq!(h1.max_size, 84.17);
    assert_eq!(
        h1.css,
        "clamp(39.81px, 4.821739130434782vw + 24.3804347826087px, 84.17px)"
    );
    let smaller = &expressions[ScaleStep::Smaller.index()];
    assert_eq!(
        smaller.css,
        "clamp(11.11px, 0.016304347826086994vw + 11.05782608695652px, 11.26px)"
    );
}
