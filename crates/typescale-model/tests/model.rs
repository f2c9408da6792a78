//! Tests for typescale-model types.

use typescale_model::{
    FluidMethod, FluidRange, FontSettings, ScaleError, ScaleParameters, ScaleStep, SizeUnit,
    TypeScale, TypographySettings,
};

fn sample_scale() -> TypeScale {
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
}

#[test]
fn scale_parameters_reject_non_positive_values() {
    assert!(ScaleParameters::new(16.0, 1.2).is_ok());
    assert_eq!(
        ScaleParameters::new(0.0, 1.2),
        Err(ScaleError::InvalidBaseSize { value: 0.0 })
    );
    assert_eq!(
        ScaleParameters::new(16.0, -1.0),
        Err(ScaleError::InvalidRatio { value: -1.0 })
    );
    assert!(ScaleParameters::new(f64::NAN, 1.2).is_err());
    assert!(ScaleParameters::new(16.0, f64::INFINITY).is_err());
}

#[test]
fn fluid_range_rejects_equal_viewports() {
    assert_eq!(
        FluidRange::new(768, 768),
        Err(ScaleError::EmptyViewportRange { viewport: 768 })
    );
}

#[test]
fn fluid_range_rejects_inverted_viewports() {
    assert_eq!(
        FluidRange::new(1240, 320),
        Err(ScaleError::InvertedViewportRange {
            min: 1240,
            max: 320
        })
    );
}

#[test]
fn fluid_range_span_and_endpoints() {
    let range = FluidRange::new(320, 1240)
        .unwrap()
        .with_base(14.0, 18.0)
        .with_ratio(1.125, 1.25);
    assert_eq!(range.span().unwrap(), 920.0);
    assert_eq!(range.min_params(), ScaleParameters::new(14.0, 1.125).unwrap());
    assert_eq!(range.max_params(), ScaleParameters::new(18.0, 1.25).unwrap());
    assert!(range.validate().is_ok());
}

#[test]
fn fluid_range_validate_checks_endpoints() {
    let range = FluidRange::default().with_ratio(0.0, 1.333);
    assert_eq!(
        range.validate(),
        Err(ScaleError::InvalidRatio { value: 0.0 })
    );
}

#[test]
fn fluid_range_span_fails_when_fields_are_set_directly() {
    let range = FluidRange {
        min_viewport: 500,
        max_viewport: 500,
        ..FluidRange::default()
    };
    assert!(range.span().is_err());
}

#[test]
fn type_scale_headings_round_trip_through_setter() {
    let mut scale = sample_scale();
    let mut headings = scale.headings();
    headings.reverse();
    scale.set_headings(headings);
    assert_eq!(scale.h1, 16.0);
    assert_eq!(scale.h6, 39.81);
    // Body steps are not headings.
    assert_eq!(scale.p, 16.0);
    assert_eq!(scale.small, 13.33);
}

#[test]
fn type_scale_iterates_in_display_order() {
    let steps: Vec<ScaleStep> = sample_scale().iter().map(|(step, _)| step).collect();
    assert_eq!(steps, ScaleStep::ALL.to_vec());
    assert!(sample_scale().is_descending());
}

#[test]
fn type_scale_get_mut_updates_one_step() {
    let mut scale = sample_scale();
    *scale.get_mut(ScaleStep::Small) = 12.5;
    assert_eq!(scale.small, 12.5);
    assert!(scale.is_descending());
}

#[test]
fn type_scale_serializes_with_step_keys_in_order() {
    let json = serde_json::to_string(&sample_scale()).expect("serialize scale");
    assert_eq!(
        json,
        r#"{"h1":39.81,"h2":33.18,"h3":27.65,"h4":23.04,"h5":19.2,"h6":16.0,"p":16.0,"small":13.33,"smaller":11.11}"#
    );
}

#[test]
fn css_variables_cover_every_step() {
    let names: Vec<&str> = ScaleStep::ALL.iter().map(ScaleStep::css_variable).collect();
    assert_eq!(names[6], "--font-size-base");
    assert!(names.iter().all(|name| name.starts_with("--font-size-")));
    assert_eq!(
        ScaleStep::ALL.iter().filter(|step| step.is_heading()).count(),
        6
    );
}

#[test]
fn settings_file_with_missing_keys_uses_defaults() {
    let json = r##"{
        "baseSize": 18,
        "scaleRatio": 1.25,
        "headings": {
            "family": "Playfair Display",
            "weight": "700",
            "letterSpacing": "0",
            "lineHeight": "1.1",
            "color": "#111111"
        }
    }"##;
    let settings: TypographySettings = serde_json::from_str(json).expect("parse settings");
    assert_eq!(settings.base_size, 18.0);
    assert_eq!(settings.scale_ratio, 1.25);
    assert_eq!(settings.unit, SizeUnit::Px);
    assert_eq!(settings.headings.family, "Playfair Display");
    assert_eq!(settings.body, FontSettings::body());
}

#[test]
fn fluid_method_parses_and_serializes() {
    assert_eq!("Clamp".parse::<FluidMethod>().unwrap(), FluidMethod::Clamp);
    assert_eq!("locks".parse::<FluidMethod>().unwrap(), FluidMethod::Locks);
    assert!("linear".parse::<FluidMethod>().is_err());
    assert_eq!(
        serde_json::to_string(&FluidMethod::Locks).unwrap(),
        "\"locks\""
    );
}
