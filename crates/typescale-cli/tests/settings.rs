//! Tests for settings files and command-line overrides.

use std::fs;

use typescale_cli::settings::{apply_overrides, load_settings, ratio_from_arg, resolve_settings};
use typescale_model::{SizeUnit, TypographySettings};

fn write_settings(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("typography.json");
    fs::write(&path, contents).expect("write settings");
    (dir, path)
}

#[test]
fn test_load_full_settings() {
    let (_dir, path) = write_settings(
        r##"{
            "baseSize": 18,
            "unit": "rem",
            "scaleRatio": 1.333,
            "headings": {
                "family": "Playfair Display",
                "weight": "700",
                "letterSpacing": "0",
                "lineHeight": "1.1",
                "color": "#111111"
            },
            "body": {
                "family": "Source Sans 3",
                "weight": "400",
                "letterSpacing": "0.01em",
                "lineHeight": "1.6",
                "color": "#222222"
            }
        }"##,
    );
    let settings = load_settings(&path).expect("load settings");
    assert_eq!(settings.base_size, 18.0);
    assert_eq!(settings.unit, SizeUnit::Rem);
    assert_eq!(settings.scale_ratio, 1.333);
    assert_eq!(settings.headings.family, "Playfair Display");
    assert_eq!(settings.body.letter_spacing, "0.01em");
}

#[test]
fn test_missing_keys_take_defaults() {
    let (_dir, path) = write_settings(r#"{ "scaleRatio": 1.5 }"#);
    let settings = load_settings(&path).expect("load settings");
    let defaults = TypographySettings::default();
    assert_eq!(settings.scale_ratio, 1.5);
    assert_eq!(settings.base_size, defaults.base_size);
    assert_eq!(settings.headings, defaults.headings);
    assert_eq!(settings.body, defaults.body);
}

#[test]
fn test_invalid_json_reports_path() {
    let (_dir, path) = write_settings("{ not json");
    let error = load_settings(&path).unwrap_err();
    let message = format!("{error:#}");
    assert!(message.contains("parse settings file"), "{message}");
    assert!(message.contains("typography.json"), "{message}");
}

#[test]
fn test_non_positive_base_rejected() {
    let (_dir, path) = write_settings(r#"{ "baseSize": 0 }"#);
    let error = load_settings(&path).unwrap_err();
    assert!(format!("{error:#}").contains("invalid settings"), "{error:#}");
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = load_settings(&dir.path().join("absent.json")).unwrap_err();
    assert!(format!("{error:#}").contains("read settings file"));
}

#[test]
fn test_resolve_without_file_uses_defaults() {
    let settings = resolve_settings(None).expect("resolve settings");
    assert_eq!(settings, TypographySettings::default());
}

#[test]
fn test_ratio_from_arg() {
    assert_eq!(ratio_from_arg("perfect-fourth"), 1.333);
    assert_eq!(ratio_from_arg("Golden Ratio"), 1.618);
    assert_eq!(ratio_from_arg("1.4"), 1.4);
    assert_eq!(ratio_from_arg("abc"), 1.25);
    assert_eq!(ratio_from_arg("0"), 1.25);
}

#[test]
fn test_flags_override_file() {
    let (_dir, path) = write_settings(r#"{ "baseSize": 18, "scaleRatio": 1.5 }"#);
    let settings = load_settings(&path).expect("load settings");

    let overridden = apply_overrides(settings.clone(), Some("20"), Some("minor-third"));
    assert_eq!(overridden.base_size, 20.0);
    assert_eq!(overridden.scale_ratio, 1.2);

    let untouched = apply_overrides(settings, None, None);
    assert_eq!(untouched.base_size, 18.0);
    assert_eq!(untouched.scale_ratio, 1.5);
}

#[test]
fn test_unparseable_base_flag_falls_back() {
    let settings = apply_overrides(TypographySettings::default(), Some("large"), None);
    assert_eq!(settings.base_size, 16.0);
}
