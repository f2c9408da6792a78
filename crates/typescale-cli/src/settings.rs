//! Typography settings from a JSON file plus command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use typescale_core::{parse_base_size, parse_ratio};
use typescale_model::{RatioPreset, TypographySettings};

/// Load settings from a JSON file with camelCase keys.
///
/// Missing keys take their defaults. The base size and ratio must be
/// positive.
pub fn load_settings(path: &Path) -> Result<TypographySettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read settings file {}", path.display()))?;
    let settings: TypographySettings = serde_json::from_str(&text)
        .with_context(|| format!("parse settings file {}", path.display()))?;
    settings
        .params()
        .validate()
        .with_context(|| format!("invalid settings in {}", path.display()))?;
    debug!(
        path = %path.display(),
        base_size = settings.base_size,
        scale_ratio = settings.scale_ratio,
        "loaded settings"
    );
    Ok(settings)
}

/// Settings from `path`, or the defaults when no file is given.
pub fn resolve_settings(path: Option<&Path>) -> Result<TypographySettings> {
    match path {
        Some(path) => load_settings(path),
        None => Ok(TypographySettings::default()),
    }
}

/// Ratio named by a preset (`perfect-fourth`, `Golden Ratio`) or given as a
/// number. Anything else falls back to the custom ratio default.
pub fn ratio_from_arg(input: &str) -> f64 {
    if let Ok(preset) = input.parse::<RatioPreset>() {
        return preset.value;
    }
    let ratio = parse_ratio(input);
    let clean = input
        .trim()
        .parse::<f64>()
        .is_ok_and(|value| value != 0.0 && !value.is_nan());
    if !clean {
        warn!(input, ratio, "unrecognized scale ratio, using fallback");
    }
    ratio
}

/// Apply `--base` and `--ratio` flags on top of loaded settings.
pub fn apply_overrides(
    mut settings: TypographySettings,
    base: Option<&str>,
    ratio: Option<&str>,
) -> TypographySettings {
    if let Some(base) = base {
        settings.base_size = parse_base_size(base);
    }
    if let Some(ratio) = ratio {
        settings.scale_ratio = ratio_from_arg(ratio);
    }
    settings
}
