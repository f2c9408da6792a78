//! JSON export.

use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use tracing::debug;

use typescale_model::{FluidMethod, FontSettings, SizeUnit, TypeScale, TypographySettings};

use crate::common::ExportRequest;

/// Largest integer a double represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

#[derive(Serialize)]
#[serde(untagged)]
enum Document<'a> {
    Static {
        settings: Settings<'a, StaticBase>,
        scale: ScaleSizes,
    },
    #[serde(rename_all = "camelCase")]
    Fluid {
        settings: Settings<'a, FluidBase>,
        min_scale: ScaleSizes,
        max_scale: ScaleSizes,
    },
}

#[derive(Serialize)]
struct Settings<'a, B> {
    base: B,
    fonts: Fonts<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StaticBase {
    #[serde(serialize_with = "js_number")]
    size: f64,
    unit: SizeUnit,
    #[serde(serialize_with = "js_number")]
    scale_ratio: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FluidBase {
    min_viewport: u32,
    max_viewport: u32,
    #[serde(serialize_with = "js_number")]
    min_font_size: f64,
    #[serde(serialize_with = "js_number")]
    max_font_size: f64,
    #[serde(serialize_with = "js_number")]
    min_scale_ratio: f64,
    #[serde(serialize_with = "js_number")]
    max_scale_ratio: f64,
    unit: SizeUnit,
    fluid_method: FluidMethod,
}

#[derive(Serialize)]
struct Fonts<'a> {
    headings: Font<'a>,
    body: Font<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Font<'a> {
    family: &'a str,
    weight: &'a str,
    line_height: &'a str,
    letter_spacing: &'a str,
    color: &'a str,
}

impl<'a> From<&'a FontSettings> for Font<'a> {
    fn from(font: &'a FontSettings) -> Self {
        Self {
            family: &font.family,
            weight: &font.weight,
            line_height: &font.line_height,
            letter_spacing: &font.letter_spacing,
            color: &font.color,
        }
    }
}

#[derive(Serialize)]
struct ScaleSizes {
    #[serde(serialize_with = "js_number")]
    h1: f64,
    #[serde(serialize_with = "js_number")]
    h2: f64,
    #[serde(serialize_with = "js_number")]
    h3: f64,
    #[serde(serialize_with = "js_number")]
    h4: f64,
    #[serde(serialize_with = "js_number")]
    h5: f64,
    #[serde(serialize_with = "js_number")]
    h6: f64,
    #[serde(serialize_with = "js_number")]
    p: f64,
    #[serde(serialize_with = "js_number")]
    small: f64,
    #[serde(serialize_with = "js_number")]
    smaller: f64,
}

impl From<TypeScale> for ScaleSizes {
    fn from(scale: TypeScale) -> Self {
        Self {
            h1: scale.h1,
            h2: scale.h2,
            h3: scale.h3,
            h4: scale.h4,
            h5: scale.h5,
            h6: scale.h6,
            p: scale.p,
            small: scale.small,
            smaller: scale.smaller,
        }
    }
}

fn fonts(settings: &TypographySettings) -> Fonts<'_> {
    Fonts {
        headings: Font::from(&settings.headings),
        body: Font::from(&settings.body),
    }
}

/// Whole numbers are written without a fraction (`16`, not `16.0`) and
/// non-finite values as `null`.
fn js_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if !value.is_finite() {
        serializer.serialize_none()
    } else if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Render `request` as pretty-printed JSON with two-space indentation.
///
/// Static exports hold `settings` and `scale`. Fluid exports hold
/// `settings`, `minScale` and `maxScale`, the unshifted endpoint scales.
pub fn generate_json(request: &ExportRequest) -> Result<String> {
    let settings = &request.settings;
    let document = match &request.fluid {
        Some(fluid) => Document::Fluid {
            settings: Settings {
                base: FluidBase {
                    min_viewport: fluid.range.min_viewport,
                    max_viewport: fluid.range.max_viewport,
                    min_font_size: fluid.range.min_base,
                    max_font_size: fluid.range.max_base,
                    min_scale_ratio: fluid.range.min_ratio,
                    max_scale_ratio: fluid.range.max_ratio,
                    unit: settings.unit,
                    fluid_method: fluid.method,
                },
                fonts: fonts(settings),
            },
            min_scale: fluid.min_scale().into(),
            max_scale: fluid.max_scale().into(),
        },
        None => Document::Static {
            settings: Settings {
                base: StaticBase {
                    size: settings.base_size,
                    unit: settings.unit,
                    scale_ratio: settings.scale_ratio,
                },
                fonts: fonts(settings),
            },
            scale: request.scale.into(),
        },
    };

    let json = serde_json::to_string_pretty(&document).context("serialize JSON export")?;
    debug!(fluid = request.fluid.is_some(), bytes = json.len(), "generated JSON export");
    Ok(json)
}
