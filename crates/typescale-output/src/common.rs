//! Shared types and helpers for export generation.

use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::info;

use typescale_core::{compute_scale, shift_scale};
use typescale_model::{
    FluidMethod, FluidRange, FontSettings, ScaleParameters, ScaleStep, TypeScale,
    TypographySettings,
};

use crate::{generate_css, generate_json, generate_scss};

/// File name stem for downloaded exports.
pub const EXPORT_FILE_STEM: &str = "typography-scale";

/// Rules appended after the variable block in CSS and SCSS exports.
pub(crate) const TYPOGRAPHY_RULES: &str = "\
body {
  font-family: var(--font-family-body);
  font-weight: var(--font-weight-body);
  font-size: var(--font-size-base);
  line-height: var(--line-height-body);
  letter-spacing: var(--letter-spacing-body);
  color: var(--color-body);
}

h1, h2, h3, h4, h5, h6 {
  font-family: var(--font-family-headings);
  font-weight: var(--font-weight-headings);
  line-height: var(--line-height-headings);
  letter-spacing: var(--letter-spacing-headings);
  color: var(--color-headings);
}

h1 { font-size: var(--font-size-h1); }
h2 { font-size: var(--font-size-h2); }
h3 { font-size: var(--font-size-h3); }
h4 { font-size: var(--font-size-h4); }
h5 { font-size: var(--font-size-h5); }
h6 { font-size: var(--font-size-h6); }

small { font-size: var(--font-size-small); }
.smaller { font-size: var(--font-size-smaller); }";

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Css,
    Scss,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Css => "css",
            ExportFormat::Scss => "scss",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "css" => Ok(ExportFormat::Css),
            "scss" | "sass" => Ok(ExportFormat::Scss),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!("Unknown export format: {s}")),
        }
    }
}

/// Fluid configuration attached to an export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidExport {
    pub range: FluidRange,
    pub method: FluidMethod,
}

impl FluidExport {
    /// Scale at the small end of the viewport range.
    ///
    /// `p` is the minimum base size as entered, not rounded.
    pub fn min_scale(&self) -> TypeScale {
        endpoint_scale(&self.range.min_params())
    }

    /// Scale at the large end of the viewport range.
    ///
    /// `p` is the maximum base size as entered, not rounded.
    pub fn max_scale(&self) -> TypeScale {
        endpoint_scale(&self.range.max_params())
    }
}

fn endpoint_scale(params: &ScaleParameters) -> TypeScale {
    let mut scale = compute_scale(params);
    *scale.get_mut(ScaleStep::P) = params.base_size;
    scale
}

/// Everything an exporter needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRequest {
    pub settings: TypographySettings,
    /// Static scale, already shifted.
    pub scale: TypeScale,
    /// When set, exports are fluid and `scale` is not used for sizes.
    pub fluid: Option<FluidExport>,
}

impl ExportRequest {
    /// Build a static export for `settings` with the headings shifted by
    /// `shift` steps.
    pub fn new(settings: TypographySettings, shift: i32) -> Self {
        let scale = shift_scale(
            &compute_scale(&settings.params()),
            settings.scale_ratio,
            shift,
        );
        Self {
            settings,
            scale,
            fluid: None,
        }
    }

    /// Switch the export to fluid sizes.
    ///
    /// Fluid exports use the unshifted endpoint scales of `range`.
    #[must_use]
    pub fn with_fluid(mut self, range: FluidRange, method: FluidMethod) -> Self {
        self.fluid = Some(FluidExport { range, method });
        self
    }
}

/// Render `request` in `format`.
pub fn generate_export(format: ExportFormat, request: &ExportRequest) -> Result<String> {
    match format {
        ExportFormat::Css => generate_css(request),
        ExportFormat::Scss => generate_scss(request),
        ExportFormat::Json => generate_json(request),
    }
}

/// Download file name, e.g. `typography-scale.scss`.
pub fn export_file_name(format: ExportFormat) -> String {
    format!("{EXPORT_FILE_STEM}.{}", format.extension())
}

/// Write an export into `output_dir`, creating the directory if needed.
pub fn write_export(
    output_dir: &Path,
    format: ExportFormat,
    request: &ExportRequest,
) -> Result<PathBuf> {
    let contents = generate_export(format, request)?;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let path = output_dir.join(export_file_name(format));
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    info!(
        path = %path.display(),
        format = %format,
        fluid = request.fluid.is_some(),
        "export written"
    );
    Ok(path)
}

/// Font property groups in export order, with their section titles.
pub(crate) const FONT_GROUPS: [(&str, &str); 5] = [
    ("Font families", "font-family"),
    ("Font weights", "font-weight"),
    ("Line heights", "line-height"),
    ("Letter spacing", "letter-spacing"),
    ("Colors", "color"),
];

/// Text groups that carry font settings, in export order.
pub(crate) fn font_groups(settings: &TypographySettings) -> [(&'static str, &FontSettings); 2] {
    [("headings", &settings.headings), ("body", &settings.body)]
}

/// Value of a font property as written into stylesheets.
pub(crate) fn font_value(font: &FontSettings, property: &str) -> String {
    match property {
        "font-family" => format!("\"{}\", sans-serif", font.family),
        "font-weight" => font.weight.clone(),
        "line-height" => font.line_height.clone(),
        "letter-spacing" => font.letter_spacing.clone(),
        _ => font.color.clone(),
    }
}

/// Write the commented font declaration sections.
///
/// `comment` renders a section title and `declare` renders one declaration
/// from a variable name such as `font-weight-body` and its value.
pub(crate) fn write_font_sections(
    out: &mut String,
    settings: &TypographySettings,
    comment: impl Fn(&str) -> String,
    declare: impl Fn(&str, &str) -> String,
) -> fmt::Result {
    for (index, (title, property)) in FONT_GROUPS.into_iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", comment(title))?;
        for (group, font) in font_groups(settings) {
            let name = format!("{property}-{group}");
            writeln!(out, "{}", declare(&name, &font_value(font, property)))?;
        }
    }
    Ok(())
}
