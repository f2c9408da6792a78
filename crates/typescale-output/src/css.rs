//! CSS custom property export.

use std::fmt::Write as _;

use anyhow::Result;
use tracing::debug;

use typescale_core::{fluid_css_expression, format_number};
use typescale_model::ScaleStep;

use crate::common::{ExportRequest, TYPOGRAPHY_RULES, write_font_sections};

const BODY_STEPS: [ScaleStep; 3] = [ScaleStep::P, ScaleStep::Small, ScaleStep::Smaller];

/// Render `request` as a `:root` block of custom properties followed by
/// the base typography rules.
///
/// Static exports write the shifted scale. The base variable carries the
/// configured base size as entered. Fluid exports write one clamp or calc
/// expression per step, built from the unshifted endpoint scales, whose
/// base sizes are likewise unrounded.
pub fn generate_css(request: &ExportRequest) -> Result<String> {
    let mut out = String::from(":root {\n");

    match &request.fluid {
        Some(fluid) => {
            let min_scale = fluid.min_scale();
            let max_scale = fluid.max_scale();
            let method = fluid.method.as_str();
            writeln!(out, "  /* Base sizes - fluid typography using {method} */")?;
            for step in BODY_STEPS {
                let value = fluid_css_expression(
                    min_scale.get(step),
                    max_scale.get(step),
                    fluid.range.min_viewport,
                    fluid.range.max_viewport,
                    fluid.method,
                )?;
                writeln!(out, "  {}: {value};", step.css_variable())?;
            }
            writeln!(out)?;
            writeln!(out, "  /* Heading sizes - fluid typography using {method} */")?;
            for step in ScaleStep::HEADINGS {
                let value = fluid_css_expression(
                    min_scale.get(step),
                    max_scale.get(step),
                    fluid.range.min_viewport,
                    fluid.range.max_viewport,
                    fluid.method,
                )?;
                writeln!(out, "  {}: {value};", step.css_variable())?;
            }
        }
        None => {
            writeln!(out, "  /* Base sizes */")?;
            for step in BODY_STEPS {
                let size = match step {
                    ScaleStep::P => request.settings.base_size,
                    _ => request.scale.get(step),
                };
                writeln!(out, "  {}: {}px;", step.css_variable(), format_number(size))?;
            }
            writeln!(out)?;
            writeln!(out, "  /* Heading sizes */")?;
            for step in ScaleStep::HEADINGS {
                writeln!(
                    out,
                    "  {}: {}px;",
                    step.css_variable(),
                    format_number(request.scale.get(step))
                )?;
            }
        }
    }

    writeln!(out)?;
    write_font_sections(
        &mut out,
        &request.settings,
        |title| format!("  /* {title} */"),
        |name, value| format!("  --{name}: {value};"),
    )?;
    out.push_str("}\n\n/* Base typography styles */\n");
    out.push_str(TYPOGRAPHY_RULES);

    debug!(fluid = request.fluid.is_some(), bytes = out.len(), "generated CSS export");
    Ok(out)
}
