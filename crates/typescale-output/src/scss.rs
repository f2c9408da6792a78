//! SCSS export.
//!
//! Unlike CSS, the SCSS export carries the inputs rather than the computed
//! sizes and lets Sass rebuild the scale with `pow`.

use std::fmt::Write as _;

use anyhow::Result;
use tracing::debug;

use typescale_core::format_number;
use typescale_model::{FluidMethod, ScaleStep, TypographySettings};

use crate::common::{
    ExportRequest, FONT_GROUPS, FluidExport, TYPOGRAPHY_RULES, font_groups, write_font_sections,
};

const FLUID_TYPE_FUNCTION: &str = "\
// Fluid typography mixin
@function fluid-type($min-size, $max-size) {
  $slope: ($max-size - $min-size) / ($max-viewport - $min-viewport);
  $intercept: $min-size - $slope * $min-viewport;
\x20\x20
  @return calc(#{$min-size}px + #{$slope * 100}vw);
}
";

const TYPE_SCALE_FUNCTION: &str = "\
// Type scale function
@function type-scale($level) {
  @return $font-size-base * pow($font-size-ratio, $level);
}
";

/// Render `request` as SCSS variables, functions and rules.
pub fn generate_scss(request: &ExportRequest) -> Result<String> {
    let mut out = String::from("// Typography Scale Variables\n");

    match &request.fluid {
        Some(fluid) => write_fluid(&mut out, &request.settings, fluid)?,
        None => write_static(&mut out, &request.settings)?,
    }

    writeln!(out)?;
    for (_, property) in FONT_GROUPS {
        for (group, _) in font_groups(&request.settings) {
            writeln!(out, "  --{property}-{group}: #{{${property}-{group}}};")?;
        }
    }
    out.push_str("}\n\n// Base typography styles\n");
    out.push_str(TYPOGRAPHY_RULES);

    debug!(fluid = request.fluid.is_some(), bytes = out.len(), "generated SCSS export");
    Ok(out)
}

fn write_static(out: &mut String, settings: &TypographySettings) -> std::fmt::Result {
    writeln!(out, "$font-size-base: {}px;", format_number(settings.base_size))?;
    writeln!(out, "$font-size-ratio: {};", format_number(settings.scale_ratio))?;
    writeln!(out)?;
    write_fonts(out, settings)?;
    writeln!(out)?;
    out.push_str(TYPE_SCALE_FUNCTION);
    writeln!(out)?;
    writeln!(out, "// Type scale variables")?;
    writeln!(out, ":root {{")?;
    for step in ScaleStep::ALL.iter().rev() {
        let value = match step {
            ScaleStep::P => "$font-size-base".to_string(),
            _ => format!("type-scale({})", step.offset()),
        };
        writeln!(out, "  {}: #{{{value}}};", step.css_variable())?;
    }
    Ok(())
}

fn write_fluid(
    out: &mut String,
    settings: &TypographySettings,
    fluid: &FluidExport,
) -> std::fmt::Result {
    let range = &fluid.range;
    writeln!(out, "$min-viewport: {}px;", range.min_viewport)?;
    writeln!(out, "$max-viewport: {}px;", range.max_viewport)?;
    writeln!(out, "$min-font-size: {}px;", format_number(range.min_base))?;
    writeln!(out, "$max-font-size: {}px;", format_number(range.max_base))?;
    writeln!(out, "$min-scale-ratio: {};", format_number(range.min_ratio))?;
    writeln!(out, "$max-scale-ratio: {};", format_number(range.max_ratio))?;
    writeln!(out)?;
    write_fonts(out, settings)?;
    writeln!(out)?;
    out.push_str(FLUID_TYPE_FUNCTION);
    writeln!(out)?;
    writeln!(out, "// Calculate min and max scales")?;
    for (index, end) in ["min", "max"].iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        for step in ScaleStep::ALL {
            if step == ScaleStep::P {
                continue;
            }
            writeln!(
                out,
                "${end}-scale-{}: {};",
                step.as_str(),
                sass_step_size(end, step)
            )?;
        }
    }
    writeln!(out)?;
    writeln!(out, "// Type scale variables")?;
    writeln!(out, ":root {{")?;
    let steps = [ScaleStep::P]
        .into_iter()
        .chain(ScaleStep::HEADINGS)
        .chain([ScaleStep::Small, ScaleStep::Smaller]);
    for step in steps {
        let (min, max) = match step {
            ScaleStep::P => ("$min-font-size".to_string(), "$max-font-size".to_string()),
            _ => (
                format!("$min-scale-{}", step.as_str()),
                format!("$max-scale-{}", step.as_str()),
            ),
        };
        let value = match fluid.method {
            FluidMethod::Clamp => {
                format!("clamp(#{{{min}}}px, #{{fluid-type({min}, {max})}}, #{{{max}}}px)")
            }
            FluidMethod::Locks => format!(
                "calc(#{{{min}}}px + #{{({max} - {min}) * 100}}vw * (100vw - #{{$min-viewport}}px) / #{{$max-viewport - $min-viewport}})"
            ),
        };
        writeln!(out, "  {}: {value};", step.css_variable())?;
    }
    Ok(())
}

/// Sass expression for one step of the `min` or `max` scale.
fn sass_step_size(end: &str, step: ScaleStep) -> String {
    let base = format!("${end}-font-size");
    let ratio = format!("${end}-scale-ratio");
    match step.offset() {
        0 => base,
        -1 => format!("{base} / {ratio}"),
        -2 => format!("{base} / ({ratio} * {ratio})"),
        offset => format!("{base} * pow({ratio}, {offset})"),
    }
}

fn write_fonts(out: &mut String, settings: &TypographySettings) -> std::fmt::Result {
    write_font_sections(
        out,
        settings,
        |title| format!("// {title}"),
        |name, value| format!("${name}: {value};"),
    )
}
