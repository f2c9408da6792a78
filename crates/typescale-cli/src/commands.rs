//! Command implementations returning printable results.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use typescale_core::{
    FluidExpression, compute_scale, fluid_expressions, interpolate, parse_base_size, shift_scale,
    shifted_scale, viewport_progress,
};
use typescale_model::{
    DisplayUnit, FluidMethod, FluidRange, RatioPreset, ScaleParameters, TypographySettings,
};
use typescale_output::{ExportFormat, ExportRequest, generate_export, write_export};

use crate::cli::{
    CssArgs, ExportArgs, FluidArgs, FluidRangeArgs, FormatArg, MethodArg, ScaleArgs, UnitArg,
};
use crate::settings::{apply_overrides, ratio_from_arg};
use crate::types::{ExportOutput, ExportResult, FluidReport, ScaleReport};

pub fn run_scale(args: &ScaleArgs, settings: TypographySettings) -> Result<ScaleReport> {
    let settings = apply_overrides(settings, args.base.as_deref(), args.ratio.as_deref());
    let params = ScaleParameters::new(settings.base_size, settings.scale_ratio)
        .context("invalid scale parameters")?;
    Ok(ScaleReport {
        params,
        preset: RatioPreset::for_ratio(params.ratio),
        shift: args.shift.shift,
        scale: shifted_scale(&params, args.shift.shift),
        unit: display_unit(args.unit),
    })
}

/// The fluid scale at `--viewport`. Shifted headings extend with the static
/// settings ratio, not the interpolated one.
pub fn run_fluid(args: &FluidArgs, settings: TypographySettings) -> Result<FluidReport> {
    let settings = apply_overrides(settings, None, args.ratio.as_deref());
    settings
        .params()
        .validate()
        .context("invalid scale parameters")?;
    let range = fluid_range(&args.range)?;
    let progress = viewport_progress(&range, args.viewport)?;
    let params = interpolate(&range, args.viewport)?;
    let scale = shift_scale(
        &compute_scale(&params),
        settings.scale_ratio,
        args.shift.shift,
    );
    debug!(
        viewport = args.viewport,
        progress,
        base_size = params.base_size,
        ratio = params.ratio,
        "evaluated fluid scale"
    );
    Ok(FluidReport {
        range,
        viewport: args.viewport,
        progress,
        report: ScaleReport {
            params,
            preset: RatioPreset::for_ratio(params.ratio),
            shift: args.shift.shift,
            scale,
            unit: display_unit(args.unit),
        },
    })
}

pub fn run_css(args: &CssArgs) -> Result<(FluidMethod, Vec<FluidExpression>)> {
    let range = fluid_range(&args.range)?;
    let method = fluid_method(args.method);
    let expressions = fluid_expressions(&range, method)?;
    Ok((method, expressions))
}

pub fn run_export(args: &ExportArgs, settings: TypographySettings) -> Result<ExportResult> {
    let format = export_format(args.format);
    let span = info_span!("export", format = %format, fluid = args.fluid);
    let _guard = span.enter();

    let settings = apply_overrides(settings, args.base.as_deref(), args.ratio.as_deref());
    settings
        .params()
        .validate()
        .context("invalid scale parameters")?;
    let mut request = ExportRequest::new(settings, args.shift.shift);
    if args.fluid {
        request = request.with_fluid(fluid_range(&args.range)?, fluid_method(args.method));
    }

    let output = match &args.output_dir {
        Some(dir) => ExportOutput::Written(write_export(dir, format, &request)?),
        None => ExportOutput::Contents(generate_export(format, &request)?),
    };
    Ok(ExportResult {
        format,
        fluid: args.fluid,
        output,
    })
}

fn fluid_range(args: &FluidRangeArgs) -> Result<FluidRange> {
    let range = FluidRange::new(args.min_viewport, args.max_viewport)
        .context("invalid viewport range")?
        .with_base(
            parse_base_size(&args.min_size),
            parse_base_size(&args.max_size),
        )
        .with_ratio(
            ratio_from_arg(&args.min_ratio),
            ratio_from_arg(&args.max_ratio),
        );
    range.validate().context("invalid fluid range")?;
    Ok(range)
}

fn display_unit(unit: UnitArg) -> DisplayUnit {
    match unit {
        UnitArg::Px => DisplayUnit::Px,
        UnitArg::Rem => DisplayUnit::Rem,
        UnitArg::Pt => DisplayUnit::Pt,
    }
}

fn fluid_method(method: MethodArg) -> FluidMethod {
    match method {
        MethodArg::Clamp => FluidMethod::Clamp,
        MethodArg::Locks => FluidMethod::Locks,
    }
}

fn export_format(format: FormatArg) -> ExportFormat {
    match format {
        FormatArg::Css => ExportFormat::Css,
        FormatArg::Scss => ExportFormat::Scss,
        FormatArg::Json => ExportFormat::Json,
    }
}
