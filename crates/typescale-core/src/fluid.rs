//! Fluid typography: interpolating a scale across a viewport range.

use tracing::{debug, trace};
use typescale_model::{
    FluidMethod, FluidRange, Result, ScaleParameters, ScaleStep, TypeScale, check_viewport_range,
};

use crate::geometric::compute_scale;
use crate::numeric::format_number;

/// Position of `viewport` within the range, clamped to `[0, 1]`.
///
/// # Errors
///
/// Fails when the viewport range is empty or inverted.
pub fn viewport_progress(range: &FluidRange, viewport: f64) -> Result<f64> {
    let span = range.span()?;
    let progress = (viewport - f64::from(range.min_viewport)) / span;
    Ok(progress.clamp(0.0, 1.0))
}

/// Scale parameters in effect at `viewport`.
///
/// Base size and ratio are interpolated with the same progress value. At
/// or beyond the range ends the endpoint values are returned exactly.
///
/// Values are weighted as `min * (1 - t) + max * t` rather than
/// `min + (max - min) * t`. The two agree to two decimals across the range,
/// but only the weighted form yields `max` bit for bit at `t = 1`.
pub fn interpolate(range: &FluidRange, viewport: f64) -> Result<ScaleParameters> {
    let progress = viewport_progress(range, viewport)?;
    let params = ScaleParameters {
        base_size: lerp(range.min_base, range.max_base, progress),
        ratio: lerp(range.min_ratio, range.max_ratio, progress),
    };
    trace!(
        viewport,
        progress,
        base_size = params.base_size,
        ratio = params.ratio,
        "interpolated fluid parameters"
    );
    Ok(params)
}

/// Type scale at `viewport`.
pub fn fluid_scale_at(range: &FluidRange, viewport: f64) -> Result<TypeScale> {
    Ok(compute_scale(&interpolate(range, viewport)?))
}

/// CSS expression that grows a size from `min_size` to `max_size` across the
/// viewport range.
///
/// `Clamp` produces `clamp(min, slope*100vw + intercept, max)`. `Locks`
/// produces `calc(min + slope*100vw * (100vw - minViewport) / span)`. The
/// extra viewport factor means `Locks` is not a conventional CSS lock and
/// does not match `Clamp` between the breakpoints.
///
/// # Errors
///
/// Fails when `min_viewport >= max_viewport`.
pub fn fluid_css_expression(
    min_size: f64,
    max_size: f64,
    min_viewport: u32,
    max_viewport: u32,
    method: FluidMethod,
) -> Result<String> {
    check_viewport_range(min_viewport, max_viewport)?;
    let span = max_viewport - min_viewport;
    let slope = (max_size - min_size) / f64::from(span);
    let expression = match method {
        FluidMethod::Clamp => {
            let intercept = min_size - slope * f64::from(min_viewport);
            format!(
                "clamp({}px, {}vw + {}px, {}px)",
                format_number(min_size),
                format_number(slope * 100.0),
                format_number(intercept),
                format_number(max_size),
            )
        }
        FluidMethod::Locks => format!(
            "calc({}px + {}vw * (100vw - {min_viewport}px) / {span})",
            format_number(min_size),
            format_number(slope * 100.0),
        ),
    };
    Ok(expression)
}

/// A fluid CSS expression for one scale step.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidExpression {
    pub step: ScaleStep,
    pub min_size: f64,
    pub max_size: f64,
    pub css: String,
}

/// Fluid expressions for every step, from the range's endpoint scales.
pub fn fluid_expressions(range: &FluidRange, method: FluidMethod) -> Result<Vec<FluidExpression>> {
    let min_scale = compute_scale(&range.min_params());
    let max_scale = compute_scale(&range.max_params());
    let expressions = ScaleStep::ALL
        .iter()
        .map(|step| {
            let min_size = min_scale.get(*step);
            let max_size = max_scale.get(*step);
            let css = fluid_css_expression(
                min_size,
                max_size,
                range.min_viewport,
                range.max_viewport,
                method,
            )?;
            Ok(FluidExpression {
                step: *step,
                min_size,
                max_size,
                css,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(
        method = %method,
        min_viewport = range.min_viewport,
        max_viewport = range.max_viewport,
        count = expressions.len(),
        "built fluid expressions"
    );
    Ok(expressions)
}

fn lerp(start: f64, end: f64, progress: f64) -> f64 {
    start * (1.0 - progress) + end * progress
}
