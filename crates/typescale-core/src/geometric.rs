//! Geometric scale generation.

use tracing::trace;
use typescale_model::{ScaleParameters, ScaleStep, TypeScale};

use crate::numeric::round2;

/// Compute the nine-step scale for a base size and ratio.
///
/// Each step is `base * ratio^offset` rounded to two decimals, where the
/// offset runs from 5 (`h1`) down to -2 (`smaller`). No validation happens
/// here: a NaN or infinite input yields NaN or infinite sizes.
pub fn compute_scale(params: &ScaleParameters) -> TypeScale {
    trace!(
        base_size = params.base_size,
        ratio = params.ratio,
        "computing type scale"
    );
    TypeScale::from_fn(|step| step_size(params, step))
}

/// Size of a single step, rounded.
pub fn step_size(params: &ScaleParameters, step: ScaleStep) -> f64 {
    let ScaleParameters { base_size, ratio } = *params;
    let raw = match step.offset() {
        -1 => base_size / ratio,
        -2 => base_size / (ratio * ratio),
        offset => base_size * ratio.powf(f64::from(offset)),
    };
    round2(raw)
}
