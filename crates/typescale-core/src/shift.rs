//! Sliding the heading window along the scale's progression.

use tracing::debug;
use typescale_model::{ScaleParameters, TypeScale};

use crate::geometric::compute_scale;
use crate::numeric::round2;

/// Shift the six heading sizes by `shift` steps.
///
/// A positive shift adds a larger size above `h1` for each step and moves
/// every heading down one label, dropping the old `h6`. A negative shift
/// adds a smaller size below `h6` and moves headings up, dropping the old
/// `h1`. Each new size is rounded as it is produced, so repeated steps
/// accumulate rounding drift.
///
/// `p`, `small` and `smaller` are returned unchanged.
pub fn shift_scale(base: &TypeScale, ratio: f64, shift: i32) -> TypeScale {
    if shift == 0 {
        return *base;
    }

    let mut headings = base.headings();
    if shift > 0 {
        for _ in 0..shift {
            let new_h1 = round2(headings[0] * ratio);
            headings.rotate_right(1);
            headings[0] = new_h1;
        }
    } else {
        for _ in 0..shift.unsigned_abs() {
            let new_h6 = round2(headings[5] / ratio);
            headings.rotate_left(1);
            headings[5] = new_h6;
        }
    }

    debug!(shift, ratio, h1 = headings[0], h6 = headings[5], "shifted headings");
    let mut shifted = *base;
    shifted.set_headings(headings);
    shifted
}

/// Compute the scale for `params` and shift it by `shift` steps.
///
/// Always starts from the unshifted scale, so the result depends only on
/// the parameters and the shift value.
pub fn shifted_scale(params: &ScaleParameters, shift: i32) -> TypeScale {
    shift_scale(&compute_scale(params), params.ratio, shift)
}
