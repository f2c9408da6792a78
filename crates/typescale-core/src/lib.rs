//! Type scale engine.
//!
//! Pure, synchronous computation over the nine-step type scale:
//!
//! - **geometric**: base size and ratio to a rounded [`TypeScale`]
//! - **fluid**: viewport interpolation between two scale endpoints and the
//!   matching CSS `clamp()` / `calc()` expressions
//! - **shift**: sliding the heading window up or down the progression
//! - **units**: pixel sizes presented as px, rem or pt
//! - **numeric**: rounding, input fallbacks and number printing shared by
//!   every exporter
//!
//! [`TypeScale`]: typescale_model::TypeScale

pub mod fluid;
pub mod geometric;
pub mod numeric;
pub mod shift;
pub mod units;

pub use fluid::{
    FluidExpression, fluid_css_expression, fluid_expressions, fluid_scale_at, interpolate,
    viewport_progress,
};
pub use geometric::{compute_scale, step_size};
pub use numeric::{format_number, parse_base_size, parse_ratio, round2, to_fixed_2};
pub use shift::{shift_scale, shifted_scale};
pub use units::convert_unit;
