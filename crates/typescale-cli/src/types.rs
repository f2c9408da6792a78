use std::path::PathBuf;

use typescale_model::{DisplayUnit, FluidRange, RatioPreset, ScaleParameters, TypeScale};
use typescale_output::ExportFormat;

/// A static scale ready for printing.
#[derive(Debug, Clone)]
pub struct ScaleReport {
    pub params: ScaleParameters,
    pub preset: Option<&'static RatioPreset>,
    pub shift: i32,
    pub scale: TypeScale,
    pub unit: DisplayUnit,
}

/// The fluid scale at one viewport.
#[derive(Debug, Clone)]
pub struct FluidReport {
    pub range: FluidRange,
    pub viewport: f64,
    /// Position within the viewport range, 0 to 1.
    pub progress: f64,
    pub report: ScaleReport,
}

#[derive(Debug, Clone)]
pub struct ExportResult {
    pub format: ExportFormat,
    pub fluid: bool,
    pub output: ExportOutput,
}

#[derive(Debug, Clone)]
pub enum ExportOutput {
    /// Written to this file.
    Written(PathBuf),
    /// Not written; print to stdout.
    Contents(String),
}
