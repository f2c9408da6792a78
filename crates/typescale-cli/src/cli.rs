//! CLI argument definitions for the type scale calculator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "typescale",
    version,
    about = "Type scale calculator - modular font sizes for the web",
    long_about = "Compute modular type scales from a base size and ratio.\n\n\
                  Supports fluid scales interpolated across a viewport range,\n\
                  heading shifts, and CSS, SCSS and JSON exports."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Typography settings file (JSON, camelCase keys).
    ///
    /// Flags such as --base and --ratio override values from the file.
    #[arg(long = "settings", value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the nine-step scale for a base size and ratio.
    Scale(ScaleArgs),

    /// Print the fluid scale in effect at one viewport width.
    Fluid(FluidArgs),

    /// Print the fluid CSS expression for every step.
    Css(CssArgs),

    /// Generate a CSS, SCSS or JSON export.
    Export(ExportArgs),

    /// List the named ratio presets.
    Ratios,
}

#[derive(Args)]
pub struct ScaleArgs {
    /// Base font size in pixels (falls back to 16).
    #[arg(long = "base", value_name = "PX")]
    pub base: Option<String>,

    /// Scale ratio as a number or preset name, e.g. 1.25 or perfect-fourth.
    #[arg(long = "ratio", value_name = "RATIO")]
    pub ratio: Option<String>,

    #[command(flatten)]
    pub shift: ShiftArgs,

    /// Unit for the display column.
    #[arg(long = "unit", value_enum, default_value = "px")]
    pub unit: UnitArg,
}

#[derive(Args)]
pub struct FluidArgs {
    #[command(flatten)]
    pub range: FluidRangeArgs,

    /// Viewport width to evaluate, in pixels.
    #[arg(long = "viewport", value_name = "PX", default_value_t = 768.0)]
    pub viewport: f64,

    /// Scale ratio used to extend shifted headings (defaults to the settings ratio).
    #[arg(long = "ratio", value_name = "RATIO")]
    pub ratio: Option<String>,

    #[command(flatten)]
    pub shift: ShiftArgs,

    /// Unit for the display column.
    #[arg(long = "unit", value_enum, default_value = "px")]
    pub unit: UnitArg,
}

#[derive(Args)]
pub struct CssArgs {
    #[command(flatten)]
    pub range: FluidRangeArgs,

    /// How fluid sizes are written.
    #[arg(long = "method", value_enum, default_value = "clamp")]
    pub method: MethodArg,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Export format.
    #[arg(long = "format", value_enum, default_value = "css")]
    pub format: FormatArg,

    /// Export fluid sizes for the viewport range instead of a static scale.
    #[arg(long = "fluid")]
    pub fluid: bool,

    #[command(flatten)]
    pub range: FluidRangeArgs,

    /// How fluid sizes are written.
    #[arg(long = "method", value_enum, default_value = "clamp")]
    pub method: MethodArg,

    /// Base font size in pixels for static exports.
    #[arg(long = "base", value_name = "PX")]
    pub base: Option<String>,

    /// Scale ratio for static exports, as a number or preset name.
    #[arg(long = "ratio", value_name = "RATIO")]
    pub ratio: Option<String>,

    #[command(flatten)]
    pub shift: ShiftArgs,

    /// Directory to write `typography-scale.<ext>` into (prints to stdout when omitted).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct ShiftArgs {
    /// Shift the headings up (positive) or down (negative) the scale.
    #[arg(
        long = "shift",
        value_name = "STEPS",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub shift: i32,
}

/// Viewport range and endpoint parameters for fluid scales.
#[derive(Args)]
pub struct FluidRangeArgs {
    /// Viewport width where the minimum sizes apply.
    #[arg(long = "min-viewport", value_name = "PX", default_value_t = 320)]
    pub min_viewport: u32,

    /// Viewport width where the maximum sizes apply.
    #[arg(long = "max-viewport", value_name = "PX", default_value_t = 1240)]
    pub max_viewport: u32,

    /// Base font size at the minimum viewport.
    #[arg(long = "min-size", value_name = "PX", default_value = "16")]
    pub min_size: String,

    /// Base font size at the maximum viewport.
    #[arg(long = "max-size", value_name = "PX", default_value = "20")]
    pub max_size: String,

    /// Scale ratio at the minimum viewport.
    #[arg(long = "min-ratio", value_name = "RATIO", default_value = "1.2")]
    pub min_ratio: String,

    /// Scale ratio at the maximum viewport.
    #[arg(long = "max-ratio", value_name = "RATIO", default_value = "1.333")]
    pub max_ratio: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum UnitArg {
    Px,
    Rem,
    Pt,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Clamp,
    Locks,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Css,
    Scss,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
