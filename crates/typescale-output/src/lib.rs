//! Type scale export generation.
//!
//! This crate renders a computed scale and its typography settings in the
//! formats the calculator offers for download:
//!
//! - **CSS**: `:root` custom properties plus base typography rules
//! - **SCSS**: Sass variables and functions that rebuild the scale
//! - **JSON**: settings and sizes for design tooling
//!
//! Each format has a static variant (one fixed scale) and a fluid variant
//! (sizes interpolated between two viewport widths).

mod common;
mod css;
mod json;
mod scss;

// Re-export public types and functions
pub use common::{
    EXPORT_FILE_STEM, ExportFormat, ExportRequest, FluidExport, export_file_name, generate_export,
    write_export,
};
pub use css::generate_css;
pub use json::generate_json;
pub use scss::generate_scss;
