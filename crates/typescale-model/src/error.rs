use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScaleError {
    #[error("viewport range is empty: min and max viewport are both {viewport}px")]
    EmptyViewportRange { viewport: u32 },
    #[error("viewport range is inverted: min viewport {min}px exceeds max viewport {max}px")]
    InvertedViewportRange { min: u32, max: u32 },
    #[error("base size must be a positive finite number, got {value}")]
    InvalidBaseSize { value: f64 },
    #[error("scale ratio must be a positive finite number, got {value}")]
    InvalidRatio { value: f64 },
    #[error("unknown ratio preset: {name}")]
    UnknownPreset { name: String },
    #[error("unknown scale step: {name}")]
    UnknownStep { name: String },
}

pub type Result<T> = std::result::Result<T, ScaleError>;
