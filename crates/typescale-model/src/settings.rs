//! Typography settings shared by the exporters and the CLI.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::params::ScaleParameters;

/// How a fluid size is written in CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FluidMethod {
    /// `clamp(min, preferred, max)`.
    #[default]
    Clamp,
    /// Linear `calc()` between the viewport breakpoints.
    Locks,
}

impl FluidMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            FluidMethod::Clamp => "clamp",
            FluidMethod::Locks => "locks",
        }
    }

    /// Human-readable label, e.g. "CSS Clamp".
    pub fn label(&self) -> &'static str {
        match self {
            FluidMethod::Clamp => "CSS Clamp",
            FluidMethod::Locks => "CSS Locks",
        }
    }
}

impl fmt::Display for FluidMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FluidMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "clamp" => Ok(FluidMethod::Clamp),
            "locks" | "lock" => Ok(FluidMethod::Locks),
            _ => Err(format!("Unknown fluid method: {s}")),
        }
    }
}

/// Unit label recorded in settings. Sizes are always stored in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    #[default]
    Px,
    Rem,
    Em,
    Pt,
}

impl SizeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeUnit::Px => "px",
            SizeUnit::Rem => "rem",
            SizeUnit::Em => "em",
            SizeUnit::Pt => "pt",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit used when presenting pixel sizes to a reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    Px,
    /// Pixels divided by a 16px root size.
    Rem,
    /// Pixels times 0.75.
    Pt,
}

impl DisplayUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayUnit::Px => "px",
            DisplayUnit::Rem => "rem",
            DisplayUnit::Pt => "pt",
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Font styling for one text group (headings or body).
///
/// Values are kept as strings because they are copied verbatim into CSS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontSettings {
    pub family: String,
    pub weight: String,
    pub letter_spacing: String,
    pub line_height: String,
    pub color: String,
}

impl FontSettings {
    /// Default heading styling.
    pub fn headings() -> Self {
        Self {
            family: "Inter".to_string(),
            weight: "600".to_string(),
            letter_spacing: "-0.025em".to_string(),
            line_height: "1.2".to_string(),
            color: "#060606".to_string(),
        }
    }

    /// Default body styling.
    pub fn body() -> Self {
        Self {
            family: "Inter".to_string(),
            weight: "400".to_string(),
            letter_spacing: "0".to_string(),
            line_height: "1.5".to_string(),
            color: "#333333".to_string(),
        }
    }
}

impl Default for FontSettings {
    fn default() -> Self {
        Self::body()
    }
}

/// Complete calculator configuration for a static scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypographySettings {
    /// Base size in pixels.
    pub base_size: f64,
    /// Display label only; does not change stored sizes.
    pub unit: SizeUnit,
    pub scale_ratio: f64,
    pub headings: FontSettings,
    pub body: FontSettings,
}

impl Default for TypographySettings {
    fn default() -> Self {
        Self {
            base_size: 16.0,
            unit: SizeUnit::Px,
            // Minor third
            scale_ratio: 1.2,
            headings: FontSettings::headings(),
            body: FontSettings::body(),
        }
    }
}

impl TypographySettings {
    /// Scale parameters described by these settings.
    pub fn params(&self) -> ScaleParameters {
        ScaleParameters {
            base_size: self.base_size,
            ratio: self.scale_ratio,
        }
    }
}
