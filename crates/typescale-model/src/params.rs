//! Inputs to the scale engine.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaleError};

/// Base size and ratio of a geometric type scale.
///
/// [`ScaleParameters::new`] is the checked constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleParameters {
    /// Size of the `p` step in pixels.
    pub base_size: f64,
    /// Multiplier between adjacent steps.
    pub ratio: f64,
}

impl Default for ScaleParameters {
    fn default() -> Self {
        Self {
            base_size: 16.0,
            ratio: 1.2,
        }
    }
}

impl ScaleParameters {
    /// Create parameters, rejecting non-positive or non-finite values.
    pub fn new(base_size: f64, ratio: f64) -> Result<Self> {
        let params = Self { base_size, ratio };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !is_positive_finite(self.base_size) {
            return Err(ScaleError::InvalidBaseSize {
                value: self.base_size,
            });
        }
        if !is_positive_finite(self.ratio) {
            return Err(ScaleError::InvalidRatio { value: self.ratio });
        }
        Ok(())
    }
}

/// Two scale endpoints bound to a viewport width range.
///
/// Below `min_viewport` the scale uses the `min_*` endpoint, above
/// `max_viewport` the `max_*` endpoint, and in between both base size and
/// ratio are interpolated linearly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluidRange {
    pub min_viewport: u32,
    pub max_viewport: u32,
    pub min_base: f64,
    pub max_base: f64,
    pub min_ratio: f64,
    pub max_ratio: f64,
}

impl Default for FluidRange {
    fn default() -> Self {
        Self {
            min_viewport: 320,
            max_viewport: 1240,
            min_base: 16.0,
            max_base: 20.0,
            min_ratio: 1.2,
            max_ratio: 1.333,
        }
    }
}

impl FluidRange {
    /// Create a range over the given viewports with the default size endpoints.
    pub fn new(min_viewport: u32, max_viewport: u32) -> Result<Self> {
        let range = Self {
            min_viewport,
            max_viewport,
            ..Self::default()
        };
        range.check_viewports()?;
        Ok(range)
    }

    /// Set the base size endpoints.
    #[must_use]
    pub fn with_base(mut self, min_base: f64, max_base: f64) -> Self {
        self.min_base = min_base;
        self.max_base = max_base;
        self
    }

    /// Set the ratio endpoints.
    #[must_use]
    pub fn with_ratio(mut self, min_ratio: f64, max_ratio: f64) -> Self {
        self.min_ratio = min_ratio;
        self.max_ratio = max_ratio;
        self
    }

    /// Check the viewports and both endpoint parameter sets.
    pub fn validate(&self) -> Result<()> {
        self.check_viewports()?;
        self.min_params().validate()?;
        self.max_params().validate()
    }

    /// Width of the viewport range in pixels.
    ///
    /// Errors when the range is empty or inverted.
    pub fn span(&self) -> Result<f64> {
        self.check_viewports()?;
        Ok(f64::from(self.max_viewport - self.min_viewport))
    }

    pub fn min_params(&self) -> ScaleParameters {
        ScaleParameters {
            base_size: self.min_base,
            ratio: self.min_ratio,
        }
    }

    pub fn max_params(&self) -> ScaleParameters {
        ScaleParameters {
            base_size: self.max_base,
            ratio: self.max_ratio,
        }
    }

    fn check_viewports(&self) -> Result<()> {
        check_viewport_range(self.min_viewport, self.max_viewport)
    }
}

/// Reject viewport pairs that cannot be interpolated between.
pub fn check_viewport_range(min_viewport: u32, max_viewport: u32) -> Result<()> {
    if min_viewport == max_viewport {
        return Err(ScaleError::EmptyViewportRange {
            viewport: min_viewport,
        });
    }
    if min_viewport > max_viewport {
        return Err(ScaleError::InvertedViewportRange {
            min: min_viewport,
            max: max_viewport,
        });
    }
    Ok(())
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
