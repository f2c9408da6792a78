//! Named scale ratios drawn from musical intervals.

use serde::Serialize;
use std::str::FromStr;

use crate::error::ScaleError;

/// A well-known scale ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioPreset {
    pub name: &'static str,
    /// Kebab-case identifier used on the command line.
    pub slug: &'static str,
    pub value: f64,
    pub description: &'static str,
}

pub const RATIO_PRESETS: [RatioPreset; 8] = [
    RatioPreset {
        name: "Minor Second",
        slug: "minor-second",
        value: 1.067,
        description: "Subtle, barely noticeable",
    },
    RatioPreset {
        name: "Major Second",
        slug: "major-second",
        value: 1.125,
        description: "Musical and pleasant",
    },
    RatioPreset {
        name: "Minor Third",
        slug: "minor-third",
        value: 1.2,
        description: "Classic, very readable",
    },
    RatioPreset {
        name: "Major Third",
        slug: "major-third",
        value: 1.25,
        description: "Comfortable for reading",
    },
    RatioPreset {
        name: "Perfect Fourth",
        slug: "perfect-fourth",
        value: 1.333,
        description: "Widely used in web design",
    },
    RatioPreset {
        name: "Augmented Fourth",
        slug: "augmented-fourth",
        value: 1.414,
        description: "Bold but still readable",
    },
    RatioPreset {
        name: "Perfect Fifth",
        slug: "perfect-fifth",
        value: 1.5,
        description: "Dramatic, strong contrast",
    },
    RatioPreset {
        name: "Golden Ratio",
        slug: "golden-ratio",
        value: 1.618,
        description: "Natural, aesthetically pleasing",
    },
];

impl RatioPreset {
    /// Find the preset whose value equals `ratio` exactly.
    ///
    /// Ratios that are not presets are "custom"; there is no tolerance.
    pub fn for_ratio(ratio: f64) -> Option<&'static RatioPreset> {
        RATIO_PRESETS.iter().find(|preset| preset.value == ratio)
    }

    /// Find a preset by slug or display name, ignoring case.
    pub fn find(query: &str) -> Option<&'static RatioPreset> {
        let normalized = query.trim().to_lowercase().replace([' ', '_'], "-");
        RATIO_PRESETS.iter().find(|preset| preset.slug == normalized)
    }

    /// Label shown in selectors, e.g. "Minor Third (1.2)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.value)
    }
}

impl FromStr for RatioPreset {
    type Err = ScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RatioPreset::find(s)
            .copied()
            .ok_or_else(|| ScaleError::UnknownPreset {
                name: s.to_string(),
            })
    }
}
