//! The nine named steps of a type scale.
//!
//! Steps are ordered from largest (`h1`) to smallest (`smaller`). The set is
//! closed: every [`TypeScale`](crate::TypeScale) carries exactly one value
//! per step.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ScaleError;

/// A named position in the type scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleStep {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    /// Body text. Matches the base size.
    P,
    Small,
    Smaller,
}

impl ScaleStep {
    /// All steps in display order, largest first.
    pub const ALL: [ScaleStep; 9] = [
        ScaleStep::H1,
        ScaleStep::H2,
        ScaleStep::H3,
        ScaleStep::H4,
        ScaleStep::H5,
        ScaleStep::H6,
        ScaleStep::P,
        ScaleStep::Small,
        ScaleStep::Smaller,
    ];

    /// Heading steps, largest first. Only these move when a scale is shifted.
    pub const HEADINGS: [ScaleStep; 6] = [
        ScaleStep::H1,
        ScaleStep::H2,
        ScaleStep::H3,
        ScaleStep::H4,
        ScaleStep::H5,
        ScaleStep::H6,
    ];

    /// Returns the lowercase name used in JSON keys and HTML tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleStep::H1 => "h1",
            ScaleStep::H2 => "h2",
            ScaleStep::H3 => "h3",
            ScaleStep::H4 => "h4",
            ScaleStep::H5 => "h5",
            ScaleStep::H6 => "h6",
            ScaleStep::P => "p",
            ScaleStep::Small => "small",
            ScaleStep::Smaller => "smaller",
        }
    }

    /// Exponent applied to the ratio for this step.
    ///
    /// `h6` and `p` share offset 0, so both equal the base size.
    pub fn offset(&self) -> i32 {
        match self {
            ScaleStep::H1 => 5,
            ScaleStep::H2 => 4,
            ScaleStep::H3 => 3,
            ScaleStep::H4 => 2,
            ScaleStep::H5 => 1,
            ScaleStep::H6 | ScaleStep::P => 0,
            ScaleStep::Small => -1,
            ScaleStep::Smaller => -2,
        }
    }

    /// CSS custom property holding this step's font size.
    pub fn css_variable(&self) -> &'static str {
        match self {
            ScaleStep::H1 => "--font-size-h1",
            ScaleStep::H2 => "--font-size-h2",
            ScaleStep::H3 => "--font-size-h3",
            ScaleStep::H4 => "--font-size-h4",
            ScaleStep::H5 => "--font-size-h5",
            ScaleStep::H6 => "--font-size-h6",
            ScaleStep::P => "--font-size-base",
            ScaleStep::Small => "--font-size-small",
            ScaleStep::Smaller => "--font-size-smaller",
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(
            self,
            ScaleStep::H1
                | ScaleStep::H2
                | ScaleStep::H3
                | ScaleStep::H4
                | ScaleStep::H5
                | ScaleStep::H6
        )
    }

    /// Position in [`ScaleStep::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ScaleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScaleStep {
    type Err = ScaleError;

    /// Parse a step name (case-insensitive). `base` is accepted for `p`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        match normalized.as_str() {
            "h1" => Ok(ScaleStep::H1),
            "h2" => Ok(ScaleStep::H2),
            "h3" => Ok(ScaleStep::H3),
            "h4" => Ok(ScaleStep::H4),
            "h5" => Ok(ScaleStep::H5),
            "h6" => Ok(ScaleStep::H6),
            "p" | "base" => Ok(ScaleStep::P),
            "small" => Ok(ScaleStep::Small),
            "smaller" => Ok(ScaleStep::Smaller),
            _ => Err(ScaleError::UnknownStep {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_from_str() {
        assert_eq!("H1".parse::<ScaleStep>().unwrap(), ScaleStep::H1);
        assert_eq!(" base ".parse::<ScaleStep>().unwrap(), ScaleStep::P);
        assert_eq!("Smaller".parse::<ScaleStep>().unwrap(), ScaleStep::Smaller);
        assert!("h7".parse::<ScaleStep>().is_err());
    }

    #[test]
    fn test_index_matches_all_order() {
        for (position, step) in ScaleStep::ALL.iter().enumerate() {
            assert_eq!(step.index(), position);
        }
    }

    #[test]
    fn test_offsets_descend() {
        let offsets: Vec<i32> = ScaleStep::ALL.iter().map(ScaleStep::offset).collect();
        assert_eq!(offsets, vec![5, 4, 3, 2, 1, 0, 0, -1, -2]);
    }
}
