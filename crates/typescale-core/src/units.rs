//! Presenting pixel sizes in other units.

use typescale_model::DisplayUnit;

use crate::numeric::to_fixed_2;

/// Root font size assumed for rem conversion.
pub const ROOT_FONT_SIZE: f64 = 16.0;

/// Points per CSS pixel.
pub const POINTS_PER_PIXEL: f64 = 0.75;

/// Format a pixel size in `unit` with two decimals, e.g. `"1.25rem"`.
pub fn convert_unit(px: f64, unit: DisplayUnit) -> String {
    let value = match unit {
        DisplayUnit::Px => px,
        DisplayUnit::Rem => px / ROOT_FONT_SIZE,
        DisplayUnit::Pt => px * POINTS_PER_PIXEL,
    };
    format!("{}{}", to_fixed_2(value), unit.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_unit() {
        assert_eq!(convert_unit(16.0, DisplayUnit::Px), "16.00px");
        assert_eq!(convert_unit(16.0, DisplayUnit::Rem), "1.00rem");
        assert_eq!(convert_unit(16.0, DisplayUnit::Pt), "12.00pt");
        assert_eq!(convert_unit(39.81, DisplayUnit::Rem), "2.49rem");
        assert_eq!(convert_unit(2.0, DisplayUnit::Rem), "0.13rem");
    }
}
