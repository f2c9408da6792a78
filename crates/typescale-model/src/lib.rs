pub mod error;
pub mod params;
pub mod presets;
pub mod scale;
pub mod settings;
pub mod step;

pub use error::{Result, ScaleError};
pub use params::{FluidRange, ScaleParameters, check_viewport_range};
pub use presets::{RATIO_PRESETS, RatioPreset};
pub use scale::TypeScale;
pub use settings::{DisplayUnit, FluidMethod, FontSettings, SizeUnit, TypographySettings};
pub use step::ScaleStep;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_lookup_by_step() {
        let scale = TypeScale::from_fn(|step| f64::from(step.offset()));
        assert_eq!(scale.get(ScaleStep::H1), 5.0);
        assert_eq!(scale.get(ScaleStep::P), 0.0);
        assert_eq!(scale.get(ScaleStep::Smaller), -2.0);
    }

    #[test]
    fn settings_serializes_camel_case() {
        let settings = TypographySettings::default();
        let json = serde_json::to_value(&settings).expect("serialize settings");
        assert_eq!(json["baseSize"], 16.0);
        assert_eq!(json["scaleRatio"], 1.2);
        assert_eq!(json["headings"]["letterSpacing"], "-0.025em");
    }
}
