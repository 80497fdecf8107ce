//! The fifteen facial features and their display ranges
//!
//! Every feature is addressed in unit space [0, 1]. Each one carries a
//! display range (plot units, or degrees for angles and the mouth arc) that
//! unit values are scaled into at render time. The table is a process-wide
//! constant; nothing mutates it.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::FaceError;

/// A named facial feature, in the fixed assignment order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Feature {
    NoseWidth,
    NoseLength,
    HeadWidth,
    HeadLength,
    EyeWidth,
    EyeLength,
    EyeSpacing,
    EyeHeight,
    EyeAngle,
    PupilSize,
    MouthLength,
    MouthHeight,
    EyebrowLength,
    EyebrowAngle,
    EyebrowHeight,
}

/// Number of facial features
pub const FEATURE_COUNT: usize = 15;

impl Feature {
    /// All features in declared order
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::NoseWidth,
        Feature::NoseLength,
        Feature::HeadWidth,
        Feature::HeadLength,
        Feature::EyeWidth,
        Feature::EyeLength,
        Feature::EyeSpacing,
        Feature::EyeHeight,
        Feature::EyeAngle,
        Feature::PupilSize,
        Feature::MouthLength,
        Feature::MouthHeight,
        Feature::EyebrowLength,
        Feature::EyebrowAngle,
        Feature::EyebrowHeight,
    ];

    /// Position in declared order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The feature's spec entry
    pub fn spec(&self) -> &'static FeatureSpec {
        &FEATURE_SPECS[self.index()]
    }

    /// snake_case feature name
    pub fn name(&self) -> &'static str {
        self.spec().name
    }

    /// Unit-space default
    pub fn default_value(&self) -> f64 {
        self.spec().default
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feature {
    type Err = FaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FEATURES_BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| FaceError::UnknownFeature(s.to_string()))
    }
}

/// Display range and default of one feature
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureSpec {
    /// snake_case name
    pub name: &'static str,
    /// Display value at unit 0
    pub min: f64,
    /// Display value at unit 1
    pub max: f64,
    /// Unit-space default
    pub default: f64,
}

impl FeatureSpec {
    const fn new(name: &'static str, min: f64, max: f64) -> Self {
        Self {
            name,
            min,
            max,
            default: 0.5,
        }
    }

    /// Look up a spec by feature name
    pub fn by_name(name: &str) -> Option<&'static FeatureSpec> {
        FEATURES_BY_NAME.get(name).map(|feature| feature.spec())
    }

    /// Scale a unit value into this feature's display range
    pub fn scale(&self, unit: f64) -> f64 {
        scale_to_range(unit, self.min, self.max)
    }
}

/// Feature display ranges, indexed by `Feature::index`
///
/// Lengths are in plot units of a [-1, 1] x [-1, 1] frame; `eye_angle` and
/// `eyebrow_angle` are degrees from horizontal; `mouth_length` is the arc
/// span in degrees. `pupil_size` is a radius, all other sizes are full
/// widths/heights.
pub static FEATURE_SPECS: [FeatureSpec; FEATURE_COUNT] = [
    FeatureSpec::new("nose_width", 0.05, 0.25),
    FeatureSpec::new("nose_length", 0.1, 0.4),
    FeatureSpec::new("head_width", 1.0, 1.9),
    FeatureSpec::new("head_length", 1.0, 1.9),
    FeatureSpec::new("eye_width", 0.1, 0.3),
    FeatureSpec::new("eye_length", 0.05, 0.2),
    FeatureSpec::new("eye_spacing", 0.15, 0.35),
    FeatureSpec::new("eye_height", 0.1, 0.3),
    FeatureSpec::new("eye_angle", -30.0, 30.0),
    FeatureSpec::new("pupil_size", 0.01, 0.05),
    FeatureSpec::new("mouth_length", 30.0, 150.0),
    FeatureSpec::new("mouth_height", 0.2, 0.5),
    FeatureSpec::new("eyebrow_length", 0.1, 0.3),
    FeatureSpec::new("eyebrow_angle", -30.0, 30.0),
    FeatureSpec::new("eyebrow_height", 0.02, 0.15),
];

lazy_static! {
    static ref FEATURES_BY_NAME: HashMap<&'static str, Feature> =
        Feature::ALL.iter().map(|f| (f.name(), *f)).collect();
}

/// Linear map from [0, 1] onto [min, max]
///
/// Both endpoints are exact: 0 gives `min` and 1 gives `max`.
pub fn scale_to_range(unit: f64, min: f64, max: f64) -> f64 {
    (1.0 - unit) * min + unit * max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specs_follow_feature_order() {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            assert_eq!(feature.index(), i);
            assert_eq!(FEATURE_SPECS[i].name, feature.name());
        }
    }

    #[test]
    fn test_spec_invariants() {
        for spec in FEATURE_SPECS.iter() {
            assert!(spec.min <= spec.max, "{} has min > max", spec.name);
            assert!((0.0..=1.0).contains(&spec.default));
        }
    }

    #[test]
    fn test_feature_from_str() {
        assert_eq!("eye_angle".parse::<Feature>().unwrap(), Feature::EyeAngle);
        assert_eq!(
            "nose".parse::<Feature>(),
            Err(FaceError::UnknownFeature("nose".to_string()))
        );
    }

    #[test]
    fn test_spec_by_name() {
        let spec = FeatureSpec::by_name("mouth_length").unwrap();
        assert_eq!(spec.min, 30.0);
        assert_eq!(spec.max, 150.0);
        assert!(FeatureSpec::by_name("ears").is_none());
    }

    #[test]
    fn test_scale_to_range() {
        assert_eq!(scale_to_range(0.5, 0.0, 100.0), 50.0);
        assert!((scale_to_range(0.3, -100.0, 100.0) + 40.0).abs() < 1e-12);
        assert_eq!(scale_to_range(0.0, 0.1, 0.4), 0.1);
        assert_eq!(scale_to_range(1.0, 0.1, 0.4), 0.4);
    }

    #[test]
    fn test_feature_serde_uses_snake_case() {
        let json = serde_json::to_string(&Feature::EyebrowHeight).unwrap();
        assert_eq!(json, "\"eyebrow_height\"");
    }
}
