//! Face descriptors: one validated unit value per feature

use serde::{Deserialize, Serialize};

use crate::error::{FaceError, FaceResult};
use crate::feature::{Feature, FEATURE_COUNT};

/// A complete, validated set of unit feature values
///
/// Every field lies in [0, 1]. Instances only come out of validated
/// construction (`builder`, `from_fn`, deserialization), so holding one
/// means the values are renderable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawFace")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FaceDescriptor {
    pub nose_width: f64,
    pub nose_length: f64,
    pub head_width: f64,
    pub head_length: f64,
    pub eye_width: f64,
    pub eye_length: f64,
    pub eye_spacing: f64,
    pub eye_height: f64,
    pub eye_angle: f64,
    pub pupil_size: f64,
    pub mouth_length: f64,
    pub mouth_height: f64,
    pub eyebrow_length: f64,
    pub eyebrow_angle: f64,
    pub eyebrow_height: f64,
}

impl FaceDescriptor {
    /// Start a descriptor with every feature at its default
    pub fn builder() -> FaceDescriptorBuilder {
        FaceDescriptorBuilder::default()
    }

    /// Build a descriptor by asking `value` for each feature in order
    pub fn from_fn<F: FnMut(Feature) -> f64>(mut value: F) -> FaceResult<Self> {
        let mut values = [0.0; FEATURE_COUNT];
        for feature in Feature::ALL {
            values[feature.index()] = value(feature);
        }
        Self::from_array(values)
    }

    fn from_array(values: [f64; FEATURE_COUNT]) -> FaceResult<Self> {
        for feature in Feature::ALL {
            let value = values[feature.index()];
            // NaN fails both comparisons, so it is rejected too
            if !(0.0..=1.0).contains(&value) {
                return Err(FaceError::OutOfRange {
                    feature: feature.name().to_string(),
                    value,
                });
            }
        }

        let [nose_width, nose_length, head_width, head_length, eye_width, eye_length, eye_spacing, eye_height, eye_angle, pupil_size, mouth_length, mouth_height, eyebrow_length, eyebrow_angle, eyebrow_height] =
            values;

        Ok(Self {
            nose_width,
            nose_length,
            head_width,
            head_length,
            eye_width,
            eye_length,
            eye_spacing,
            eye_height,
            eye_angle,
            pupil_size,
            mouth_length,
            mouth_height,
            eyebrow_length,
            eyebrow_angle,
            eyebrow_height,
        })
    }

    /// Unit value of a feature
    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::NoseWidth => self.nose_width,
            Feature::NoseLength => self.nose_length,
            Feature::HeadWidth => self.head_width,
            Feature::HeadLength => self.head_length,
            Feature::EyeWidth => self.eye_width,
            Feature::EyeLength => self.eye_length,
            Feature::EyeSpacing => self.eye_spacing,
            Feature::EyeHeight => self.eye_height,
            Feature::EyeAngle => self.eye_angle,
            Feature::PupilSize => self.pupil_size,
            Feature::MouthLength => self.mouth_length,
            Feature::MouthHeight => self.mouth_height,
            Feature::EyebrowLength => self.eyebrow_length,
            Feature::EyebrowAngle => self.eyebrow_angle,
            Feature::EyebrowHeight => self.eyebrow_height,
        }
    }

    /// Display-unit value of a feature
    pub fn scaled_value(&self, feature: Feature) -> f64 {
        feature.spec().scale(self.get(feature))
    }

    /// All (feature, unit value) pairs in declared order
    pub fn values(&self) -> [(Feature, f64); FEATURE_COUNT] {
        Feature::ALL.map(|feature| (feature, self.get(feature)))
    }

    /// Scale every feature into its display range
    pub fn scaled(&self) -> ScaledFeatures {
        let s = |feature: Feature| self.scaled_value(feature);
        ScaledFeatures {
            nose_width: s(Feature::NoseWidth),
            nose_length: s(Feature::NoseLength),
            head_width: s(Feature::HeadWidth),
            head_length: s(Feature::HeadLength),
            eye_width: s(Feature::EyeWidth),
            eye_length: s(Feature::EyeLength),
            eye_spacing: s(Feature::EyeSpacing),
            eye_height: s(Feature::EyeHeight),
            eye_angle: s(Feature::EyeAngle),
            pupil_size: s(Feature::PupilSize),
            mouth_length: s(Feature::MouthLength),
            mouth_height: s(Feature::MouthHeight),
            eyebrow_length: s(Feature::EyebrowLength),
            eyebrow_angle: s(Feature::EyebrowAngle),
            eyebrow_height: s(Feature::EyebrowHeight),
        }
    }
}

impl Default for FaceDescriptor {
    fn default() -> Self {
        Self {
            nose_width: Feature::NoseWidth.default_value(),
            nose_length: Feature::NoseLength.default_value(),
            head_width: Feature::HeadWidth.default_value(),
            head_length: Feature::HeadLength.default_value(),
            eye_width: Feature::EyeWidth.default_value(),
            eye_length: Feature::EyeLength.default_value(),
            eye_spacing: Feature::EyeSpacing.default_value(),
            eye_height: Feature::EyeHeight.default_value(),
            eye_angle: Feature::EyeAngle.default_value(),
            pupil_size: Feature::PupilSize.default_value(),
            mouth_length: Feature::MouthLength.default_value(),
            mouth_height: Feature::MouthHeight.default_value(),
            eyebrow_length: Feature::EyebrowLength.default_value(),
            eyebrow_angle: Feature::EyebrowAngle.default_value(),
            eyebrow_height: Feature::EyebrowHeight.default_value(),
        }
    }
}

/// Feature values already scaled into display units
///
/// Produced fresh for each render; angles are degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledFeatures {
    pub nose_width: f64,
    pub nose_length: f64,
    pub head_width: f64,
    pub head_length: f64,
    pub eye_width: f64,
    pub eye_length: f64,
    pub eye_spacing: f64,
    pub eye_height: f64,
    pub eye_angle: f64,
    pub pupil_size: f64,
    pub mouth_length: f64,
    pub mouth_height: f64,
    pub eyebrow_length: f64,
    pub eyebrow_angle: f64,
    pub eyebrow_height: f64,
}

/// Collects optional per-feature values, validating on `build`
#[derive(Debug, Clone, Default)]
pub struct FaceDescriptorBuilder {
    values: [Option<f64>; FEATURE_COUNT],
}

macro_rules! feature_setters {
    ($($method:ident => $feature:ident),* $(,)?) => {
        $(
            #[doc = concat!("Set `", stringify!($method), "` (unit space)")]
            pub fn $method(self, value: f64) -> Self {
                self.set(Feature::$feature, value)
            }
        )*
    };
}

impl FaceDescriptorBuilder {
    /// Set any feature by key
    pub fn set(mut self, feature: Feature, value: f64) -> Self {
        self.values[feature.index()] = Some(value);
        self
    }

    feature_setters! {
        nose_width => NoseWidth,
        nose_length => NoseLength,
        head_width => HeadWidth,
        head_length => HeadLength,
        eye_width => EyeWidth,
        eye_length => EyeLength,
        eye_spacing => EyeSpacing,
        eye_height => EyeHeight,
        eye_angle => EyeAngle,
        pupil_size => PupilSize,
        mouth_length => MouthLength,
        mouth_height => MouthHeight,
        eyebrow_length => EyebrowLength,
        eyebrow_angle => EyebrowAngle,
        eyebrow_height => EyebrowHeight,
    }

    /// Validate and build; unset features take their defaults
    pub fn build(self) -> FaceResult<FaceDescriptor> {
        FaceDescriptor::from_fn(|feature| {
            self.values[feature.index()].unwrap_or_else(|| feature.default_value())
        })
    }
}

/// Unvalidated wire form of a descriptor; absent fields take defaults
#[derive(Deserialize)]
#[serde(default)]
struct RawFace {
    nose_width: f64,
    nose_length: f64,
    head_width: f64,
    head_length: f64,
    eye_width: f64,
    eye_length: f64,
    eye_spacing: f64,
    eye_height: f64,
    eye_angle: f64,
    pupil_size: f64,
    mouth_length: f64,
    mouth_height: f64,
    eyebrow_length: f64,
    eyebrow_angle: f64,
    eyebrow_height: f64,
}

impl Default for RawFace {
    fn default() -> Self {
        let d = FaceDescriptor::default();
        Self {
            nose_width: d.nose_width,
            nose_length: d.nose_length,
            head_width: d.head_width,
            head_length: d.head_length,
            eye_width: d.eye_width,
            eye_length: d.eye_length,
            eye_spacing: d.eye_spacing,
            eye_height: d.eye_height,
            eye_angle: d.eye_angle,
            pupil_size: d.pupil_size,
            mouth_length: d.mouth_length,
            mouth_height: d.mouth_height,
            eyebrow_length: d.eyebrow_length,
            eyebrow_angle: d.eyebrow_angle,
            eyebrow_height: d.eyebrow_height,
        }
    }
}

impl TryFrom<RawFace> for FaceDescriptor {
    type Error = FaceError;

    fn try_from(raw: RawFace) -> Result<Self, Self::Error> {
        FaceDescriptor::from_array([
            raw.nose_width,
            raw.nose_length,
            raw.head_width,
            raw.head_length,
            raw.eye_width,
            raw.eye_length,
            raw.eye_spacing,
            raw.eye_height,
            raw.eye_angle,
            raw.pupil_size,
            raw.mouth_length,
            raw.mouth_height,
            raw.eyebrow_length,
            raw.eyebrow_angle,
            raw.eyebrow_height,
        ])
    }
}
