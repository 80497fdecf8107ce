//! Axes frame and title placement for a single face

use serde::{Deserialize, Serialize};

/// Fixed plot limits on both axes
pub const AXIS_LIMITS: (f64, f64) = (-1.0, 1.0);

/// Configuration for one axis
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct AxisConfig {
    /// Data range
    pub min: f64,
    pub max: f64,

    /// Whether to show tick marks
    pub show_ticks: bool,
}

impl AxisConfig {
    /// Create an axis without ticks
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            show_ticks: false,
        }
    }

    /// Tick positions; empty whenever ticks are hidden
    pub fn ticks(&self) -> Vec<f64> {
        if !self.show_ticks {
            return Vec::new();
        }
        // Quarter steps across the range
        (0..=4)
            .map(|i| self.min + (self.max - self.min) * i as f64 / 4.0)
            .collect()
    }
}

/// The axes a face is drawn in
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FaceAxes {
    pub x: AxisConfig,
    pub y: AxisConfig,
}

impl FaceAxes {
    pub fn x_ticks(&self) -> Vec<f64> {
        self.x.ticks()
    }

    pub fn y_ticks(&self) -> Vec<f64> {
        self.y.ticks()
    }
}

impl Default for FaceAxes {
    fn default() -> Self {
        let (min, max) = AXIS_LIMITS;
        Self {
            x: AxisConfig::new(min, max),
            y: AxisConfig::new(min, max),
        }
    }
}

/// Face label, placed in axes-fraction coordinates (0..1 from lower-left)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Title {
    pub text: String,
    pub x: f64,
    pub y: f64,
}
