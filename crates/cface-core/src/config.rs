//! Rendering style configuration
//!
//! Style only affects how parts are drawn (color, line width, label
//! placement), never where they are.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::geometry::{Color, Stroke};

/// Style applied to every part of a rendered face
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FaceStyle {
    /// Outline color as `#RRGGBB`; pupils are filled with it too
    pub stroke_color: String,
    /// Outline width in surface units
    pub line_width: f64,
    /// Label x position as a fraction of the axes width
    pub title_x: f64,
    /// Label y position as a fraction of the axes height
    pub title_y: f64,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::default().to_hex(),
            line_width: 1.0,
            title_x: 0.02,
            title_y: 0.02,
        }
    }
}

impl FaceStyle {
    /// Load a style from a TOML string
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let style: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize the style to TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load a style from a JSON string
    pub fn from_json(json_str: &str) -> ConfigResult<Self> {
        let style: Self =
            serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize the style to JSON
    pub fn to_json(&self) -> ConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        Color::from_hex(&self.stroke_color)?;

        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(ConfigError::OutOfRange(format!(
                "line_width must be positive, got {}",
                self.line_width
            )));
        }

        for (name, value) in [("title_x", self.title_x), ("title_y", self.title_y)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange(format!(
                    "{} must be between 0.0 and 1.0, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Resolve the stroke shared by all face parts
    pub fn stroke(&self) -> ConfigResult<Stroke> {
        Ok(Stroke {
            color: Color::from_hex(&self.stroke_color)?,
            width: self.line_width,
        })
    }
}
