//! Drawable primitives emitted by the face renderer
//!
//! Shapes are plain descriptions (center, size, rotation, arc span). Sizes
//! are full widths/heights as a plotting surface expects them; angles are
//! degrees, counter-clockwise.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// A point in plot coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Reflect across the vertical axis
    pub fn mirror_x(&self) -> Self {
        Self { x: -self.x, y: self.y }
    }
}

/// A color in RGBA format (0.0 to 1.0)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a color from RGB (alpha = 1.0)
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Parse a hex string ("#1F77B4" or "1F77B4")
    pub fn from_hex(hex: &str) -> ConfigResult<Self> {
        let digits = hex.trim_start_matches('#');
        let invalid = || ConfigError::InvalidColor(hex.to_string());
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(|v| v as f32 / 255.0)
                .map_err(|_| invalid())
        };

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Outline color and width shared by every part of a face
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// A drawable primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum Shape {
    /// Ellipse rotated by `angle` degrees about its center
    Ellipse {
        center: Point,
        width: f64,
        height: f64,
        angle: f64,
        filled: bool,
        stroke: Stroke,
    },
    Circle {
        center: Point,
        radius: f64,
        filled: bool,
        stroke: Stroke,
    },
    /// Straight segment
    Line {
        start: Point,
        end: Point,
        stroke: Stroke,
    },
    /// Elliptical arc from `theta1` to `theta2` degrees, measured in the
    /// ellipse frame after rotating it by `angle`
    Arc {
        center: Point,
        width: f64,
        height: f64,
        angle: f64,
        theta1: f64,
        theta2: f64,
        stroke: Stroke,
    },
}

impl Shape {
    /// Short kind name
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Ellipse { .. } => "ellipse",
            Shape::Circle { .. } => "circle",
            Shape::Line { .. } => "line",
            Shape::Arc { .. } => "arc",
        }
    }

    pub fn stroke(&self) -> Stroke {
        match self {
            Shape::Ellipse { stroke, .. }
            | Shape::Circle { stroke, .. }
            | Shape::Line { stroke, .. }
            | Shape::Arc { stroke, .. } => *stroke,
        }
    }

    pub fn is_filled(&self) -> bool {
        match self {
            Shape::Ellipse { filled, .. } | Shape::Circle { filled, .. } => *filled,
            Shape::Line { .. } | Shape::Arc { .. } => false,
        }
    }

    /// Axis-aligned bounding box as (min corner, max corner)
    ///
    /// Arcs report the box of their full ellipse.
    pub fn bounds(&self) -> (Point, Point) {
        match *self {
            Shape::Ellipse {
                center,
                width,
                height,
                angle,
                ..
            }
            | Shape::Arc {
                center,
                width,
                height,
                angle,
                ..
            } => {
                let (sin, cos) = angle.to_radians().sin_cos();
                let (a, b) = (width / 2.0, height / 2.0);
                let half_w = ((a * cos).powi(2) + (b * sin).powi(2)).sqrt();
                let half_h = ((a * sin).powi(2) + (b * cos).powi(2)).sqrt();
                (
                    Point::new(center.x - half_w, center.y - half_h),
                    Point::new(center.x + half_w, center.y + half_h),
                )
            }
            Shape::Circle { center, radius, .. } => (
                Point::new(center.x - radius, center.y - radius),
                Point::new(center.x + radius, center.y + radius),
            ),
            Shape::Line { start, end, .. } => (
                Point::new(start.x.min(end.x), start.y.min(end.y)),
                Point::new(start.x.max(end.x), start.y.max(end.y)),
            ),
        }
    }

    /// Point on an arc at `theta` degrees in the arc's own frame
    pub fn arc_point(&self, theta: f64) -> Option<Point> {
        match *self {
            Shape::Arc {
                center,
                width,
                height,
                angle,
                ..
            } => {
                let (sin_t, cos_t) = theta.to_radians().sin_cos();
                let (lx, ly) = (width / 2.0 * cos_t, height / 2.0 * sin_t);
                let (sin_a, cos_a) = angle.to_radians().sin_cos();
                Some(Point::new(
                    center.x + lx * cos_a - ly * sin_a,
                    center.y + lx * sin_a + ly * cos_a,
                ))
            }
            _ => None,
        }
    }
}
