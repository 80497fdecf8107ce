//! Face geometry
//!
//! Turns a validated [`FaceDescriptor`] into drawable primitives inside the
//! fixed [-1, 1] x [-1, 1] frame. Parts are emitted in drawing order:
//! nose, head, eyes, pupils, eyebrows, mouth. Eyes, pupils and eyebrows are
//! mirrored about the vertical axis.

use cface_table::DataTable;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::axis::{FaceAxes, Title};
use crate::config::FaceStyle;
use crate::error::{ConfigResult, FaceError, FaceResult};
use crate::face::{FaceDescriptor, ScaledFeatures};
use crate::geometry::{Color, Point, Shape, Stroke};
use crate::normalize::FeatureMap;
use crate::row::descriptor_from_row;
use crate::surface::DrawingSurface;

/// Gap between the top of an eye and its eyebrow anchor, in plot units
const EYEBROW_GAP: f64 = 0.05;

/// Upward nudge of the mouth arc center, in plot units
const MOUTH_LIFT: f64 = 0.01;

/// A face ready to be drawn
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct RenderedFace {
    /// Primitives in drawing order
    pub shapes: Vec<Shape>,
    pub title: Title,
    pub axes: FaceAxes,
}

impl RenderedFace {
    /// Replay the face onto a surface and hand the surface back
    pub fn draw<'s, S: DrawingSurface>(&self, surface: &'s mut S) -> &'s mut S {
        surface.set_xlim(self.axes.x.min, self.axes.x.max);
        surface.set_ylim(self.axes.y.min, self.axes.y.max);
        surface.set_xticks(&self.axes.x_ticks());
        surface.set_yticks(&self.axes.y_ticks());
        surface.set_title(&self.title);
        for shape in &self.shapes {
            surface.add_shape(shape);
        }
        surface
    }
}

/// Vertical distance of the mouth below the face center
///
/// Clamped so the mouth stays inside the lower part of the head outline.
pub fn mouth_offset(head_length: f64, mouth_height: f64) -> f64 {
    mouth_height.min(head_length / 2.0 - head_length / 6.0)
}

/// Render a face with the default style
pub fn render(face: &FaceDescriptor, label: Option<&str>) -> RenderedFace {
    FaceRenderer::default().render(face, label)
}

/// Renders descriptors with a fixed style
#[derive(Clone, Debug, PartialEq)]
pub struct FaceRenderer {
    stroke: Stroke,
    title_x: f64,
    title_y: f64,
}

impl Default for FaceRenderer {
    fn default() -> Self {
        let style = FaceStyle::default();
        let stroke = Stroke {
            color: Color::default(),
            width: style.line_width,
        };
        Self::with_stroke(&style, stroke)
    }
}

impl FaceRenderer {
    /// Create a renderer from a validated style
    pub fn new(style: &FaceStyle) -> ConfigResult<Self> {
        style.validate()?;
        Ok(Self::with_stroke(style, style.stroke()?))
    }

    fn with_stroke(style: &FaceStyle, stroke: Stroke) -> Self {
        Self {
            stroke,
            title_x: style.title_x,
            title_y: style.title_y,
        }
    }

    /// Compute the geometry of a face
    pub fn render(&self, face: &FaceDescriptor, label: Option<&str>) -> RenderedFace {
        let s = face.scaled();

        let mut shapes = Vec::with_capacity(9);
        shapes.push(self.nose(&s));
        shapes.push(self.head(&s));
        shapes.extend(self.eyes(&s));
        shapes.extend(self.pupils(&s));
        shapes.extend(self.eyebrows(&s));
        shapes.push(self.mouth(&s));

        let title = Title {
            text: label.unwrap_or_default().to_string(),
            x: self.title_x,
            y: self.title_y,
        };
        trace!(label = %title.text, shapes = shapes.len(), "rendered face");

        RenderedFace {
            shapes,
            title,
            axes: FaceAxes::default(),
        }
    }

    /// Render row `index` of a normalized table, titled with the row label
    pub fn render_row(
        &self,
        table: &DataTable,
        index: usize,
        feature_map: &FeatureMap,
    ) -> FaceResult<RenderedFace> {
        let row = table.row(index).ok_or(FaceError::MissingRow {
            index,
            rows: table.num_rows(),
        })?;
        let face = descriptor_from_row(&row, feature_map)?;
        Ok(self.render(&face, Some(&row.label())))
    }

    fn nose(&self, s: &ScaledFeatures) -> Shape {
        Shape::Ellipse {
            center: Point::new(0.0, s.nose_length / 4.0),
            width: s.nose_width,
            height: s.nose_length,
            angle: 0.0,
            filled: false,
            stroke: self.stroke,
        }
    }

    fn head(&self, s: &ScaledFeatures) -> Shape {
        Shape::Ellipse {
            center: Point::new(0.0, 0.0),
            width: s.head_width,
            height: s.head_length,
            angle: 0.0,
            filled: false,
            stroke: self.stroke,
        }
    }

    fn eye_centers(s: &ScaledFeatures) -> (Point, Point) {
        let right = Point::new(s.eye_spacing, s.eye_height);
        (right, right.mirror_x())
    }

    fn eyes(&self, s: &ScaledFeatures) -> [Shape; 2] {
        let (right, left) = Self::eye_centers(s);
        let eye = |center, angle| Shape::Ellipse {
            center,
            width: s.eye_width,
            height: s.eye_length,
            angle,
            filled: false,
            stroke: self.stroke,
        };
        [eye(right, s.eye_angle), eye(left, -s.eye_angle)]
    }

    fn pupils(&self, s: &ScaledFeatures) -> [Shape; 2] {
        let (right, left) = Self::eye_centers(s);
        let pupil = |center| Shape::Circle {
            center,
            radius: s.pupil_size,
            filled: true,
            stroke: self.stroke,
        };
        [pupil(right), pupil(left)]
    }

    fn eyebrows(&self, s: &ScaledFeatures) -> [Shape; 2] {
        let (sin, cos) = s.eyebrow_angle.to_radians().sin_cos();
        let dx = cos * s.eyebrow_length;
        let dy = sin * s.eyebrow_length;

        let anchor = Point::new(
            s.eye_spacing - s.eyebrow_length / 2.0,
            s.eye_height + s.eyebrow_height + s.eye_width / 2.0 + EYEBROW_GAP,
        );
        let mirrored = anchor.mirror_x();

        [
            Shape::Line {
                start: anchor,
                end: Point::new(anchor.x + dx, anchor.y + dy),
                stroke: self.stroke,
            },
            Shape::Line {
                start: mirrored,
                end: Point::new(mirrored.x - dx, mirrored.y + dy),
                stroke: self.stroke,
            },
        ]
    }

    fn mouth(&self, s: &ScaledFeatures) -> Shape {
        let offset = mouth_offset(s.head_length, s.mouth_height);
        let size = s.head_length / 3.0;
        Shape::Arc {
            center: Point::new(0.0, -offset + MOUTH_LIFT),
            width: size,
            height: size,
            // Center the span on straight down
            angle: -90.0 - s.mouth_length / 2.0,
            theta1: 0.0,
            theta2: s.mouth_length,
            stroke: self.stroke,
        }
    }
}
