//! Drawing-surface contract
//!
//! A rendered face is surface-agnostic. Anything that can set limits, hide
//! ticks, place a title and take shapes can display it.

use crate::axis::Title;
use crate::geometry::Shape;

/// A 2D plotting surface that faces are drawn onto
pub trait DrawingSurface {
    /// Set the x-axis limits
    fn set_xlim(&mut self, min: f64, max: f64);

    /// Set the y-axis limits
    fn set_ylim(&mut self, min: f64, max: f64);

    /// Replace the x-axis ticks
    fn set_xticks(&mut self, ticks: &[f64]);

    /// Replace the y-axis ticks
    fn set_yticks(&mut self, ticks: &[f64]);

    /// Place the title
    fn set_title(&mut self, title: &Title);

    /// Insert a primitive
    fn add_shape(&mut self, shape: &Shape);
}

/// A surface that records what was drawn on it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pub xlim: Option<(f64, f64)>,
    pub ylim: Option<(f64, f64)>,
    pub xticks: Vec<f64>,
    pub yticks: Vec<f64>,
    pub title: Option<Title>,
    pub shapes: Vec<Shape>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_xlim(&mut self, min: f64, max: f64) {
        self.xlim = Some((min, max));
    }

    fn set_ylim(&mut self, min: f64, max: f64) {
        self.ylim = Some((min, max));
    }

    fn set_xticks(&mut self, ticks: &[f64]) {
        self.xticks = ticks.to_vec();
    }

    fn set_yticks(&mut self, ticks: &[f64]) {
        self.yticks = ticks.to_vec();
    }

    fn set_title(&mut self, title: &Title) {
        self.title = Some(title.clone());
    }

    fn add_shape(&mut self, shape: &Shape) {
        self.shapes.push(shape.clone());
    }
}
