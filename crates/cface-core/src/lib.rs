//! cface-core - Chernoff faces from tabular data
//!
//! Encodes each record of a numeric table as a face, so that many records
//! can be compared at a glance.
//!
//! # Key Components
//!
//! - **Feature**: the fifteen facial features, each with a display range
//! - **FaceDescriptor**: one validated unit value per feature
//! - **normalize_table**: rescales numeric columns to [0, 1] and assigns
//!   them to features in column order
//! - **FaceRenderer**: computes face geometry as drawable shapes
//! - **DrawingSurface**: the seam to whatever plotting backend displays them
//!
//! # Data flow
//!
//! table -> `normalize_table` -> (normalized table, `FeatureMap`) ->
//! `descriptor_from_row` -> `FaceDescriptor` -> `FaceRenderer::render` ->
//! `RenderedFace` -> `RenderedFace::draw` onto a surface.
//!
//! Every step is a pure function of its inputs.

pub mod axis;
pub mod config;
pub mod error;
pub mod face;
pub mod feature;
pub mod geometry;
pub mod normalize;
pub mod render;
pub mod row;
pub mod surface;

pub use axis::*;
pub use config::*;
pub use error::*;
pub use face::*;
pub use feature::*;
pub use geometry::*;
pub use normalize::*;
pub use render::*;
pub use row::*;
pub use surface::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
