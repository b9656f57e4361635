//! pixlab core - point-wise image transforms
//!
//! This crate provides the image model, loading and resizing, the transform
//! engine (negative, log, gamma, grayscale, identity) and the state machine
//! behind the interactive viewer. It has no GUI dependency.

pub mod config;
pub mod decode;
pub mod engine;
pub mod luminance;
pub mod viewer;

pub use config::ViewerConfig;
pub use decode::{load_image, resize, Channels, DecodeError, FilterType, Image};
pub use engine::{grayscale, to_luma, transform, IntensityLut, TransformSelector};
pub use viewer::{Viewer, ViewerError, ViewerEvent, ViewerState};

/// Crate version, shown in the viewer window title.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
