//! Viewer settings.
//!
//! Defaults reproduce the lab viewer layout. Nothing is read from disk; the
//! serde derives let front ends embed or log the settings.

use serde::{Deserialize, Serialize};

use crate::{FilterType, TransformSelector};

/// Layout and behaviour settings for the interactive viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Initial window size in logical pixels.
    pub window_size: [f32; 2],
    /// Each loaded image is resized to exactly this size.
    pub pane_size: [u32; 2],
    /// Filter used for that resize.
    pub resize_filter: FilterType,
    /// Name of the file-dialog filter.
    pub file_filter_name: String,
    /// Extensions accepted by the file dialog, without the dot.
    pub file_extensions: Vec<String>,
    /// Dropdown value before the user picks one.
    pub initial_selection: TransformSelector,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_size: [1000.0, 600.0],
            pane_size: [350, 200],
            resize_filter: FilterType::Bilinear,
            file_filter_name: "Image Files".to_string(),
            file_extensions: vec!["jpg".to_string(), "jpeg".to_string()],
            initial_selection: TransformSelector::Negative,
        }
    }
}

impl ViewerConfig {
    /// Create a new ViewerConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pane_width(&self) -> u32 {
        self.pane_size[0]
    }

    pub fn pane_height(&self) -> u32 {
        self.pane_size[1]
    }
}
