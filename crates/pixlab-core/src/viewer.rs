//! Toolkit-independent state machine behind the interactive viewer.
//!
//! The viewer owns the single "currently loaded image" slot. Front ends feed it
//! discrete [`ViewerEvent`]s and redraw whenever [`Viewer::generation`] changes.
//!
//! ```text
//! Empty --open--> Loaded --apply--> Transformed
//!                   ^                   |
//!                   +-------open--------+
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::decode::{load_image, resize};
use crate::engine::transform;
use crate::{DecodeError, Image, TransformSelector, ViewerConfig};

/// Failures the user can trigger from the viewer.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// The chosen file is missing, unreadable or not an image.
    #[error("Error loading image: {0}")]
    LoadFailure(#[from] DecodeError),

    /// A transform was requested before any image was opened.
    #[error("No image to transform")]
    NoImageLoaded,
}

/// What the panes currently show.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewerState {
    #[default]
    Empty,
    Loaded {
        original: Image,
    },
    Transformed {
        original: Image,
        transformed: Image,
        /// Selector that produced `transformed`.
        applied: TransformSelector,
    },
}

/// Discrete user input.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerEvent {
    /// Open the image at this path.
    Open(PathBuf),
    /// Change the dropdown value.
    Select(TransformSelector),
    /// Run the selected transform on the loaded image.
    Apply,
}

#[derive(Debug, Clone)]
pub struct Viewer {
    config: ViewerConfig,
    state: ViewerState,
    selection: TransformSelector,
    generation: u64,
    loaded_generation: u64,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        let selection = config.initial_selection;
        Self {
            config,
            state: ViewerState::Empty,
            selection,
            generation: 0,
            loaded_generation: 0,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn selection(&self) -> TransformSelector {
        self.selection
    }

    /// Bumped every time pane content changes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Bumped only when a new original is loaded.
    pub fn loaded_generation(&self) -> u64 {
        self.loaded_generation
    }

    /// The image shown in the left pane.
    pub fn original(&self) -> Option<&Image> {
        match &self.state {
            ViewerState::Empty => None,
            ViewerState::Loaded { original } | ViewerState::Transformed { original, .. } => {
                Some(original)
            }
        }
    }

    /// The image shown in the right pane.
    pub fn transformed(&self) -> Option<&Image> {
        match &self.state {
            ViewerState::Transformed { transformed, .. } => Some(transformed),
            _ => None,
        }
    }

    /// Selector that produced the right pane.
    pub fn applied(&self) -> Option<TransformSelector> {
        match &self.state {
            ViewerState::Transformed { applied, .. } => Some(*applied),
            _ => None,
        }
    }

    /// Load, resize to the pane size and show the image at `path`.
    ///
    /// On failure the previous state is kept.
    pub fn open(&mut self, path: &Path) -> Result<(), ViewerError> {
        let decoded = load_image(path)?;
        let fitted = resize(
            &decoded,
            self.config.pane_width(),
            self.config.pane_height(),
            self.config.resize_filter,
        )?;
        log::info!(
            "opened {} ({}x{})",
            path.display(),
            decoded.width,
            decoded.height
        );
        self.load(fitted);
        Ok(())
    }

    /// Show `image` as the new original, clearing any transform output.
    ///
    /// The selection is kept but not re-applied.
    pub fn load(&mut self, image: Image) {
        self.state = ViewerState::Loaded { original: image };
        self.generation += 1;
        self.loaded_generation += 1;
    }

    pub fn select(&mut self, selection: TransformSelector) {
        if selection != self.selection {
            log::debug!("selected {}", selection);
        }
        self.selection = selection;
    }

    /// Run the selected transform and show the result beside the original.
    pub fn apply(&mut self) -> Result<(), ViewerError> {
        let original = match std::mem::take(&mut self.state) {
            ViewerState::Empty => return Err(ViewerError::NoImageLoaded),
            ViewerState::Loaded { original } | ViewerState::Transformed { original, .. } => {
                original
            }
        };

        let transformed = transform(&original, self.selection);
        log::info!("applied {}", self.selection);

        self.state = ViewerState::Transformed {
            original,
            transformed,
            applied: self.selection,
        };
        self.generation += 1;
        Ok(())
    }

    /// Dispatch one event, logging any failure.
    ///
    /// Returns true when the panes need redrawing.
    pub fn handle(&mut self, event: ViewerEvent) -> bool {
        let before = self.generation;
        let result = match event {
            ViewerEvent::Open(path) => self.open(&path),
            ViewerEvent::Select(selection) => {
                self.select(selection);
                Ok(())
            }
            ViewerEvent::Apply => self.apply(),
        };

        match result {
            Ok(()) => {}
            Err(err @ ViewerError::LoadFailure(_)) => log::error!("{}", err),
            Err(err @ ViewerError::NoImageLoaded) => log::warn!("{}", err),
        }

        self.generation != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Channels;
    use image::{ImageFormat, Rgb, RgbImage};

    fn write_jpeg(name: &str, width: u32, height: u32) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "pixlab-viewer-{}-{}.jpg",
            name,
            std::process::id()
        ));
        RgbImage::from_pixel(width, height, Rgb([90, 140, 200]))
            .save_with_format(&path, ImageFormat::Jpeg)
            .unwrap();
        path
    }

    #[test]
    fn test_starts_empty_with_initial_selection() {
        let viewer = Viewer::default();
        assert_eq!(viewer.state(), &ViewerState::Empty);
        assert_eq!(viewer.selection(), TransformSelector::Negative);
        assert_eq!(viewer.generation(), 0);
        assert!(viewer.original().is_none());
    }

    #[test]
    fn test_open_missing_file_stays_empty() {
        let mut viewer = Viewer::default();
        let result = viewer.open(Path::new("/nonexistent/pixlab/zoo.jpg"));

        assert!(matches!(result, Err(ViewerError::LoadFailure(_))));
        assert_eq!(viewer.state(), &ViewerState::Empty);
        assert!(viewer.original().is_none());
        assert!(viewer.transformed().is_none());
    }

    #[test]
    fn test_handle_open_missing_file_is_not_fatal() {
        let mut viewer = Viewer::default();
        let changed = viewer.handle(ViewerEvent::Open("/nonexistent/pixlab/zoo.jpg".into()));
        assert!(!changed);
        assert_eq!(viewer.state(), &ViewerState::Empty);
    }

    #[test]
    fn test_open_resizes_to_pane() {
        let path = write_jpeg("open", 64, 48);
        let mut viewer = Viewer::default();
        let result = viewer.open(&path);
        std::fs::remove_file(&path).ok();

        result.unwrap();
        let original = viewer.original().unwrap();
        assert_eq!((original.width, original.height), (350, 200));
        assert_eq!(original.channels, Channels::Rgb);
        assert!(matches!(viewer.state(), ViewerState::Loaded { .. }));
    }

    #[test]
    fn test_apply_without_image() {
        let mut viewer = Viewer::default();
        assert!(matches!(viewer.apply(), Err(ViewerError::NoImageLoaded)));
        assert_eq!(viewer.state(), &ViewerState::Empty);
        assert!(!viewer.handle(ViewerEvent::Apply));
    }

    #[test]
    fn test_apply_shows_both_panes() {
        let mut viewer = Viewer::default();
        viewer.load(Image::solid(2, 2, [128, 128, 128]));
        viewer.apply().unwrap();

        assert_eq!(viewer.original(), Some(&Image::solid(2, 2, [128, 128, 128])));
        assert_eq!(viewer.transformed(), Some(&Image::solid(2, 2, [127, 127, 127])));
        assert_eq!(viewer.applied(), Some(TransformSelector::Negative));
    }

    #[test]
    fn test_reapply_uses_original_not_previous_output() {
        let mut viewer = Viewer::default();
        viewer.load(Image::solid(1, 1, [10, 20, 30]));
        viewer.apply().unwrap();
        viewer.apply().unwrap();
        assert_eq!(viewer.transformed(), Some(&Image::solid(1, 1, [245, 235, 225])));
    }

    #[test]
    fn test_select_does_not_rerender() {
        let mut viewer = Viewer::default();
        viewer.load(Image::solid(1, 1, [0, 0, 0]));
        let generation = viewer.generation();

        assert!(!viewer.handle(ViewerEvent::Select(TransformSelector::Grayscale)));
        assert_eq!(viewer.generation(), generation);
        assert_eq!(viewer.selection(), TransformSelector::Grayscale);
        assert!(viewer.transformed().is_none());
    }

    #[test]
    fn test_new_image_clears_transform_and_keeps_selection() {
        let mut viewer = Viewer::default();
        viewer.load(Image::solid(1, 1, [1, 2, 3]));
        viewer.select(TransformSelector::GammaCorrection);
        viewer.apply().unwrap();
        assert!(viewer.transformed().is_some());

        viewer.load(Image::solid(1, 1, [4, 5, 6]));
        assert!(matches!(viewer.state(), ViewerState::Loaded { .. }));
        assert!(viewer.transformed().is_none());
        assert_eq!(viewer.selection(), TransformSelector::GammaCorrection);
    }

    #[test]
    fn test_failed_open_keeps_loaded_image() {
        let mut viewer = Viewer::default();
        viewer.load(Image::solid(1, 1, [9, 9, 9]));
        viewer.apply().unwrap();
        let before = viewer.state().clone();

        assert!(!viewer.handle(ViewerEvent::Open("/nonexistent/pixlab/other.jpg".into())));
        assert_eq!(viewer.state(), &before);
    }

    #[test]
    fn test_apply_keeps_loaded_generation() {
        let mut viewer = Viewer::default();
        viewer.load(Image::solid(1, 1, [7, 7, 7]));
        let loaded = viewer.loaded_generation();

        viewer.apply().unwrap();
        viewer.apply().unwrap();
        assert_eq!(viewer.loaded_generation(), loaded);
        assert_eq!(viewer.generation(), loaded + 2);

        viewer.load(Image::solid(1, 1, [8, 8, 8]));
        assert_eq!(viewer.loaded_generation(), loaded + 1);
    }

    #[test]
    fn test_event_sequence() {
        let mut viewer = Viewer::default();
        viewer.load(Image::solid(2, 1, [255, 0, 0]));

        assert!(!viewer.handle(ViewerEvent::Select(TransformSelector::Grayscale)));
        assert!(viewer.handle(ViewerEvent::Apply));
        assert_eq!(viewer.applied(), Some(TransformSelector::Grayscale));
        assert_eq!(viewer.transformed().unwrap().pixels, vec![76; 6]);
    }
}
