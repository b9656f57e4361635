//! Image to texture conversion.
//!
//! A pane's texture is freed by egui when its `TextureHandle` is dropped, so
//! each handle lives exactly as long as its image is on screen.

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use pixlab_core::{Channels, Image, Viewer};

/// Convert an image into egui's CPU-side color image.
pub fn to_color_image(image: &Image) -> ColorImage {
    let size = [image.width as usize, image.height as usize];
    match image.channels {
        Channels::Rgb => ColorImage::from_rgb(size, &image.pixels),
        Channels::Gray => ColorImage::from_gray(size, &image.pixels),
    }
}

/// GPU textures for the two viewer panes.
#[derive(Default)]
pub struct PaneTextures {
    /// Viewer generation the right pane was built from.
    generation: Option<u64>,
    /// Viewer load generation the left pane was built from.
    loaded_generation: Option<u64>,
    original: Option<TextureHandle>,
    transformed: Option<TextureHandle>,
}

impl PaneTextures {
    /// Rebuild the textures whose pane content changed since the last call.
    ///
    /// The left texture is only replaced when a new image is loaded. Handles for
    /// panes that are no longer shown are dropped.
    pub fn sync(&mut self, ctx: &egui::Context, viewer: &Viewer) {
        if self.loaded_generation != Some(viewer.loaded_generation()) {
            self.original = viewer.original().map(|img| {
                ctx.load_texture("original", to_color_image(img), TextureOptions::LINEAR)
            });
            self.loaded_generation = Some(viewer.loaded_generation());
        }

        if self.generation != Some(viewer.generation()) {
            self.transformed = viewer.transformed().map(|img| {
                ctx.load_texture("transformed", to_color_image(img), TextureOptions::LINEAR)
            });
            self.generation = Some(viewer.generation());
        }
    }

    pub fn original(&self) -> Option<&TextureHandle> {
        self.original.as_ref()
    }

    pub fn transformed(&self) -> Option<&TextureHandle> {
        self.transformed.as_ref()
    }
}
