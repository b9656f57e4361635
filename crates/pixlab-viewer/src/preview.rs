//! Single-window demos: load one file, apply one transform, show the result.

use std::path::Path;

use eframe::egui::{self, TextureHandle, TextureOptions};
use pixlab_core::{load_image, Image};

use crate::texture::to_color_image;

struct PreviewApp {
    image: Image,
    texture: Option<TextureHandle>,
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let texture = self.texture.get_or_insert_with(|| {
            ctx.load_texture("preview", to_color_image(&self.image), TextureOptions::LINEAR)
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                ui.image((texture.id(), texture.size_vec2()));
            });
    }
}

/// Load `path`, run `op` on it and show the output in a window titled `title`.
///
/// A load failure is logged and returned without opening a window.
pub fn run(title: &str, path: &Path, op: impl FnOnce(&Image) -> Image) -> anyhow::Result<()> {
    let source = load_image(path).map_err(|e| {
        log::error!("Error loading image {}: {}", path.display(), e);
        e
    })?;
    let image = op(&source);
    log::info!("{}: {}x{}", title, image.width, image.height);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([image.width as f32, image.height as f32])
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PreviewApp {
                image,
                texture: None,
            }))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{title} window failed: {e}"))
}
