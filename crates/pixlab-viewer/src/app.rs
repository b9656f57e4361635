//! The interactive two-pane viewer.

use eframe::egui;
use pixlab_core::{TransformSelector, Viewer, ViewerConfig, ViewerEvent};

use crate::texture::PaneTextures;

pub struct ViewerApp {
    viewer: Viewer,
    textures: PaneTextures,
}

impl ViewerApp {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            viewer: Viewer::new(config),
            textures: PaneTextures::default(),
        }
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Ask the user for an image file.
    fn pick_file(&self) -> Option<std::path::PathBuf> {
        let config = self.viewer.config();
        rfd::FileDialog::new()
            .add_filter(&config.file_filter_name, config.file_extensions.as_slice())
            .pick_file()
    }

    fn controls(&self, ui: &mut egui::Ui, events: &mut Vec<ViewerEvent>) {
        let mut selection = self.viewer.selection();

        ui.horizontal(|ui| {
            egui::ComboBox::from_label("Transform")
                .selected_text(selection.label())
                .show_ui(ui, |ui| {
                    for option in TransformSelector::ALL {
                        ui.selectable_value(&mut selection, option, option.label());
                    }
                });

            if selection != self.viewer.selection() {
                events.push(ViewerEvent::Select(selection));
            }

            if ui.button("Apply").clicked() {
                events.push(ViewerEvent::Apply);
            }

            if ui.button("Open Image").clicked() {
                if let Some(path) = self.pick_file() {
                    events.push(ViewerEvent::Open(path));
                }
            }
        });

        let applied = self.viewer.applied().map(TransformSelector::label);
        ui.label(applied.unwrap_or(" "));
    }

    fn panes(&self, ui: &mut egui::Ui) {
        let [width, height] = self.viewer.config().pane_size;
        let size = egui::vec2(width as f32, height as f32);

        ui.horizontal(|ui| {
            for texture in [self.textures.original(), self.textures.transformed()] {
                match texture {
                    Some(texture) => {
                        ui.image((texture.id(), size));
                    }
                    None => {
                        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                        ui.painter().rect_filled(rect, 0.0, egui::Color32::WHITE);
                    }
                }
                ui.add_space(16.0);
            }
        });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.controls(ui, &mut events);
            ui.separator();
            self.panes(ui);
        });

        let mut changed = false;
        for event in events {
            changed |= self.viewer.handle(event);
        }

        self.textures.sync(ctx, &self.viewer);
        if changed {
            ctx.request_repaint();
        }
    }
}

/// Open the viewer window and block until it is closed.
pub fn run(config: ViewerConfig) -> anyhow::Result<()> {
    let title = format!("pixlab {}", pixlab_core::version());
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(&title),
        ..Default::default()
    };

    log::debug!("starting viewer with {:?}", config);
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer window failed: {e}"))
}
