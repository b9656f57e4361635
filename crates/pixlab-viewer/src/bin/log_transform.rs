use std::path::Path;

use pixlab_core::{transform, TransformSelector};

fn main() -> anyhow::Result<()> {
    pixlab_viewer::init_logger();
    pixlab_viewer::preview::run("log_image", Path::new("logtest.jpg"), |img| {
        transform(img, TransformSelector::LogTransform)
    })
}
