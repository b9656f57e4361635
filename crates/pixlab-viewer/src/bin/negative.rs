use std::path::Path;

use pixlab_core::{transform, TransformSelector};

fn main() -> anyhow::Result<()> {
    pixlab_viewer::init_logger();
    pixlab_viewer::preview::run("negative", Path::new("zoo.jpg"), |img| {
        transform(img, TransformSelector::Negative)
    })
}
