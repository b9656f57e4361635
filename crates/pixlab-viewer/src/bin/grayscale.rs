use std::path::Path;

fn main() -> anyhow::Result<()> {
    pixlab_viewer::init_logger();
    pixlab_viewer::preview::run("GrayScale", Path::new("zoo.jpg"), pixlab_core::to_luma)
}
