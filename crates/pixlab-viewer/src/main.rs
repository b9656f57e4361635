use pixlab_core::ViewerConfig;

fn main() -> anyhow::Result<()> {
    pixlab_viewer::init_logger();
    pixlab_viewer::run(ViewerConfig::default())
}
