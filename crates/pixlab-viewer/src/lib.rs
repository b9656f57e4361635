//! pixlab viewer - desktop front end for the pixlab transforms
//!
//! # Module Structure
//!
//! - `app` - The interactive two-pane viewer
//! - `preview` - Single-window, single-transform demos
//! - `texture` - Conversion of images into GPU textures for the panes
//! - `logger` - Log formatting for the binaries

mod app;
mod logger;
pub mod preview;
mod texture;

pub use app::{run, ViewerApp};
pub use logger::init_logger;
pub use texture::{to_color_image, PaneTextures};
