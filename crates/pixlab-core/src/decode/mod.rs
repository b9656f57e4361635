//! Image loading for pixlab.
//!
//! This module provides functionality for:
//! - Reading and decoding JPEG (and PNG) files
//! - Applying EXIF orientation so the image appears upright
//! - Resampling to the fixed display size used by the viewer panes
//!
//! All operations are synchronous and run on the caller's thread.

mod reader;
mod resize;
mod types;

pub use reader::{decode_image, load_image};
pub use resize::resize;
pub use types::{Channels, DecodeError, FilterType, Image, Orientation};
