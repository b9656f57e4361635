//! The transform engine: pure functions from an image and a selector to a new image.
//!
//! Each transform runs eagerly over the whole buffer. Intermediate math is done
//! in `f32` and every result is rounded and clamped back into `0..=255`.

mod lut;
mod selector;

pub use lut::IntensityLut;
pub use selector::{TransformSelector, GAMMA_BRIGHTEN, GAMMA_DARKEN};

use crate::luminance::calculate_luminance_u8;
use crate::{Channels, Image};

/// Apply `selector` to `image`, returning a new image of the same shape.
///
/// The input is never modified.
pub fn transform(image: &Image, selector: TransformSelector) -> Image {
    let lut = match selector {
        TransformSelector::Identity => return image.clone(),
        TransformSelector::Grayscale => return grayscale(image),
        TransformSelector::Negative => IntensityLut::negative(),
        // Max-reduction pass before the per-pixel pass.
        TransformSelector::LogTransform => IntensityLut::log(image.max_value()),
        TransformSelector::GammaCorrection => IntensityLut::gamma(GAMMA_BRIGHTEN),
        TransformSelector::GammaExpansion => IntensityLut::gamma(GAMMA_DARKEN),
    };

    let mut output = image.clone();
    lut.apply(&mut output.pixels);
    output
}

/// Desaturate, keeping three channels per pixel.
///
/// Gray images are returned unchanged.
pub fn grayscale(image: &Image) -> Image {
    match image.channels {
        Channels::Gray => image.clone(),
        Channels::Rgb => {
            let pixels = image
                .pixels
                .chunks_exact(3)
                .flat_map(|px| {
                    let lum = calculate_luminance_u8(px[0], px[1], px[2]);
                    [lum, lum, lum]
                })
                .collect();
            Image::rgb(image.width, image.height, pixels)
        }
    }
}

/// Collapse to a single luminance channel.
pub fn to_luma(image: &Image) -> Image {
    match image.channels {
        Channels::Gray => image.clone(),
        Channels::Rgb => {
            let pixels = image
                .pixels
                .chunks_exact(3)
                .map(|px| calculate_luminance_u8(px[0], px[1], px[2]))
                .collect();
            Image::gray(image.width, image.height, pixels)
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
