//! Luminance calculation using ITU-R BT.601 coefficients.
//!
//! These are the weights of the classic RGB to gray conversion, so a
//! desaturated image matches what common vision libraries produce.

/// ITU-R BT.601 coefficient for red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 coefficient for green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 coefficient for blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Calculate luminance from u8 RGB values, rounded to the nearest level.
#[inline]
pub fn calculate_luminance_u8(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINANCE_R * r as f32 + LUMINANCE_G * g as f32 + LUMINANCE_B * b as f32;
    lum.clamp(0.0, 255.0).round() as u8
}
