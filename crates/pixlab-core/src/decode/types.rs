//! Core types for image loading.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image loading operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be opened or read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The bytes are not in a recognized image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// A requested output size has a zero edge.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Filter type for image resizing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal + rotate 270 CW.
    Transpose = 5,
    Rotate90CW = 6,
    /// Flip horizontal + rotate 90 CW.
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Channel layout of an [`Image`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Channels {
    /// Single luminance channel.
    Gray,
    /// Red, green, blue in that order.
    #[default]
    Rgb,
}

impl Channels {
    /// Bytes per pixel.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Gray => 1,
            Channels::Rgb => 3,
        }
    }
}

/// A rectangular 8-bit image.
///
/// Pixels are stored row-major and tightly packed, so
/// `pixels.len() == width * height * channels.count()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Channel layout of `pixels`.
    pub channels: Channels,
    /// Interleaved channel data.
    pub pixels: Vec<u8>,
}

impl Image {
    /// Create an RGB image from interleaved pixel data.
    pub fn rgb(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::with_channels(width, height, Channels::Rgb, pixels)
    }

    /// Create a single-channel image.
    pub fn gray(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self::with_channels(width, height, Channels::Gray, pixels)
    }

    pub fn with_channels(width: u32, height: u32, channels: Channels, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * channels.count(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            channels,
            pixels,
        }
    }

    /// An RGB image where every pixel has the same color.
    pub fn solid(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let count = width as usize * height as usize;
        let pixels = rgb.iter().copied().cycle().take(count * 3).collect();
        Self::rgb(width, height, pixels)
    }

    /// Create an Image from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self::rgb(width, height, img.into_raw())
    }

    /// Convert to an image::RgbImage for resampling.
    ///
    /// Returns `None` for gray images or a mismatched buffer.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        match self.channels {
            Channels::Rgb => image::RgbImage::from_raw(self.width, self.height, self.pixels.clone()),
            Channels::Gray => None,
        }
    }

    /// Convert to an image::GrayImage for resampling.
    ///
    /// Returns `None` for RGB images or a mismatched buffer.
    pub fn to_gray_image(&self) -> Option<image::GrayImage> {
        match self.channels {
            Channels::Gray => {
                image::GrayImage::from_raw(self.width, self.height, self.pixels.clone())
            }
            Channels::Rgb => None,
        }
    }

    /// Largest channel value anywhere in the image, or 0 when empty.
    pub fn max_value(&self) -> u8 {
        self.pixels.iter().copied().max().unwrap_or(0)
    }
}
