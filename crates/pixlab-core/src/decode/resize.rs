//! Resampling to a fixed display size.
//!
//! All functions return a new `Image` without modifying the input.

use super::{Channels, DecodeError, FilterType, Image};

/// Resize an image to exact dimensions, ignoring aspect ratio.
///
/// Gray images stay gray.
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if either target edge is zero.
pub fn resize(
    image: &Image,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<Image, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let resized = match image.channels {
        Channels::Rgb => {
            let rgb = image
                .to_rgb_image()
                .ok_or_else(|| DecodeError::CorruptedFile("Pixel buffer size mismatch".into()))?;
            let out = image::imageops::resize(&rgb, width, height, filter.to_image_filter());
            Image::from_rgb_image(out)
        }
        Channels::Gray => {
            let gray = image
                .to_gray_image()
                .ok_or_else(|| DecodeError::CorruptedFile("Pixel buffer size mismatch".into()))?;
            let out = image::imageops::resize(&gray, width, height, filter.to_image_filter());
            Image::gray(width, height, out.into_raw())
        }
    };

    Ok(resized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32) -> Image {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
            }
        }
        Image::rgb(width, height, pixels)
    }

    #[test]
    fn test_resize_to_pane() {
        let img = create_test_image(640, 480);
        let resized = resize(&img, 350, 200, FilterType::Bilinear).unwrap();

        assert_eq!((resized.width, resized.height), (350, 200));
        assert_eq!(resized.pixels.len(), 350 * 200 * 3);
        assert_eq!(resized.channels, Channels::Rgb);
    }

    #[test]
    fn test_resize_same_dimensions_is_copy() {
        let img = create_test_image(35, 20);
        let resized = resize(&img, 35, 20, FilterType::Bilinear).unwrap();
        assert_eq!(resized, img);
    }

    #[test]
    fn test_resize_upscale() {
        let img = create_test_image(50, 25);
        let resized = resize(&img, 100, 50, FilterType::Lanczos3).unwrap();
        assert_eq!((resized.width, resized.height), (100, 50));
    }

    #[test]
    fn test_resize_gray_stays_gray() {
        let img = Image::gray(4, 4, vec![77; 16]);
        let resized = resize(&img, 2, 8, FilterType::Nearest).unwrap();
        assert_eq!(resized.channels, Channels::Gray);
        assert_eq!(resized.pixels, vec![77; 16]);
    }

    #[test]
    fn test_resize_zero_dimensions_error() {
        let img = create_test_image(100, 50);

        assert!(matches!(
            resize(&img, 0, 50, FilterType::Bilinear),
            Err(DecodeError::InvalidDimensions { width: 0, height: 50 })
        ));
        assert!(resize(&img, 50, 0, FilterType::Bilinear).is_err());
    }

    #[test]
    fn test_all_filter_types() {
        let img = create_test_image(100, 50);

        for filter in [
            FilterType::Nearest,
            FilterType::Bilinear,
            FilterType::Lanczos3,
        ] {
            let resized = resize(&img, 50, 25, filter).unwrap();
            assert_eq!(resized.width, 50);
            assert_eq!(resized.height, 25);
        }
    }
}
