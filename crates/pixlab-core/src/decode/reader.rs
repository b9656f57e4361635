//! Image loading with EXIF orientation handling.

use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageError, ImageReader};

use super::{DecodeError, Image, Orientation};

/// Read and decode the image file at `path`.
///
/// The file is decoded according to its content (JPEG or PNG), EXIF
/// orientation is applied and the result is converted to RGB.
///
/// # Errors
///
/// Returns `DecodeError::Io` if the file cannot be read, and the errors of
/// [`decode_image`] otherwise.
pub fn load_image(path: impl AsRef<Path>) -> Result<Image, DecodeError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let image = decode_image(&bytes)?;
    log::debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width,
        image.height
    );
    Ok(image)
}

/// Decode an in-memory image file, applying EXIF orientation correction.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are not a recognized image.
/// Returns `DecodeError::CorruptedFile` if decoding fails part way.
pub fn decode_image(bytes: &[u8]) -> Result<Image, DecodeError> {
    let orientation = extract_orientation(bytes);

    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()
        .map_err(|e| match e {
            ImageError::Unsupported(_) => DecodeError::InvalidFormat,
            other => DecodeError::CorruptedFile(other.to_string()),
        })?;

    Ok(Image::from_rgb_image(
        apply_orientation(img, orientation).into_rgb8(),
    ))
}

/// Extract EXIF orientation, falling back to `Orientation::Normal`.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    Reader::new()
        .read_from_container(&mut cursor)
        .ok()
        .and_then(|exif| {
            exif.get_field(Tag::Orientation, In::PRIMARY)
                .and_then(|field| field.value.get_uint(0))
        })
        .map(Orientation::from)
        .unwrap_or_default()
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
