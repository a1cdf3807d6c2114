//! Upload normalization: any supported raster format in, PNG out.

use std::io::Cursor;

use image::{DynamicImage, GenericImageView, ImageFormat};
use tracing::debug;

use crate::error::RecognitionError;

/// A decoded upload together with its canonical PNG encoding.
#[derive(Debug, Clone)]
pub struct NormalizedImage {
    /// Decoded pixel buffer.
    pub image: DynamicImage,
    /// PNG bytes handed to OCR and to storage.
    pub png: Vec<u8>,
}

impl NormalizedImage {
    /// Image dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Decode an uploaded image and re-encode it as PNG.
///
/// The format is sniffed from the bytes, so JPEG and PNG uploads are both
/// accepted regardless of file name.
pub fn normalize_to_png(bytes: &[u8]) -> Result<NormalizedImage, RecognitionError> {
    let format = image::guess_format(bytes)
        .map_err(|e| RecognitionError::InvalidImage(format!("unknown image format: {}", e)))?;

    let image = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| RecognitionError::InvalidImage(format!("failed to decode {:?}: {}", format, e)))?;

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| RecognitionError::InvalidImage(format!("failed to encode PNG: {}", e)))?;

    let (width, height) = image.dimensions();
    debug!(
        "Normalized {:?} upload ({} bytes) to {}x{} PNG ({} bytes)",
        format,
        bytes.len(),
        width,
        height,
        png.len()
    );

    Ok(NormalizedImage { image, png })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn encode(format: ImageFormat) -> Vec<u8> {
        let img = RgbImage::from_pixel(8, 4, Rgb([200, 30, 30]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut bytes), format)
            .unwrap();
        bytes
    }

    #[test]
    fn test_normalize_jpeg_to_png() {
        let normalized = normalize_to_png(&encode(ImageFormat::Jpeg)).unwrap();

        assert_eq!(normalized.dimensions(), (8, 4));
        assert_eq!(image::guess_format(&normalized.png).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_normalize_png_roundtrip_dimensions() {
        let normalized = normalize_to_png(&encode(ImageFormat::Png)).unwrap();
        let reloaded = image::load_from_memory(&normalized.png).unwrap();

        assert_eq!(reloaded.dimensions(), (8, 4));
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        let err = normalize_to_png(b"definitely not an image").unwrap_err();
        assert!(matches!(err, RecognitionError::InvalidImage(_)));
    }

    #[test]
    fn test_normalize_rejects_truncated_png() {
        let mut bytes = encode(ImageFormat::Png);
        bytes.truncate(24);
        assert!(normalize_to_png(&bytes).is_err());
    }
}
