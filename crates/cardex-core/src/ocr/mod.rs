//! OCR collaborator: turns card images into ordered text fragments.

mod preprocessing;
#[cfg(feature = "native")]
mod pure_engine;

pub use preprocessing::{normalize_to_png, NormalizedImage};
#[cfg(feature = "native")]
pub use pure_engine::PureOcrEngine;

use crate::error::RecognitionError;
use crate::models::card::Fragment;

/// Height in pixels of a reading-order row.
const ROW_HEIGHT: f32 = 20.0;

/// Trait for OCR engines.
///
/// Implementations return fragments in detection order, which the field
/// extractor treats as significant. Failures are reported once; callers
/// decide whether to retry.
pub trait OcrEngine {
    /// Recognize text fragments in an encoded image.
    fn recognize(&self, image_bytes: &[u8]) -> Result<Vec<Fragment>, RecognitionError>;

    /// Recognize text fragments in an upload that is already decoded.
    ///
    /// Defaults to recognizing the PNG bytes. Engines working on pixels
    /// override this to use the decoded image directly.
    fn recognize_normalized(
        &self,
        image: &NormalizedImage,
    ) -> Result<Vec<Fragment>, RecognitionError> {
        self.recognize(&image.png)
    }
}

impl<E: OcrEngine + ?Sized> OcrEngine for &E {
    fn recognize(&self, image_bytes: &[u8]) -> Result<Vec<Fragment>, RecognitionError> {
        (**self).recognize(image_bytes)
    }

    fn recognize_normalized(
        &self,
        image: &NormalizedImage,
    ) -> Result<Vec<Fragment>, RecognitionError> {
        (**self).recognize_normalized(image)
    }
}

impl<E: OcrEngine + ?Sized> OcrEngine for Box<E> {
    fn recognize(&self, image_bytes: &[u8]) -> Result<Vec<Fragment>, RecognitionError> {
        (**self).recognize(image_bytes)
    }

    fn recognize_normalized(
        &self,
        image: &NormalizedImage,
    ) -> Result<Vec<Fragment>, RecognitionError> {
        (**self).recognize_normalized(image)
    }
}

/// Sort fragments by reading order (top-to-bottom, left-to-right).
///
/// Fragments whose top edges fall in the same 20px band count as one row.
/// Within a row, a box without a usable x position sorts last.
pub fn sort_by_reading_order(fragments: &mut [Fragment]) {
    fragments.sort_by(|a, b| {
        let (ax, ay, _, _) = a.rect();
        let (bx, by, _, _) = b.rect();

        let row_a = (ay / ROW_HEIGHT) as i32;
        let row_b = (by / ROW_HEIGHT) as i32;

        if row_a != row_b {
            row_a.cmp(&row_b)
        } else {
            ax.total_cmp(&bx)
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(text: &str, x: f32, y: f32) -> Fragment {
        Fragment::new(text).with_bbox([x, y, x + 50.0, y, x + 50.0, y + 12.0, x, y + 12.0])
    }

    #[test]
    fn test_sort_by_reading_order() {
        let mut fragments = vec![
            boxed("john@acme.com", 10.0, 90.0),
            boxed("Engineer", 120.0, 42.0),
            boxed("John Doe", 10.0, 5.0),
            boxed("Senior", 10.0, 45.0),
        ];

        sort_by_reading_order(&mut fragments);

        let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["John Doe", "Senior", "Engineer", "john@acme.com"]);
    }

    #[test]
    fn test_sort_with_nan_positions() {
        let mut fragments = vec![
            Fragment::new("lost").with_bbox([f32::NAN, 5.0, f32::NAN, 5.0, f32::NAN, 17.0, f32::NAN, 17.0]),
            boxed("Acme", 200.0, 4.0),
            Fragment::new("also lost").with_bbox([f32::NAN, 6.0, f32::NAN, 6.0, f32::NAN, 18.0, f32::NAN, 18.0]),
            boxed("Jane", 10.0, 3.0),
        ];

        sort_by_reading_order(&mut fragments);

        let texts: Vec<&str> = fragments.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["Jane", "Acme", "lost", "also lost"]);
    }
}
