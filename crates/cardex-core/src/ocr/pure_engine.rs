//! Pure Rust OCR engine wrapper using `pure-onnx-ocr`.

use std::path::Path;
use std::time::Instant;

use image::{DynamicImage, GenericImageView};
use tracing::{debug, info};

use crate::error::RecognitionError;
use crate::models::card::Fragment;
use crate::models::config::OcrConfig;

use super::{sort_by_reading_order, NormalizedImage, OcrEngine};

/// OCR engine backed by `pure-onnx-ocr` (pure Rust, no external ONNX Runtime).
pub struct PureOcrEngine {
    engine: pure_onnx_ocr::engine::OcrEngine,
    config: OcrConfig,
}

impl PureOcrEngine {
    /// Create an engine from the model files named in the configuration.
    pub fn from_config(config: OcrConfig) -> Result<Self, RecognitionError> {
        let det_path = config.model_path(&config.detection_model);
        let rec_path = config.model_path(&config.recognition_model);
        let dict_path = config.model_path(&config.dictionary);

        for path in [&det_path, &rec_path, &dict_path] {
            if !path.exists() {
                return Err(RecognitionError::ModelLoad(format!(
                    "model file not found: {}",
                    path.display()
                )));
            }
        }

        let engine = pure_onnx_ocr::engine::OcrEngineBuilder::new()
            .det_model_path(&det_path)
            .rec_model_path(&rec_path)
            .dictionary_path(&dict_path)
            .build()
            .map_err(|e| RecognitionError::ModelLoad(format!("pure-onnx-ocr: {}", e)))?;

        info!("Loaded pure-onnx-ocr engine from {}", config.model_dir.display());

        Ok(Self { engine, config })
    }

    /// Create an engine from model files in a directory, using default file names.
    pub fn from_dir(model_dir: &Path) -> Result<Self, RecognitionError> {
        Self::from_config(OcrConfig {
            model_dir: model_dir.to_path_buf(),
            ..OcrConfig::default()
        })
    }

    /// Recognize fragments in an already decoded image.
    pub fn recognize_image(&self, image: &DynamicImage) -> Result<Vec<Fragment>, RecognitionError> {
        let start = Instant::now();
        let (width, height) = image.dimensions();

        info!("Processing image: {}x{}", width, height);

        let results = self
            .engine
            .run_from_image(image)
            .map_err(|e| RecognitionError::Engine(format!("pure-onnx-ocr: {}", e)))?;

        debug!("pure-onnx-ocr returned {} text regions", results.len());

        let mut fragments: Vec<Fragment> = results
            .iter()
            .map(|r| {
                let text = if self.config.keep_unk {
                    r.text.clone()
                } else {
                    r.text.replace("[UNK]", " ")
                };
                Fragment::new(text)
                    .with_bbox(polygon_to_bbox(&r.bounding_box))
                    .with_confidence(r.confidence)
            })
            .collect();

        sort_by_reading_order(&mut fragments);

        info!(
            "OCR complete: {} fragments in {}ms",
            fragments.len(),
            start.elapsed().as_millis()
        );

        Ok(fragments)
    }
}

impl OcrEngine for PureOcrEngine {
    fn recognize(&self, image_bytes: &[u8]) -> Result<Vec<Fragment>, RecognitionError> {
        let image = image::load_from_memory(image_bytes)
            .map_err(|e| RecognitionError::InvalidImage(e.to_string()))?;
        self.recognize_image(&image)
    }

    fn recognize_normalized(
        &self,
        image: &NormalizedImage,
    ) -> Result<Vec<Fragment>, RecognitionError> {
        self.recognize_image(&image.image)
    }
}

/// Convert a `Polygon<f64>` to our `[f32; 8]` bbox format.
///
/// Extracts the first 4 exterior points (quadrilateral) as
/// `[x1, y1, x2, y2, x3, y3, x4, y4]`.
fn polygon_to_bbox(polygon: &pure_onnx_ocr::Polygon<f64>) -> [f32; 8] {
    let mut bbox = [0.0f32; 8];
    for (i, coord) in polygon.exterior().coords().take(4).enumerate() {
        bbox[i * 2] = coord.x as f32;
        bbox[i * 2 + 1] = coord.y as f32;
    }
    bbox
}
