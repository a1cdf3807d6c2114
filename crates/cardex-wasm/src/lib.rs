//! WASM bindings for business card field extraction.
//!
//! OCR runs on the JavaScript side; recognized text is handed back here and
//! turned into contact fields with the same rules as the native CLI.

use wasm_bindgen::prelude::*;

use cardex_core::card::{CardExtractor, RuleCardParser};
use cardex_core::models::card::{join_list, split_list, ExtractionResult, Fragment};
use cardex_core::ocr::{normalize_to_png, sort_by_reading_order};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js(result: &ExtractionResult) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract contact fields from text lines in detection order.
#[wasm_bindgen]
pub fn extract_card_from_lines(lines: Vec<String>) -> Result<JsValue, JsValue> {
    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    to_js(&RuleCardParser::new().extract_from_lines(&lines))
}

/// Decode a PNG or JPEG upload and return it re-encoded as PNG.
#[wasm_bindgen]
pub fn normalize_image(bytes: &[u8]) -> Result<Vec<u8>, JsValue> {
    normalize_to_png(bytes)
        .map(|normalized| normalized.png)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Join list items into the stored column form ("a, b").
#[wasm_bindgen]
pub fn join_column(items: Vec<String>) -> Option<String> {
    join_list(&items)
}

/// Split a stored list column back into its items.
#[wasm_bindgen]
pub fn split_column(column: Option<String>) -> Vec<String> {
    split_list(column.as_deref())
}

/// Recognized text regions collected from browser-side OCR.
#[wasm_bindgen]
pub struct CardFragments {
    fragments: Vec<Fragment>,
}

#[wasm_bindgen]
impl CardFragments {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            fragments: Vec::new(),
        }
    }

    /// Add a recognized region with its quadrilateral and confidence.
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn add_fragment(
        &mut self,
        text: &str,
        x1: f32, y1: f32,
        x2: f32, y2: f32,
        x3: f32, y3: f32,
        x4: f32, y4: f32,
        confidence: f32,
    ) {
        self.fragments.push(
            Fragment::new(text)
                .with_bbox([x1, y1, x2, y2, x3, y3, x4, y4])
                .with_confidence(confidence),
        );
    }

    /// Add a region with text only.
    #[wasm_bindgen]
    pub fn add_text(&mut self, text: &str) {
        self.fragments.push(Fragment::new(text));
    }

    /// Reorder regions top-to-bottom, left-to-right.
    #[wasm_bindgen]
    pub fn sort_by_reading_order(&mut self) {
        sort_by_reading_order(&mut self.fragments);
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.fragments.len()
    }

    /// Region texts joined by newlines.
    #[wasm_bindgen]
    pub fn text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Extract contact fields from the collected regions.
    #[wasm_bindgen]
    pub fn extract(&self) -> Result<JsValue, JsValue> {
        to_js(&self.extract_result())
    }
}

impl CardFragments {
    fn extract_result(&self) -> ExtractionResult {
        RuleCardParser::new().extract(&self.fragments)
    }
}

impl Default for CardFragments {
    fn default() -> Self {
        Self::new()
    }
}
