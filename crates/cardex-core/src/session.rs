//! Application state wiring the OCR engine, extractor and store together.
//!
//! Each handler runs one user action to completion: upload, save, list,
//! show, update or delete.

use tracing::{info, warn};

use crate::card::{CardExtractor, RuleCardParser};
use crate::error::Result;
use crate::models::card::{CardRecord, CardUpdate, ExtractionResult};
use crate::ocr::{normalize_to_png, OcrEngine};
use crate::store::CardStore;

/// An uploaded card after normalization, recognition and extraction.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Extracted contact fields.
    pub result: ExtractionResult,
    /// Canonical PNG bytes of the upload, stored alongside the record.
    pub png: Vec<u8>,
}

/// Session state for one card database and OCR engine.
pub struct CardSession<E: OcrEngine> {
    engine: E,
    parser: RuleCardParser,
    store: CardStore,
}

impl<E: OcrEngine> CardSession<E> {
    /// Create a session from its collaborators.
    pub fn new(engine: E, store: CardStore) -> Self {
        Self {
            engine,
            parser: RuleCardParser::new(),
            store,
        }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Normalize an uploaded image, recognize it and extract its fields.
    pub fn upload(&self, image_bytes: &[u8]) -> Result<Upload> {
        let normalized = normalize_to_png(image_bytes)?;
        let fragments = self.engine.recognize_normalized(&normalized)?;

        if fragments.is_empty() {
            warn!("No text recognized in uploaded image");
        }

        let result = self.parser.extract(&fragments);
        Ok(Upload {
            result,
            png: normalized.png,
        })
    }

    /// Persist an upload. Returns the assigned card id.
    pub fn save(&self, upload: &Upload) -> Result<i64> {
        let id = self.store.insert(&upload.result, &upload.png)?;
        info!("Saved card {}", id);
        Ok(id)
    }

    /// All stored cards.
    pub fn list(&self) -> Result<Vec<CardRecord>> {
        Ok(self.store.fetch_all()?)
    }

    /// A single stored card.
    pub fn show(&self, id: i64) -> Result<Option<CardRecord>> {
        Ok(self.store.get(id)?)
    }

    /// Overwrite the editable columns of a card.
    pub fn update(&self, id: i64, fields: &CardUpdate) -> Result<()> {
        Ok(self.store.update(id, fields)?)
    }

    /// Delete a card.
    pub fn delete(&self, id: i64) -> Result<()> {
        Ok(self.store.delete(id)?)
    }
}
