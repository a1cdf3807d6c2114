//! Core library for business card OCR processing.
//!
//! This crate provides:
//! - Contact field extraction from recognized text fragments
//!   (name, designation, company, address, emails, phones, websites)
//! - OCR collaborator interface with a pure Rust ONNX engine
//! - SQLite-backed card record store
//! - A session type wiring the OCR engine, extractor and store together

pub mod error;
pub mod models;
pub mod ocr;
pub mod card;
#[cfg(feature = "native")]
pub mod store;
#[cfg(feature = "native")]
pub mod session;

pub use error::{CardexError, RecognitionError, Result, StoreError};
pub use models::card::{CardRecord, CardUpdate, ExtractionResult, Fragment, NewCard};
pub use models::config::CardexConfig;
pub use ocr::{normalize_to_png, NormalizedImage, OcrEngine};
#[cfg(feature = "native")]
pub use ocr::PureOcrEngine;
pub use card::{CardExtractor, RuleCardParser};
#[cfg(feature = "native")]
pub use store::CardStore;
#[cfg(feature = "native")]
pub use session::{CardSession, Upload};
