//! Configuration structures for the card pipeline.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CardexError, Result};

/// Main configuration for the cardex pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardexConfig {
    /// OCR configuration.
    pub ocr: OcrConfig,

    /// Record store configuration.
    pub store: StoreConfig,
}

/// OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Directory containing model files.
    pub model_dir: PathBuf,

    /// Text detection model file name.
    pub detection_model: String,

    /// Text recognition model file name.
    pub recognition_model: String,

    /// Character dictionary file name.
    pub dictionary: String,

    /// Keep `[UNK]` tokens in recognized text instead of replacing them with a space.
    pub keep_unk: bool,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from("models"),
            detection_model: "det.onnx".to_string(),
            recognition_model: "latin_rec.onnx".to_string(),
            dictionary: "latin_dict.txt".to_string(),
            keep_unk: false,
        }
    }
}

impl OcrConfig {
    /// Get full path to a model file.
    pub fn model_path(&self, model_name: &str) -> PathBuf {
        self.model_dir.join(model_name)
    }

    /// Check that detection and recognition models are present.
    pub fn models_present(&self) -> bool {
        self.model_path(&self.detection_model).exists()
            && self.model_path(&self.recognition_model).exists()
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// SQLite database file.
    pub database_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("business_cards.db"),
        }
    }
}

impl CardexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| CardexError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| CardexError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get full path to a model file.
    pub fn model_path(&self, model_name: &str) -> PathBuf {
        self.ocr.model_path(model_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: CardexConfig =
            serde_json::from_str(r#"{"store": {"database_path": "cards.db"}}"#).unwrap();

        assert_eq!(config.store.database_path, PathBuf::from("cards.db"));
        assert_eq!(config.ocr.detection_model, "det.onnx");
        assert!(!config.ocr.keep_unk);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = CardexConfig::default();
        config.ocr.model_dir = PathBuf::from("/opt/models");
        config.save(&path).unwrap();

        let loaded = CardexConfig::from_file(&path).unwrap();
        assert_eq!(loaded.model_path("det.onnx"), PathBuf::from("/opt/models/det.onnx"));
    }

    #[test]
    fn test_malformed_config_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"store": {"database_path": 42}}"#).unwrap();

        let err = CardexConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CardexError::Config(_)));
        assert!(err.to_string().contains("config.json"));
    }

    #[test]
    fn test_missing_config_is_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = CardexConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CardexError::Io(_)));
    }
}
