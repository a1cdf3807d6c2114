//! CLI subcommands.

pub mod batch;
pub mod cards;
pub mod config;
pub mod display;
pub mod extract;

use std::path::{Path, PathBuf};

use tracing::debug;

use cardex_core::{CardSession, CardStore, CardexConfig, PureOcrEngine};

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardex")
        .join("config.json")
}

/// Load configuration from an explicit path, the default path, or defaults.
///
/// `database` overrides the configured database file.
pub fn load_config(path: Option<&Path>, database: Option<&Path>) -> anyhow::Result<CardexConfig> {
    let mut config = match path {
        Some(path) => CardexConfig::from_file(path)?,
        None => {
            let default_path = default_config_path();
            if default_path.exists() {
                debug!("Loading config from {}", default_path.display());
                CardexConfig::from_file(&default_path)?
            } else {
                CardexConfig::default()
            }
        }
    };

    if let Some(database) = database {
        config.store.database_path = database.to_path_buf();
    }

    Ok(config)
}

/// Open the card database named in the configuration.
pub fn open_store(config: &CardexConfig) -> anyhow::Result<CardStore> {
    let store = CardStore::open(&config.store.database_path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to open card database {}: {}",
            config.store.database_path.display(),
            e
        )
    })?;
    Ok(store)
}

/// Build a session with the OCR engine and store from the configuration.
pub fn open_session(
    config: &CardexConfig,
    model_dir: Option<&Path>,
) -> anyhow::Result<CardSession<PureOcrEngine>> {
    let mut ocr_config = config.ocr.clone();
    if let Some(dir) = model_dir {
        ocr_config.model_dir = dir.to_path_buf();
    }

    if !ocr_config.models_present() {
        anyhow::bail!(
            "OCR models not found at {}.\n\n\
             Place {} and {} there, or pass --model-dir.",
            ocr_config.model_dir.display(),
            ocr_config.detection_model,
            ocr_config.recognition_model
        );
    }

    let engine = PureOcrEngine::from_config(ocr_config)
        .map_err(|e| anyhow::anyhow!("Failed to load OCR models: {}", e))?;

    Ok(CardSession::new(engine, open_store(config)?))
}
