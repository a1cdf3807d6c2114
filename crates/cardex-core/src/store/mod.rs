//! SQLite-backed record store for business cards.
//!
//! Every operation opens its own connection, runs one statement and drops
//! the connection. There is no pooling and no transaction spanning calls.
//!
//! - `schema`: table creation
//! - `crud`: insert, fetch, update and delete

mod crud;
mod schema;

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::debug;

use crate::error::StoreError;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// SQLite-backed card repository.
#[derive(Debug, Clone)]
pub struct CardStore {
    db_path: PathBuf,
}

impl CardStore {
    /// Open the store at `db_path`, creating the database file and table if needed.
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let store = Self {
            db_path: db_path.to_path_buf(),
        };
        store.initialize()?;
        Ok(store)
    }

    /// Get the database path.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    fn connect(&self) -> Result<Connection> {
        debug!("Opening card database {}", self.db_path.display());
        Ok(Connection::open(&self.db_path)?)
    }
}
