//! Session Storage - Persistence layer for the session record
//!
//! Handles saving and loading the single session record backing this browsing
//! context.

use super::types::{SessionRecord, AUTH_SESSION_KEY};
use portico_core::{PorticoError, PorticoResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File-backed storage for the session record
pub struct SessionFile {
    /// Base directory for session storage
    storage_dir: PathBuf,
}

impl SessionFile {
    /// Create a new session file store
    pub fn new<P: AsRef<Path>>(storage_dir: P) -> PorticoResult<Self> {
        let storage_dir = storage_dir.as_ref().to_path_buf();

        // Create storage directory if it doesn't exist
        std::fs::create_dir_all(&storage_dir).map_err(PorticoError::Io)?;

        info!("Session storage initialized at: {}", storage_dir.display());

        Ok(Self { storage_dir })
    }

    fn record_file(&self) -> PathBuf {
        self.storage_dir.join(format!("{}.json", AUTH_SESSION_KEY))
    }

    /// Save the session record to disk
    pub fn save(&self, record: &SessionRecord) -> PorticoResult<()> {
        let record_file = self.record_file();

        let json_data =
            serde_json::to_string_pretty(record).map_err(PorticoError::Serialization)?;

        std::fs::write(&record_file, json_data).map_err(PorticoError::Io)?;

        debug!("Saved session record to {}", record_file.display());
        Ok(())
    }

    /// Load the persisted session record
    ///
    /// Returns `Ok(None)` when nothing has been persisted. Unreadable or
    /// unparseable data is an error; the caller decides what to do with it.
    pub fn load(&self) -> PorticoResult<Option<SessionRecord>> {
        let record_file = self.record_file();

        if !record_file.exists() {
            return Ok(None);
        }

        let json_data = std::fs::read_to_string(&record_file).map_err(PorticoError::Io)?;

        let record: SessionRecord =
            serde_json::from_str(&json_data).map_err(PorticoError::Serialization)?;

        debug!("Loaded session record from {}", record_file.display());
        Ok(Some(record))
    }

    /// Delete the persisted session record
    pub fn delete(&self) -> PorticoResult<()> {
        let record_file = self.record_file();

        if record_file.exists() {
            std::fs::remove_file(&record_file).map_err(PorticoError::Io)?;
            debug!("Deleted session record: {}", record_file.display());
        }

        Ok(())
    }
}
