//! Durable storage of the entry collection

use crate::domain::Entry;
use crate::error::{DiaristError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Schema version written by this build
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Abstract storage for the complete entry collection
pub trait EntryStorage {
    /// Read the persisted collection. A missing file yields an empty collection.
    fn load(&self) -> Result<Vec<Entry>>;

    /// Replace the persisted collection with `entries`
    fn save(&self, entries: &[Entry]) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct Document {
    schema_version: u32,
    entries: Vec<Entry>,
}

#[derive(Debug, Serialize)]
struct DocumentRef<'a> {
    schema_version: u32,
    entries: &'a [Entry],
}

/// JSON file storage with atomic replace on save
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn corruption(&self, reason: impl Into<String>) -> DiaristError {
        DiaristError::Corruption {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }

    /// Decode either the versioned document or the bare entry array
    /// written before schema versions existed.
    fn decode(&self, raw: &str) -> Result<Vec<Entry>> {
        let value: Value = serde_json::from_str(raw).map_err(|e| self.corruption(e.to_string()))?;

        let entries = match value {
            Value::Array(_) => {
                let entries: Vec<Entry> =
                    serde_json::from_value(value).map_err(|e| self.corruption(e.to_string()))?;
                warn!(
                    path = %self.path.display(),
                    to = CURRENT_SCHEMA_VERSION,
                    "migrating unversioned journal file"
                );
                entries
            }
            Value::Object(_) => {
                // Checked before decoding entries: a newer layout may not parse as v1.
                let version = value.get("schema_version").and_then(Value::as_u64);
                if let Some(found) = version.filter(|v| *v > u64::from(CURRENT_SCHEMA_VERSION)) {
                    return Err(DiaristError::UnsupportedSchema {
                        path: self.path.clone(),
                        found,
                        supported: CURRENT_SCHEMA_VERSION,
                    });
                }
                let document: Document =
                    serde_json::from_value(value).map_err(|e| self.corruption(e.to_string()))?;
                debug!(schema_version = document.schema_version, "decoded journal document");
                document.entries
            }
            _ => return Err(self.corruption("expected an object or an array of entries")),
        };

        Ok(entries)
    }

    fn write_atomic(&self, contents: &[u8]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        // Dropping an unpersisted temp file removes it, so every early return cleans up.
        let mut temp = NamedTempFile::new_in(&dir)?;
        temp.write_all(contents)?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| DiaristError::Io(e.error))?;
        Ok(())
    }
}

impl EntryStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Entry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "journal file does not exist");
                return Ok(Vec::new());
            }
            Err(e) if e.kind() == std::io::ErrorKind::InvalidData => {
                return Err(self.corruption(e.to_string()));
            }
            Err(e) => return Err(DiaristError::Io(e)),
        };

        let entries = self.decode(&raw)?;
        debug!(path = %self.path.display(), count = entries.len(), "loaded entries");
        Ok(entries)
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        let document = DocumentRef {
            schema_version: CURRENT_SCHEMA_VERSION,
            entries,
        };
        let mut contents = serde_json::to_vec_pretty(&document)?;
        contents.push(b'\n');

        self.write_atomic(&contents)?;
        debug!(path = %self.path.display(), count = entries.len(), "saved entries");
        Ok(())
    }
}
