//! Entry repository: the in-memory journal backed by storage

use crate::domain::{Entry, Journal};
use crate::error::DiaristError;
use crate::infrastructure::EntryStorage;
use std::path::PathBuf;
use tracing::{debug, error, warn};

/// A file written by a newer build; the session never saves over it.
#[derive(Debug, Clone)]
struct NewerSchema {
    path: PathBuf,
    found: u64,
    supported: u32,
}

impl NewerSchema {
    fn to_error(&self) -> DiaristError {
        DiaristError::UnsupportedSchema {
            path: self.path.clone(),
            found: self.found,
            supported: self.supported,
        }
    }
}

/// In-memory journal that persists the full collection after every mutation.
///
/// Storage failures never escape: a failed load starts an empty session, a
/// failed save keeps the in-memory change. Both are recorded as warnings for
/// the caller to drain with [`EntryRepository::take_warnings`].
///
/// A file with a newer schema version makes the session read-only on disk:
/// mutations apply in memory and every save is skipped with a warning.
#[derive(Debug)]
pub struct EntryRepository<S: EntryStorage> {
    storage: S,
    journal: Journal,
    warnings: Vec<DiaristError>,
    newer_schema: Option<NewerSchema>,
}

impl<S: EntryStorage> EntryRepository<S> {
    /// Open the repository, loading the persisted collection once
    pub fn open(storage: S) -> Self {
        let mut warnings = Vec::new();
        let mut newer_schema = None;

        let journal = match storage.load() {
            Ok(entries) => {
                let (journal, repairs) = Journal::from_entries(entries);
                if repairs.reissued_ids > 0 {
                    warn!(
                        count = repairs.reissued_ids,
                        "duplicate entry ids found, affected entries were given new ids"
                    );
                }
                if repairs.renumbered {
                    warn!(
                        count = journal.len(),
                        "entry numbers were out of sequence and have been renumbered"
                    );
                }
                journal
            }
            Err(DiaristError::UnsupportedSchema {
                path,
                found,
                supported,
            }) => {
                error!(
                    path = %path.display(),
                    found,
                    supported,
                    "journal file is from a newer version, it will not be written"
                );
                let lock = NewerSchema {
                    path,
                    found,
                    supported,
                };
                warnings.push(lock.to_error());
                newer_schema = Some(lock);
                Journal::new()
            }
            Err(e) => {
                error!(error = %e, "could not load journal, starting empty");
                warnings.push(e);
                Journal::new()
            }
        };

        EntryRepository {
            storage,
            journal,
            warnings,
            newer_schema,
        }
    }

    /// Append a new entry and persist
    pub fn add(&mut self, title: String, content: String) -> Entry {
        let entry = self.journal.add(title, content).clone();
        self.persist();
        debug!(entry_number = entry.entry_number, title = %entry.title, "added entry");
        entry
    }

    /// Replace title and content at `position` and persist.
    /// Returns `false` without touching anything when the position is invalid.
    pub fn update(&mut self, position: usize, title: String, content: String) -> bool {
        let Some(entry_number) = self
            .journal
            .update(position, title, content)
            .map(|entry| entry.entry_number)
        else {
            error!(position, len = self.journal.len(), "update failed: position out of bounds");
            return false;
        };

        self.persist();
        debug!(entry_number, "updated entry");
        true
    }

    /// Remove the entry at `position`, renumber the rest and persist.
    /// Returns `false` without touching anything when the position is invalid.
    pub fn delete(&mut self, position: usize) -> bool {
        let Some(removed) = self.journal.remove(position) else {
            error!(position, len = self.journal.len(), "delete failed: position out of bounds");
            return false;
        };

        self.persist();
        debug!(entry_number = removed.entry_number, title = %removed.title, "deleted entry");
        true
    }

    /// Case-insensitive substring search paired with current positions
    pub fn search(&self, keyword: &str) -> Vec<(usize, &Entry)> {
        let results = self.journal.search(keyword);
        debug!(keyword, count = results.len(), "searched entries");
        results
    }

    pub fn all(&self) -> &[Entry] {
        self.journal.entries()
    }

    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.journal.get(position)
    }

    /// Drain storage problems recorded since the last call
    pub fn take_warnings(&mut self) -> Vec<DiaristError> {
        std::mem::take(&mut self.warnings)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn persist(&mut self) {
        if let Some(lock) = &self.newer_schema {
            warn!(path = %lock.path.display(), "skipping save over a newer journal file");
            self.warnings.push(lock.to_error());
            return;
        }
        if let Err(e) = self.storage.save(self.journal.entries()) {
            warn!(error = %e, "could not save journal, in-memory changes are not on disk");
            self.warnings.push(e);
        }
    }
}
