//! Request handler: validation between a front end and the repository

use crate::domain::Entry;
use crate::error::{DiaristError, Result};
use crate::infrastructure::{EntryRepository, EntryStorage};
use tracing::{debug, error};

/// Validates caller input and turns repository outcomes into errors
#[derive(Debug)]
pub struct RequestHandler<S: EntryStorage> {
    repository: EntryRepository<S>,
}

impl<S: EntryStorage> RequestHandler<S> {
    pub fn new(repository: EntryRepository<S>) -> Self {
        RequestHandler { repository }
    }

    /// Open a repository on `storage` and wrap it
    pub fn open(storage: S) -> Self {
        Self::new(EntryRepository::open(storage))
    }

    /// Add a new entry. Title and content are trimmed first.
    pub fn submit_new(&mut self, title: &str, content: &str) -> Result<Entry> {
        let title = require_title(title)?;
        let entry = self
            .repository
            .add(title.to_string(), content.trim().to_string());
        debug!(entry_number = entry.entry_number, "submitted new entry");
        Ok(entry)
    }

    /// Replace the entry at `position`
    pub fn submit_edit(&mut self, position: usize, title: &str, content: &str) -> Result<()> {
        let title = require_title(title)?;
        if !self
            .repository
            .update(position, title.to_string(), content.trim().to_string())
        {
            error!(position, "failed to update entry");
            return Err(DiaristError::NotFound(position));
        }
        debug!(position, "submitted edit");
        Ok(())
    }

    /// Delete the entry at `position`
    pub fn submit_delete(&mut self, position: usize) -> Result<()> {
        if !self.repository.delete(position) {
            error!(position, "failed to delete entry");
            return Err(DiaristError::NotFound(position));
        }
        debug!(position, "submitted delete");
        Ok(())
    }

    pub fn list_all(&self) -> &[Entry] {
        self.repository.all()
    }

    /// Search after trimming the keyword. An empty keyword matches every entry.
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Entry)> {
        self.repository.search(keyword.trim())
    }

    /// Look up a single entry by position
    pub fn view(&self, position: usize) -> Result<&Entry> {
        self.repository
            .get(position)
            .ok_or(DiaristError::NotFound(position))
    }

    /// Storage problems recorded since the last call
    pub fn take_warnings(&mut self) -> Vec<DiaristError> {
        self.repository.take_warnings()
    }

    pub fn repository(&self) -> &EntryRepository<S> {
        &self.repository
    }
}

fn require_title(title: &str) -> Result<&str> {
    let title = title.trim();
    if title.is_empty() {
        error!("rejected entry with empty title");
        return Err(DiaristError::EmptyTitle);
    }
    Ok(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::repository::tests::MemoryStorage;

    fn handler() -> RequestHandler<MemoryStorage> {
        RequestHandler::open(MemoryStorage::default())
    }

    fn saves(handler: &RequestHandler<MemoryStorage>) -> usize {
        handler.repository().storage().saves.get()
    }

    #[test]
    fn test_submit_new_trims_fields() {
        let mut handler = handler();
        let entry = handler.submit_new("  Morning  ", "\n ran 5k \n").unwrap();
        assert_eq!(entry.title, "Morning");
        assert_eq!(entry.content, "ran 5k");
        assert_eq!(handler.list_all()[0], entry);
    }

    #[test]
    fn test_submit_new_empty_title() {
        let mut handler = handler();
        for title in ["", "   ", "\t\n"] {
            assert!(matches!(
                handler.submit_new(title, "text"),
                Err(DiaristError::EmptyTitle)
            ));
        }
        assert!(handler.list_all().is_empty());
        assert_eq!(saves(&handler), 0);
    }

    #[test]
    fn test_submit_edit() {
        let mut handler = handler();
        handler.submit_new("A", "x").unwrap();
        handler.submit_edit(0, " A2 ", " x2 ").unwrap();

        let entry = handler.view(0).unwrap();
        assert_eq!(entry.title, "A2");
        assert_eq!(entry.content, "x2");
        assert_eq!(saves(&handler), 2);
    }

    #[test]
    fn test_submit_edit_empty_title_checked_first() {
        let mut handler = handler();
        handler.submit_new("A", "x").unwrap();

        assert!(matches!(
            handler.submit_edit(0, " ", "x"),
            Err(DiaristError::EmptyTitle)
        ));
        assert!(matches!(
            handler.submit_edit(5, "", "x"),
            Err(DiaristError::EmptyTitle)
        ));
        assert_eq!(handler.view(0).unwrap().title, "A");
        assert_eq!(saves(&handler), 1);
    }

    #[test]
    fn test_submit_edit_not_found() {
        let mut handler = handler();
        handler.submit_new("A", "x").unwrap();

        assert!(matches!(
            handler.submit_edit(1, "B", ""),
            Err(DiaristError::NotFound(1))
        ));
        assert_eq!(saves(&handler), 1);
    }

    #[test]
    fn test_submit_delete() {
        let mut handler = handler();
        handler.submit_new("A", "x").unwrap();
        handler.submit_new("B", "y").unwrap();
        handler.submit_delete(0).unwrap();

        assert_eq!(handler.list_all().len(), 1);
        assert_eq!(handler.list_all()[0].entry_number, 1);
        assert!(matches!(
            handler.submit_delete(1),
            Err(DiaristError::NotFound(1))
        ));
        assert_eq!(saves(&handler), 3);
    }

    #[test]
    fn test_find_trims_keyword() {
        let mut handler = handler();
        handler.submit_new("Catalog", "").unwrap();
        handler.submit_new("dog walk", "").unwrap();

        let results = handler.find("  CAT ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1.title, "Catalog");
    }

    #[test]
    fn test_find_empty_keyword_returns_everything() {
        let mut handler = handler();
        handler.submit_new("one", "").unwrap();
        handler.submit_new("two", "").unwrap();

        for keyword in ["", "   "] {
            let positions: Vec<usize> = handler.find(keyword).iter().map(|(p, _)| *p).collect();
            assert_eq!(positions, vec![0, 1]);
        }
    }

    #[test]
    fn test_view_not_found() {
        let handler = handler();
        assert!(matches!(handler.view(0), Err(DiaristError::NotFound(0))));
    }

    #[test]
    fn test_save_failure_surfaces_as_warning_not_error() {
        let mut handler = handler();
        handler.repository().storage().fail_saves.set(true);

        assert!(handler.submit_new("A", "x").is_ok());
        assert_eq!(handler.take_warnings().len(), 1);
    }
}
