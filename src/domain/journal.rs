//! Journal aggregate root

use crate::domain::Entry;
use std::collections::HashSet;

/// Fixes applied while building a journal from loaded entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Repairs {
    /// At least one entry number did not match its position
    pub renumbered: bool,
    /// Entries whose repeated `unique_id` was replaced with a fresh one
    pub reissued_ids: usize,
}

impl Repairs {
    pub fn is_clean(&self) -> bool {
        !self.renumbered && self.reissued_ids == 0
    }
}

/// Ordered in-memory collection of entries.
///
/// Entries keep their insertion order. After every mutation the
/// `entry_number` of each entry equals its position + 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Journal {
    entries: Vec<Entry>,
}

impl Journal {
    pub fn new() -> Self {
        Journal::default()
    }

    /// Build a journal from loaded entries, renumbering them by position and
    /// giving every repeated `unique_id` after its first use a fresh identifier.
    pub fn from_entries(entries: Vec<Entry>) -> (Self, Repairs) {
        let mut journal = Journal { entries };
        let reissued_ids = journal.reissue_duplicate_ids();
        let renumbered = journal.renumber();
        (
            journal,
            Repairs {
                renumbered,
                reissued_ids,
            },
        )
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Entry> {
        self.entries.get(position)
    }

    /// Append a new entry numbered after the current last one
    pub fn add(&mut self, title: String, content: String) -> &Entry {
        let entry = Entry::new(self.entries.len() + 1, title, content);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Replace title and content of the entry at `position`.
    /// Returns `None` when the position is out of range.
    pub fn update(&mut self, position: usize, title: String, content: String) -> Option<&Entry> {
        let entry = self.entries.get_mut(position)?;
        entry.revise(title, content);
        Some(entry)
    }

    /// Remove the entry at `position` and renumber the rest.
    /// Returns `None` when the position is out of range.
    pub fn remove(&mut self, position: usize) -> Option<Entry> {
        if position >= self.entries.len() {
            return None;
        }
        let removed = self.entries.remove(position);
        self.renumber();
        Some(removed)
    }

    /// Case-insensitive substring search over title and content.
    /// Results carry the current zero-based position of each match.
    pub fn search(&self, keyword: &str) -> Vec<(usize, &Entry)> {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.matches(&needle))
            .collect()
    }

    fn reissue_duplicate_ids(&mut self) -> usize {
        let mut seen = HashSet::new();
        let mut reissued = 0;
        for entry in &mut self.entries {
            if !seen.insert(entry.unique_id.clone()) {
                entry.unique_id = uuid::Uuid::new_v4().to_string();
                seen.insert(entry.unique_id.clone());
                reissued += 1;
            }
        }
        reissued
    }

    fn renumber(&mut self) -> bool {
        let mut changed = false;
        for (idx, entry) in self.entries.iter_mut().enumerate() {
            if entry.entry_number != idx + 1 {
                entry.entry_number = idx + 1;
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal_with(titles: &[&str]) -> Journal {
        let mut journal = Journal::new();
        for title in titles {
            journal.add(title.to_string(), format!("{} body", title));
        }
        journal
    }

    fn assert_dense(journal: &Journal) {
        for (idx, entry) in journal.entries().iter().enumerate() {
            assert_eq!(entry.entry_number, idx + 1);
        }
    }

    #[test]
    fn test_add_numbers_sequentially() {
        let journal = journal_with(&["a", "b", "c", "d", "e"]);
        assert_eq!(journal.len(), 5);
        assert_dense(&journal);

        let ids: HashSet<&str> = journal
            .entries()
            .iter()
            .map(|e| e.unique_id.as_str())
            .collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_remove_renumbers_every_position() {
        for position in 0..4 {
            let mut journal = journal_with(&["a", "b", "c", "d"]);
            let removed = journal.remove(position).unwrap();
            assert_eq!(removed.entry_number, position + 1);
            assert_eq!(journal.len(), 3);
            assert_dense(&journal);
        }
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut journal = journal_with(&["a", "b"]);
        let before = journal.clone();
        assert!(journal.remove(2).is_none());
        assert!(journal.remove(usize::MAX).is_none());
        assert_eq!(journal, before);
    }

    #[test]
    fn test_update_keeps_position_and_number() {
        let mut journal = journal_with(&["a", "b", "c"]);
        let id = journal.get(1).unwrap().unique_id.clone();

        let updated = journal
            .update(1, "B".to_string(), "new body".to_string())
            .unwrap();
        assert_eq!(updated.entry_number, 2);
        assert_eq!(updated.unique_id, id);
        assert_eq!(journal.get(1).unwrap().title, "B");
        assert_eq!(journal.get(1).unwrap().content, "new body");
    }

    #[test]
    fn test_update_out_of_range() {
        let mut journal = journal_with(&["a"]);
        let before = journal.clone();
        assert!(journal.update(1, "x".to_string(), String::new()).is_none());
        assert_eq!(journal, before);
    }

    #[test]
    fn test_search_returns_positions() {
        let journal = journal_with(&["Catalog", "dog walk", "Concatenate"]);
        let results = journal.search("CAT");
        let positions: Vec<usize> = results.iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, vec![0, 2]);
    }

    #[test]
    fn test_search_matches_content() {
        let mut journal = Journal::new();
        journal.add("Monday".to_string(), "Fed the cat".to_string());
        journal.add("Tuesday".to_string(), "Rain".to_string());
        let results = journal.search("cat");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].1.title, "Monday");
    }

    #[test]
    fn test_search_empty_keyword_matches_everything() {
        let journal = journal_with(&["a", "b", "c"]);
        assert_eq!(journal.search("").len(), 3);
        assert_eq!(journal.search("").len(), 3);
    }

    #[test]
    fn test_from_entries_renumbers() {
        let source = journal_with(&["a", "b", "c"]);
        let mut entries = source.entries().to_vec();
        entries[0].entry_number = 7;
        entries[2].entry_number = 1;

        let (journal, repairs) = Journal::from_entries(entries);
        assert!(repairs.renumbered);
        assert_eq!(repairs.reissued_ids, 0);
        assert_dense(&journal);

        let (_, repairs) = Journal::from_entries(source.entries().to_vec());
        assert!(repairs.is_clean());
    }

    #[test]
    fn test_from_entries_reissues_duplicate_ids() {
        let source = journal_with(&["a", "b", "c"]);
        let mut entries = source.entries().to_vec();
        entries[1].unique_id = entries[0].unique_id.clone();
        entries[2].unique_id = entries[0].unique_id.clone();

        let (journal, repairs) = Journal::from_entries(entries);
        assert_eq!(repairs.reissued_ids, 2);
        assert!(!repairs.renumbered);
        assert_eq!(journal.len(), 3);

        // The first holder keeps its id; titles and order are untouched.
        assert_eq!(journal.get(0).unwrap().unique_id, source.get(0).unwrap().unique_id);
        let titles: Vec<&str> = journal.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "b", "c"]);

        let ids: HashSet<&str> = journal
            .entries()
            .iter()
            .map(|e| e.unique_id.as_str())
            .collect();
        assert_eq!(ids.len(), 3);
    }
}
