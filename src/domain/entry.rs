//! Journal entry record

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp layout used for display and on disk
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single journal record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub unique_id: String,
    pub entry_number: usize,
    pub title: String,
    pub content: String,
    #[serde(with = "timestamp")]
    pub date_time: NaiveDateTime,
}

impl Entry {
    /// Create a new entry with a fresh identifier, stamped with the current local time
    pub fn new(entry_number: usize, title: String, content: String) -> Self {
        Entry {
            unique_id: uuid::Uuid::new_v4().to_string(),
            entry_number,
            title,
            content,
            date_time: now(),
        }
    }

    /// Replace title and content and refresh the timestamp
    pub fn revise(&mut self, title: String, content: String) {
        self.title = title;
        self.content = content;
        self.date_time = now();
    }

    /// Case-insensitive substring match against title or content.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn formatted_date_time(&self) -> String {
        self.date_time.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Current local wall-clock time truncated to whole seconds
fn now() -> NaiveDateTime {
    let local = Local::now().naive_local();
    local.with_nanosecond(0).unwrap_or(local)
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
