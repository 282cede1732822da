//! Error types for diarist

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for diarist application
#[derive(Debug, Error)]
pub enum DiaristError {
    #[error("Entry title cannot be empty")]
    EmptyTitle,

    #[error("Entry not found at position {0}")]
    NotFound(usize),

    #[error("Journal data in {path} is corrupted: {reason}")]
    Corruption { path: PathBuf, reason: String },

    #[error("Journal file {path} uses schema version {found}, this build supports up to {supported}")]
    UnsupportedSchema {
        path: PathBuf,
        found: u64,
        supported: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Usage(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DiaristError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaristError::Config(_) | DiaristError::Usage(_) => 2,
            DiaristError::EmptyTitle => 3,
            DiaristError::NotFound(_) => 4,
            DiaristError::Corruption { .. } | DiaristError::UnsupportedSchema { .. } => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaristError::EmptyTitle => "Entry title cannot be empty\n\n\
                Suggestions:\n\
                • Pass a title: diarist add \"Morning walk\"\n\
                • Titles made only of whitespace are rejected"
                .to_string(),
            DiaristError::NotFound(position) => {
                format!(
                    "Entry {} does not exist\n\n\
                    Suggestions:\n\
                    • Use 'diarist list' to see current entry numbers\n\
                    • Entry numbers shift down after a delete",
                    position + 1
                )
            }
            DiaristError::Corruption { path, reason } => {
                format!(
                    "Journal data in {} is corrupted: {}\n\n\
                    The file was left untouched. Saving a new entry will replace it,\n\
                    so copy it somewhere safe first if you want to recover it by hand.",
                    path.display(),
                    reason
                )
            }
            DiaristError::UnsupportedSchema {
                path,
                found,
                supported,
            } => {
                format!(
                    "Journal file {} uses schema version {}, this build supports up to {}\n\n\
                    Nothing will be written to it. Upgrade diarist to edit this journal,\n\
                    or pass --file to work on a different one.",
                    path.display(),
                    found,
                    supported
                )
            }
            DiaristError::Config(msg) => {
                if msg.contains("Failed to parse") {
                    format!(
                        "{}\n\n\
                        Fix or remove the config file, or point DIARIST_CONFIG at another one.",
                        msg
                    )
                } else if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: diarist config entries_file ~/journal/entries.json",
                        msg
                    )
                } else if msg.contains("log level") {
                    format!(
                        "{}\n\n\
                        Valid levels: error, warn, info, debug, trace",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaristError
pub type Result<T> = std::result::Result<T, DiaristError>;
