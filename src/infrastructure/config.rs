//! Configuration management

use crate::error::{DiaristError, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the entries file
pub const FILE_ENV: &str = "DIARIST_FILE";
/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "DIARIST_CONFIG";

/// Levels accepted for `log_level`
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    /// Location of the config file, honouring DIARIST_CONFIG
    pub fn default_path() -> PathBuf {
        if let Some(path) = env_path(CONFIG_ENV) {
            return path;
        }

        dirs::config_dir()
            .map(|dir| dir.join("diarist").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("diarist.toml"))
    }

    /// Load config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(e) => return Err(DiaristError::Io(e)),
        };

        let config: Config = toml::from_str(&contents).map_err(|e| {
            DiaristError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        if let Some(level) = &config.log_level {
            validate_log_level(level)?;
        }
        Ok(config)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the entries file: explicit override, then DIARIST_FILE,
    /// then the config value, then the per-user data directory.
    pub fn entries_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        if let Some(path) = env_path(FILE_ENV) {
            return path;
        }
        if let Some(path) = &self.entries_file {
            return path.clone();
        }
        Self::default_entries_path()
    }

    /// Log level from config, falling back to `warn`
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    fn default_entries_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("diarist").join("entries.json"))
            .unwrap_or_else(|| PathBuf::from("entries.json"))
    }
}

/// Path from an environment variable; set but empty counts as unset
fn env_path(key: &str) -> Option<PathBuf> {
    non_empty_path(std::env::var_os(key)?)
}

fn non_empty_path(value: OsString) -> Option<PathBuf> {
    if value.is_empty() {
        None
    } else {
        Some(PathBuf::from(value))
    }
}

/// Reject anything that is not a plain tracing level name
pub fn validate_log_level(level: &str) -> Result<()> {
    if LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
        Ok(())
    } else {
        Err(DiaristError::Config(format!("Invalid log level: '{}'", level)))
    }
}
