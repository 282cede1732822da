//! Config management use case

use crate::error::{DiaristError, Result};
use crate::infrastructure::config::validate_log_level;
use crate::infrastructure::Config;
use std::path::PathBuf;

const VALID_KEYS: &str = "entries_file, log_level";

/// Service for reading and changing the config file
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the config file at `path`
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value; unset keys resolve to their effective default
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load_from(&self.path)?;

        match key {
            "entries_file" => Ok(config.entries_path(None).display().to_string()),
            "log_level" => Ok(config.log_level().to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load_from(&self.path)?;

        match key {
            "entries_file" => {
                if value.trim().is_empty() {
                    return Err(DiaristError::Config(
                        "entries_file cannot be empty".to_string(),
                    ));
                }
                config.entries_file = Some(PathBuf::from(value));
            }
            "log_level" => {
                validate_log_level(value)?;
                config.log_level = Some(value.to_lowercase());
            }
            _ => return Err(unknown_key(key)),
        }

        config.save_to(&self.path)
    }

    /// Load the whole config
    pub fn list(&self) -> Result<Config> {
        Config::load_from(&self.path)
    }
}

fn unknown_key(key: &str) -> DiaristError {
    DiaristError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_get_log_level() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().join("config.toml"));

        assert_eq!(service.get("log_level").unwrap(), "warn");
        service.set("log_level", "DEBUG").unwrap();
        assert_eq!(service.get("log_level").unwrap(), "debug");
    }

    #[test]
    fn test_set_entries_file() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().join("config.toml"));

        service.set("entries_file", "/tmp/mine.json").unwrap();
        let config = service.list().unwrap();
        assert_eq!(config.entries_file, Some(PathBuf::from("/tmp/mine.json")));
    }

    #[test]
    fn test_rejects_invalid_values() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().join("config.toml"));

        assert!(service.set("log_level", "chatty").is_err());
        assert!(service.set("entries_file", "  ").is_err());
        assert!(!temp.path().join("config.toml").exists());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = ConfigService::new(temp.path().join("config.toml"));

        match service.get("colour") {
            Err(DiaristError::Config(msg)) => {
                assert!(msg.contains("Unknown config key: 'colour'"));
                assert!(msg.contains("entries_file, log_level"));
            }
            other => panic!("Expected Config error, got {:?}", other),
        }
        assert!(service.set("colour", "blue").is_err());
    }
}
