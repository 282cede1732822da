//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use repository::EntryRepository;
pub use storage::{EntryStorage, JsonFileStorage, CURRENT_SCHEMA_VERSION};
