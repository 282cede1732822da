//! diarist - Personal journal
//!
//! Keeps free-text journal entries in a single JSON file and lets a single
//! user add, view, edit, delete and keyword-search them.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::DiaristError;
