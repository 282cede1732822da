//! CLI layer - Command-line interface

pub mod commands;
pub mod input;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_entry, format_entry_list, format_search_results};
