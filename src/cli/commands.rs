//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diarist")]
#[command(about = "Personal journal kept in a single file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Entries file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new entry
    Add {
        /// Entry title
        title: String,

        /// Entry text
        #[arg(short, long, conflicts_with = "stdin")]
        content: Option<String>,

        /// Read entry text from standard input
        #[arg(long)]
        stdin: bool,
    },

    /// List all entries
    List,

    /// Show one entry in full
    Show {
        /// Entry number as shown by `list`
        #[arg(value_parser = parse_entry_number)]
        number: usize,
    },

    /// Edit an entry's title or text
    Edit {
        /// Entry number as shown by `list`
        #[arg(value_parser = parse_entry_number)]
        number: usize,

        /// New title (keeps the current one if omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// New text (keeps the current one if omitted)
        #[arg(short, long, conflicts_with = "stdin")]
        content: Option<String>,

        /// Read new text from standard input
        #[arg(long)]
        stdin: bool,
    },

    /// Delete an entry
    Delete {
        /// Entry number as shown by `list`
        #[arg(value_parser = parse_entry_number)]
        number: usize,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Search titles and text for a keyword (case-insensitive)
    Search {
        /// Keyword to look for
        keyword: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

/// Entry numbers start at 1
fn parse_entry_number(raw: &str) -> Result<usize, String> {
    let number: usize = raw
        .parse()
        .map_err(|_| format!("'{}' is not an entry number", raw))?;
    if number == 0 {
        return Err("entry numbers start at 1".to_string());
    }
    Ok(number)
}
