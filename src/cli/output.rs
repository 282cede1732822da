//! Output formatting utilities

use crate::domain::Entry;

/// One list row: `Entry N: TITLE - DATE_TIME`
pub fn format_entry_row(entry: &Entry) -> String {
    format!(
        "Entry {}: {} - {}",
        entry.entry_number,
        entry.title,
        entry.formatted_date_time()
    )
}

/// Format the whole collection for display
pub fn format_entry_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format_entry_row(entry));
        output.push('\n');
    }
    output
}

/// Format search hits in collection order
pub fn format_search_results(results: &[(usize, &Entry)]) -> String {
    if results.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (_, entry) in results {
        output.push_str(&format_entry_row(entry));
        output.push('\n');
    }
    output
}

/// Full view of a single entry
pub fn format_entry(entry: &Entry) -> String {
    let mut output = format!(
        "Entry {}: {}\n{}\n",
        entry.entry_number,
        entry.title,
        entry.formatted_date_time()
    );
    if !entry.content.is_empty() {
        output.push('\n');
        output.push_str(&entry.content);
        output.push('\n');
    }
    output
}
