//! Student roster CSV parsing.
//!
//! The import format is deliberately loose: one student per line, the
//! name in the first field. Extra fields, blank lines, and surrounding
//! quotes are tolerated, so exports from common spreadsheet tools load
//! without cleanup.

use anyhow::{Context, Result};
use std::path::Path;

/// Parses a roster CSV file into an ordered list of student names.
///
/// # File Format
///
/// ```csv
/// Alice Johnson,3B
/// "Bob Smith",3B
///
/// Carol White
/// ```
///
/// Only the first field of each line is used. Blank lines are skipped
/// and duplicate names are dropped, keeping the first occurrence.
///
/// # Errors
///
/// Returns errors for a missing file, a non-file path, or unreadable
/// content. Malformed lines are not errors; they simply yield no name.
pub fn parse_roster_csv(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        anyhow::bail!("Roster file not found: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!(
            "Path is not a file: {}\n\n\
             Please provide a path to a CSV file with one student per line.",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;

    Ok(parse_roster_csv_str(&content))
}

/// Parses roster CSV content from a string.
#[must_use]
pub fn parse_roster_csv_str(content: &str) -> Vec<String> {
    let mut names = Vec::new();
    for line in content.lines() {
        let first_field = line.split(',').next().unwrap_or("");
        let name = strip_quotes(first_field.trim());
        if name.is_empty() {
            continue;
        }
        if !names.iter().any(|existing| existing == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Removes one matching pair of surrounding double quotes, if present.
fn strip_quotes(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .map_or(field, str::trim)
}
