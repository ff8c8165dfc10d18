//! Parsing for external file formats.
//!
//! Currently this covers roster CSV import. Config JSON lives in
//! [`crate::config`] since it is tied to the config lifecycle.

pub mod roster_csv;

// Re-export commonly used functions
pub use roster_csv::{parse_roster_csv, parse_roster_csv_str};
