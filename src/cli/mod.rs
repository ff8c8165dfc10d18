//! CLI command handlers for Seatplan.
//!
//! This module provides headless, scriptable access to the seating
//! chart for automation and testing: exporting renders and editing the
//! configuration without entering the TUI.

pub mod common;
pub mod config;
pub mod export;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use config::ConfigArgs;
pub use export::{ExportArgs, ExportFormat};
