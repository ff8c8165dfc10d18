//! Seatplan Library
//!
//! This library provides the core functionality for the Seatplan
//! application: the seating chart model, JSON configuration handling,
//! roster CSV import, and PDF/image export.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;
pub mod tui;
