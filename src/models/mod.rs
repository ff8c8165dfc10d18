//! Data models for the seating chart.
//!
//! This module contains all the core data structures used throughout the
//! application. Models are designed to be independent of UI and business
//! logic.

pub mod grid;
pub mod roster;
pub mod seat;

// Re-export all model types
pub use grid::{GridError, SeatColumn, SeatGrid};
pub use roster::{Roster, RosterError};
pub use seat::{Seat, SeatAddress};
