//! Business logic services for the seating chart.
//!
//! Services mutate the models on behalf of the UI and CLI. They contain
//! no rendering code; views react to the events drained from
//! [`chart::ChartState`].

pub mod assignment;
pub mod chart;

pub use assignment::{assign, clear, AssignError, AssignOutcome, DragPayload};
pub use chart::{ChartEvent, ChartState};
