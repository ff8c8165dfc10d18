//! Mutable chart state shared by the UI and the CLI.
//!
//! All roster and seat-grid mutation funnels through [`ChartState`],
//! which records [`ChartEvent`]s in a drain-queue. Views subscribe by
//! draining the queue after each input instead of mutating model state
//! from widget code.

use crate::config::LayoutConfig;
use crate::models::{Roster, RosterError, SeatAddress, SeatGrid};
use std::collections::VecDeque;

/// Notification emitted after a model mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartEvent {
    /// A student was placed on a seat.
    SeatAssigned {
        /// Target seat
        address: SeatAddress,
        /// Placed student
        name: String,
    },
    /// A seat was reset to empty.
    SeatCleared {
        /// Cleared seat
        address: SeatAddress,
        /// Displaced student (returned to the roster)
        name: String,
    },
    /// The roster membership changed (add, remove, or bulk import).
    RosterChanged,
    /// The grid was rebuilt from a new layout.
    GridRebuilt,
}

/// The seating chart model: roster of unplaced students plus the seat
/// grid, with an event queue for view refresh.
#[derive(Debug, Default)]
pub struct ChartState {
    pub(crate) roster: Roster,
    pub(crate) grid: SeatGrid,
    events: VecDeque<ChartEvent>,
}

impl ChartState {
    /// Creates a chart with the given roster and a grid built from
    /// `layout`.
    #[must_use]
    pub fn new(roster: Roster, layout: &LayoutConfig) -> Self {
        Self {
            roster,
            grid: SeatGrid::build(layout),
            events: VecDeque::new(),
        }
    }

    /// Read access to the roster.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Read access to the grid.
    #[must_use]
    pub const fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    /// Number of students placed on seats.
    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.grid.occupied_seats()
    }

    /// Number of students still in the roster.
    #[must_use]
    pub fn unplaced_count(&self) -> usize {
        self.roster.len()
    }

    /// Adds a student to the roster by hand.
    pub fn add_student(&mut self, name: impl Into<String>) -> Result<(), RosterError> {
        self.roster.add(name)?;
        self.emit(ChartEvent::RosterChanged);
        Ok(())
    }

    /// Replaces the roster wholesale (CSV import).
    pub fn import_roster<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roster.import_bulk(names);
        self.emit(ChartEvent::RosterChanged);
    }

    /// Rebuilds the grid from a new layout. All seats are recreated
    /// empty; previous occupants are returned to the roster so nobody
    /// is lost across a reconfiguration.
    pub fn rebuild(&mut self, layout: &LayoutConfig) {
        for name in self.grid.drain_occupants() {
            self.roster.restore(name);
        }
        self.grid = SeatGrid::build(layout);
        self.emit(ChartEvent::GridRebuilt);
        self.emit(ChartEvent::RosterChanged);
    }

    /// Drains all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<ChartEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn emit(&mut self, event: ChartEvent) {
        self.events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_new_builds_grid_from_layout() {
        let config = Config::new();
        let chart = ChartState::new(Roster::from_names(["Alice"]), &config.layout_config);
        assert_eq!(chart.grid().total_seats(), 3 * 8 * 3);
        assert_eq!(chart.unplaced_count(), 1);
        assert_eq!(chart.placed_count(), 0);
    }

    #[test]
    fn test_add_student_emits_event() {
        let config = Config::new();
        let mut chart = ChartState::new(Roster::new(), &config.layout_config);
        chart.add_student("Alice").unwrap();
        assert_eq!(chart.drain_events(), vec![ChartEvent::RosterChanged]);
        // Queue is empty once drained
        assert!(chart.drain_events().is_empty());
    }

    #[test]
    fn test_rebuild_returns_occupants_to_roster() {
        let config = Config::new();
        let mut chart = ChartState::new(Roster::from_names(["Alice"]), &config.layout_config);
        crate::services::assignment::assign(
            &mut chart,
            crate::services::assignment::DragPayload::Roster {
                name: "Alice".to_string(),
            },
            &SeatAddress::new("column1", 0, 0),
        )
        .unwrap();

        let before = chart.placed_count() + chart.unplaced_count();
        chart.rebuild(&config.layout_config);
        assert_eq!(chart.placed_count(), 0);
        assert_eq!(chart.placed_count() + chart.unplaced_count(), before);
        assert!(chart.roster().contains("Alice"));
    }
}
