//! Seat assignment state machine.
//!
//! Each seat is a two-state machine (`EMPTY` -> `OCCUPIED` -> `EMPTY`)
//! whose transitions happen only through [`assign`] and [`clear`]. The
//! drop payload is a tagged variant dispatched by exhaustive match; the
//! target seat is validated before the source is touched, so a failed
//! drop never leaves a student in neither location.

use crate::models::{GridError, SeatAddress};
use crate::services::chart::{ChartEvent, ChartState};
use thiserror::Error;

/// Origin of a pick-up/drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// Picked up from the roster strip.
    Roster {
        /// Student being dragged
        name: String,
    },
    /// Picked up from an occupied seat (move between seats).
    Seat {
        /// Source seat
        address: SeatAddress,
        /// Student being dragged
        name: String,
    },
    /// Payload with no extractable student name. Always rejected.
    Unknown {
        /// Raw payload text, kept for the error notice
        raw: String,
    },
}

impl DragPayload {
    /// The dragged student's name, when the payload carries one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Roster { name } | Self::Seat { name, .. } => Some(name),
            Self::Unknown { .. } => None,
        }
    }
}

/// Why a drop was not applied. `SeatOccupied` and `UnrecognizedPayload`
/// are expected, recoverable conditions surfaced as a notice; the grid
/// variants indicate a stale address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// The target seat already holds a student.
    #[error("seat {address} is already occupied by {occupant}")]
    SeatOccupied {
        /// Target seat
        address: SeatAddress,
        /// Current occupant
        occupant: String,
    },
    /// The payload carried no student name.
    #[error("drop data '{raw}' carries no student name")]
    UnrecognizedPayload {
        /// Raw payload text
        raw: String,
    },
    /// The source seat no longer holds the dragged student.
    #[error("seat {address} no longer holds {name}")]
    StaleSource {
        /// Source seat of the stale payload
        address: SeatAddress,
        /// Student the payload claimed was there
        name: String,
    },
    /// The target or source address does not resolve to a seat.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Result of a successful drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOutcome {
    /// The student was placed on the target seat.
    Placed,
    /// The payload was dropped onto its own source seat; nothing changed.
    SelfDrop,
}

/// Assigns the payload's student to `target`.
///
/// Order of operations: the target is validated and written first; the
/// source (roster entry or source seat) is only mutated afterwards.
/// Rejections are atomic — neither side changes.
pub fn assign(
    chart: &mut ChartState,
    payload: DragPayload,
    target: &SeatAddress,
) -> Result<AssignOutcome, AssignError> {
    // A seat dropped onto itself would otherwise be rejected as
    // "occupied" by the dragged student.
    if let DragPayload::Seat { address, .. } = &payload {
        if address == target {
            return Ok(AssignOutcome::SelfDrop);
        }
    }

    let name = match &payload {
        DragPayload::Roster { name } | DragPayload::Seat { name, .. } => name.clone(),
        DragPayload::Unknown { raw } => {
            return Err(AssignError::UnrecognizedPayload { raw: raw.clone() })
        }
    };

    // Validate the target before touching anything. For a seat-to-seat
    // move the source seat must still hold the dragged student,
    // otherwise a stale drag (the seat was cleared after pick-up) would
    // duplicate them.
    if let DragPayload::Seat { address, .. } = &payload {
        if chart.grid.get(address)?.student_name() != Some(name.as_str()) {
            return Err(AssignError::StaleSource {
                address: address.clone(),
                name,
            });
        }
    }
    let target_seat = chart.grid.get_mut(target)?;
    if let Some(occupant) = target_seat.student_name() {
        return Err(AssignError::SeatOccupied {
            address: target.clone(),
            occupant: occupant.to_string(),
        });
    }

    target_seat.assign(name.clone());

    match payload {
        DragPayload::Roster { .. } => {
            chart.roster.remove(&name);
            chart.emit(ChartEvent::RosterChanged);
        }
        DragPayload::Seat { address, .. } => {
            // Already validated above; the seat cannot have vanished since.
            if let Ok(source_seat) = chart.grid.get_mut(&address) {
                if source_seat.clear().is_some() {
                    chart.emit(ChartEvent::SeatCleared {
                        address,
                        name: name.clone(),
                    });
                }
            }
        }
        DragPayload::Unknown { .. } => unreachable!("rejected above"),
    }

    chart.emit(ChartEvent::SeatAssigned {
        address: target.clone(),
        name,
    });
    Ok(AssignOutcome::Placed)
}

/// Unconditionally resets a seat to empty. The displaced student, if
/// any, is returned to the roster so the placed + unplaced total stays
/// invariant.
pub fn clear(chart: &mut ChartState, address: &SeatAddress) -> Result<Option<String>, GridError> {
    let seat = chart.grid.get_mut(address)?;
    let Some(name) = seat.clear() else {
        return Ok(None);
    };
    chart.roster.restore(name.clone());
    chart.emit(ChartEvent::SeatCleared {
        address: address.clone(),
        name: name.clone(),
    });
    chart.emit(ChartEvent::RosterChanged);
    Ok(Some(name))
}
