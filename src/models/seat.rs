//! Individual seat state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of a seat within the chart: column key plus (row, col) position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatAddress {
    /// Stable column key (e.g. "column1")
    pub column: String,
    /// Zero-based row within the column grid
    pub row: usize,
    /// Zero-based col within the column grid
    pub col: usize,
}

impl SeatAddress {
    /// Creates a new seat address.
    pub fn new(column: impl Into<String>, row: usize, col: usize) -> Self {
        Self {
            column: column.into(),
            row,
            col,
        }
    }
}

impl fmt::Display for SeatAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Human-facing positions are 1-based
        write!(f, "{} row {} seat {}", self.column, self.row + 1, self.col + 1)
    }
}

/// One seat slot holding at most one student.
///
/// # Invariant
///
/// `occupied == !student_name.is_empty()`. Fields are private so the
/// invariant can only be changed through [`Seat::assign`] and
/// [`Seat::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seat {
    occupied: bool,
    student_name: String,
}

impl Seat {
    /// Creates an empty seat.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            occupied: false,
            student_name: String::new(),
        }
    }

    /// Whether a student currently sits here.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// The occupant's name, if any.
    #[must_use]
    pub fn student_name(&self) -> Option<&str> {
        if self.occupied {
            Some(&self.student_name)
        } else {
            None
        }
    }

    /// Places a student on this seat. The caller is responsible for
    /// checking occupancy first; overwriting is not allowed here so the
    /// occupancy state machine stays two-state.
    pub(crate) fn assign(&mut self, name: impl Into<String>) {
        self.student_name = name.into();
        self.occupied = !self.student_name.is_empty();
    }

    /// Resets the seat to empty, returning the previous occupant.
    pub(crate) fn clear(&mut self) -> Option<String> {
        if !self.occupied {
            return None;
        }
        self.occupied = false;
        Some(std::mem::take(&mut self.student_name))
    }
}
