//! Seat grid: occupancy state for all seats across all columns.

use crate::config::LayoutConfig;
use crate::models::seat::{Seat, SeatAddress};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised by seat lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The column key is not part of the current layout.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
    /// The (row, col) indices exceed the column's configured shape.
    #[error("seat ({row}, {col}) out of range for column '{column}' ({rows}x{cols})")]
    OutOfRange {
        /// Column key
        column: String,
        /// Requested row
        row: usize,
        /// Requested col
        col: usize,
        /// Configured row count
        rows: usize,
        /// Configured col count
        cols: usize,
    },
}

/// One labeled column of seats arranged in a rows x cols grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatColumn {
    rows: usize,
    cols: usize,
    seats: Vec<Seat>,
}

impl SeatColumn {
    /// Allocates an empty rows x cols column.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            seats: vec![Seat::empty(); rows * cols],
        }
    }

    /// Configured row count.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Configured col count.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of seats in this column.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Number of occupied seats in this column.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_occupied()).count()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Gets the seat at (row, col), if in range.
    #[must_use]
    pub fn seat(&self, row: usize, col: usize) -> Option<&Seat> {
        self.index(row, col).map(|i| &self.seats[i])
    }

    fn seat_mut(&mut self, row: usize, col: usize) -> Option<&mut Seat> {
        self.index(row, col).map(move |i| &mut self.seats[i])
    }

    /// Iterates seats in row-major order together with their (row, col).
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Seat)> {
        let cols = self.cols;
        self.seats
            .iter()
            .enumerate()
            .map(move |(i, seat)| (i / cols, i % cols, seat))
    }
}

/// The full seating chart grid, keyed by column.
///
/// The grid exclusively owns its seats. Rebuilding replaces every column
/// wholesale; there is no incremental resizing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeatGrid {
    columns: BTreeMap<String, SeatColumn>,
}

impl SeatGrid {
    /// Creates an empty grid with no columns.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: BTreeMap::new(),
        }
    }

    /// Builds a fresh grid from a layout config. Every column is allocated
    /// empty; columns not present in `layout` are dropped.
    #[must_use]
    pub fn build(layout: &LayoutConfig) -> Self {
        let columns = layout
            .iter()
            .map(|(key, shape)| (key.clone(), SeatColumn::new(shape.rows, shape.cols)))
            .collect();
        Self { columns }
    }

    /// Column keys in stable (sorted) order.
    pub fn column_keys(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Gets a column by key.
    #[must_use]
    pub fn column(&self, key: &str) -> Option<&SeatColumn> {
        self.columns.get(key)
    }

    /// Gets the seat at an address.
    pub fn get(&self, addr: &SeatAddress) -> Result<&Seat, GridError> {
        let column = self
            .columns
            .get(&addr.column)
            .ok_or_else(|| GridError::UnknownColumn(addr.column.clone()))?;
        column.seat(addr.row, addr.col).ok_or(GridError::OutOfRange {
            column: addr.column.clone(),
            row: addr.row,
            col: addr.col,
            rows: column.rows(),
            cols: column.cols(),
        })
    }

    /// Gets the seat at an address, mutably.
    pub fn get_mut(&mut self, addr: &SeatAddress) -> Result<&mut Seat, GridError> {
        let column = self
            .columns
            .get_mut(&addr.column)
            .ok_or_else(|| GridError::UnknownColumn(addr.column.clone()))?;
        let (rows, cols) = (column.rows(), column.cols());
        column.seat_mut(addr.row, addr.col).ok_or(GridError::OutOfRange {
            column: addr.column.clone(),
            row: addr.row,
            col: addr.col,
            rows,
            cols,
        })
    }

    /// Total seats across all columns.
    #[must_use]
    pub fn total_seats(&self) -> usize {
        self.columns.values().map(SeatColumn::seat_count).sum()
    }

    /// Occupied seats across all columns.
    #[must_use]
    pub fn occupied_seats(&self) -> usize {
        self.columns.values().map(SeatColumn::occupied_count).sum()
    }

    /// Collects the names of all seated students, clearing every seat.
    /// Used when the layout is reconfigured so occupants can be returned
    /// to the roster instead of silently vanishing.
    pub fn drain_occupants(&mut self) -> Vec<String> {
        let mut names = Vec::new();
        for column in self.columns.values_mut() {
            for seat in &mut column.seats {
                if let Some(name) = seat.clear() {
                    names.push(name);
                }
            }
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ColumnShape;

    fn layout(entries: &[(&str, usize, usize)]) -> LayoutConfig {
        entries
            .iter()
            .map(|(key, rows, cols)| {
                (
                    (*key).to_string(),
                    ColumnShape {
                        rows: *rows,
                        cols: *cols,
                        row_height: 60,
                        col_width: 80,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_build_allocates_empty_seats() {
        let grid = SeatGrid::build(&layout(&[("column1", 2, 2)]));
        let column = grid.column("column1").unwrap();
        assert_eq!(column.seat_count(), 4);
        assert_eq!(column.occupied_count(), 0);
        assert!(column.iter().all(|(_, _, seat)| !seat.is_occupied()));
    }

    #[test]
    fn test_rebuild_drops_missing_columns() {
        let grid = SeatGrid::build(&layout(&[("column1", 2, 2), ("column2", 1, 1)]));
        assert_eq!(grid.column_keys().count(), 2);

        let rebuilt = SeatGrid::build(&layout(&[("column1", 3, 3)]));
        assert!(rebuilt.column("column2").is_none());
        assert_eq!(rebuilt.column("column1").unwrap().seat_count(), 9);
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = SeatGrid::build(&layout(&[("column1", 2, 2)]));
        let err = grid.get(&SeatAddress::new("column1", 2, 0)).unwrap_err();
        assert!(matches!(err, GridError::OutOfRange { row: 2, .. }));
    }

    #[test]
    fn test_get_unknown_column() {
        let grid = SeatGrid::build(&layout(&[("column1", 2, 2)]));
        let err = grid.get(&SeatAddress::new("nope", 0, 0)).unwrap_err();
        assert_eq!(err, GridError::UnknownColumn("nope".to_string()));
    }

    #[test]
    fn test_counts_and_drain() {
        let mut grid = SeatGrid::build(&layout(&[("column1", 2, 2)]));
        grid.get_mut(&SeatAddress::new("column1", 0, 0))
            .unwrap()
            .assign("Alice");
        grid.get_mut(&SeatAddress::new("column1", 1, 1))
            .unwrap()
            .assign("Bob");

        assert_eq!(grid.total_seats(), 4);
        assert_eq!(grid.occupied_seats(), 2);

        let mut names = grid.drain_occupants();
        names.sort();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(grid.occupied_seats(), 0);
    }
}
