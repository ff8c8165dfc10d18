//! Roster of unassigned students.

use thiserror::Error;

/// Errors raised when adding a student by hand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The name was empty after trimming.
    #[error("student name cannot be empty")]
    EmptyName,
    /// The name is already present in the roster.
    #[error("student '{0}' is already in the roster")]
    Duplicate(String),
}

/// Ordered pool of students not currently assigned to any seat.
///
/// Insertion order is display order; names are unique. The roster is
/// rebuilt each session (from defaults or a CSV import) and never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<String>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Creates a roster from a list of names, de-duplicated in order and
    /// with empty entries skipped.
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster = Self::new();
        roster.import_bulk(names);
        roster
    }

    /// Appends a student. Rejects empty and duplicate names with no
    /// state change.
    pub fn add(&mut self, name: impl Into<String>) -> Result<(), RosterError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.contains(&name) {
            return Err(RosterError::Duplicate(name));
        }
        self.students.push(name);
        Ok(())
    }

    /// Removes exactly one occurrence of `name`. Silently does nothing
    /// when the name is absent; callers are expected to have checked.
    pub fn remove(&mut self, name: &str) -> bool {
        if let Some(idx) = self.students.iter().position(|s| s == name) {
            self.students.remove(idx);
            true
        } else {
            false
        }
    }

    /// Returns a student to the pool (used when a seat is cleared or the
    /// grid is rebuilt). A name already present is left alone so the
    /// no-duplicates invariant holds.
    pub fn restore(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() && !self.contains(&name) {
            self.students.push(name);
        }
    }

    /// Replaces the roster wholesale with a de-duplicated,
    /// order-preserving list; empty entries are skipped.
    pub fn import_bulk<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.students.clear();
        for name in names {
            let name = name.into().trim().to_string();
            if !name.is_empty() && !self.contains(&name) {
                self.students.push(name);
            }
        }
    }

    /// Whether `name` is in the pool.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.students.iter().any(|s| s == name)
    }

    /// Number of unassigned students.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Iterates names in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.students.iter().map(String::as_str)
    }

    /// Name at a display position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.students.get(index).map(String::as_str)
    }
}
