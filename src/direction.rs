//! `direction`: the eight compass directions a word may run in, and the user's on/off set.
//!
//! The catalog order is stable and matches what players see in the direction picker:
//! forward directions first, then their reverses.

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::errors::WordSearchError;

/// A unit step on the grid, with a stable id and a human label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub id: &'static str,
    pub label: &'static str,
    pub d_row: isize,
    pub d_col: isize,
}

pub const NUM_DIRECTIONS: usize = 8;

/// The process-wide direction catalog.
pub static DIRECTIONS: [Direction; NUM_DIRECTIONS] = [
    Direction { id: "horizontal", label: "Horizontal →", d_row: 0, d_col: 1 },
    Direction { id: "vertical", label: "Vertical ↓", d_row: 1, d_col: 0 },
    Direction { id: "diagonalDownRight", label: "Diagonal ↘", d_row: 1, d_col: 1 },
    Direction { id: "diagonalUpRight", label: "Diagonal ↗", d_row: -1, d_col: 1 },
    Direction { id: "horizontalReverse", label: "Horizontal ←", d_row: 0, d_col: -1 },
    Direction { id: "verticalReverse", label: "Vertical ↑", d_row: -1, d_col: 0 },
    Direction { id: "diagonalUpLeft", label: "Diagonal ↖", d_row: -1, d_col: -1 },
    Direction { id: "diagonalDownLeft", label: "Diagonal ↙", d_row: 1, d_col: -1 },
];

impl Direction {
    /// Look a direction up by its stable id.
    #[must_use]
    pub fn from_id(id: &str) -> Option<&'static Direction> {
        DIRECTIONS.iter().find(|d| d.id == id)
    }

    /// Look a direction up by its unit delta. `(0, 0)` and non-unit deltas have no direction.
    #[must_use]
    pub fn from_delta(d_row: isize, d_col: isize) -> Option<&'static Direction> {
        DIRECTIONS.iter().find(|d| d.d_row == d_row && d.d_col == d_col)
    }

    fn index(&self) -> usize {
        DIRECTIONS.iter().position(|d| d.id == self.id).unwrap_or(0)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl Serialize for Direction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id)
    }
}

/// Which catalog directions the generator may use, keyed by direction id.
///
/// Storage is one flag per catalog slot, so iteration order is always catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnabledDirections {
    flags: [bool; NUM_DIRECTIONS],
}

impl Default for EnabledDirections {
    fn default() -> Self {
        Self::all()
    }
}

impl EnabledDirections {
    /// Every direction enabled.
    #[must_use]
    pub fn all() -> Self {
        Self { flags: [true; NUM_DIRECTIONS] }
    }

    /// Every direction disabled.
    #[must_use]
    pub fn none() -> Self {
        Self { flags: [false; NUM_DIRECTIONS] }
    }

    /// Build a set with exactly the given ids enabled.
    ///
    /// # Errors
    ///
    /// Returns [`WordSearchError::UnknownDirection`] for the first id not in the catalog.
    pub fn from_ids<I, S>(ids: I) -> Result<Self, WordSearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::none();
        for id in ids {
            let id = id.as_ref();
            let dir = Direction::from_id(id)
                .ok_or_else(|| WordSearchError::UnknownDirection { id: id.to_string() })?;
            set.set(dir, true);
        }
        Ok(set)
    }

    pub fn set(&mut self, direction: &Direction, enabled: bool) {
        self.flags[direction.index()] = enabled;
    }

    #[must_use]
    pub fn is_enabled(&self, direction: &Direction) -> bool {
        self.flags[direction.index()]
    }

    /// Flip one direction by id.
    ///
    /// # Errors
    ///
    /// Returns [`WordSearchError::UnknownDirection`] if `id` is not in the catalog.
    pub fn toggle(&mut self, id: &str) -> Result<bool, WordSearchError> {
        let dir = Direction::from_id(id)
            .ok_or_else(|| WordSearchError::UnknownDirection { id: id.to_string() })?;
        let idx = dir.index();
        self.flags[idx] = !self.flags[idx];
        Ok(self.flags[idx])
    }

    /// "Check all" / "Uncheck all": if everything is on, turn everything off; otherwise turn
    /// everything on.
    pub fn toggle_all(&mut self) {
        let target = !self.all_enabled();
        self.flags = [target; NUM_DIRECTIONS];
    }

    #[must_use]
    pub fn all_enabled(&self) -> bool {
        self.flags.iter().all(|&f| f)
    }

    #[must_use]
    pub fn any_enabled(&self) -> bool {
        self.flags.iter().any(|&f| f)
    }

    /// The enabled directions, in catalog order.
    #[must_use]
    pub fn enabled(&self) -> Vec<&'static Direction> {
        DIRECTIONS
            .iter()
            .zip(self.flags)
            .filter_map(|(d, on)| on.then_some(d))
            .collect()
    }

    /// `(direction, enabled)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Direction, bool)> + '_ {
        DIRECTIONS.iter().zip(self.flags.iter().copied())
    }
}

impl Serialize for EnabledDirections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(NUM_DIRECTIONS))?;
        for (dir, on) in self.iter() {
            map.serialize_entry(dir.id, &on)?;
        }
        map.end()
    }
}
