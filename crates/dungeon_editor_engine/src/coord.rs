use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::EditorError;

/// A cell address inside a level, 0-indexed.
///
/// The textual form is `"row_col"`, which is also how spawn locations are keyed
/// in the level data.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    pub fn north(self) -> Coord {
        Coord::new(self.row - 1, self.col)
    }

    pub fn south(self) -> Coord {
        Coord::new(self.row + 1, self.col)
    }

    pub fn east(self) -> Coord {
        Coord::new(self.row, self.col + 1)
    }

    pub fn west(self) -> Coord {
        Coord::new(self.row, self.col - 1)
    }

    /// The four orthogonal neighbours, no diagonals.
    pub fn adjacent(self) -> [Coord; 4] {
        [self.south(), self.north(), self.east(), self.west()]
    }

    pub fn as_pair(self) -> [i32; 2] {
        [self.row, self.col]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.row, self.col)
    }
}

impl FromStr for Coord {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EditorError::InvalidCoordinate { value: s.to_string() };
        let (row, col) = s.split_once('_').ok_or_else(invalid)?;
        let row = row.trim().parse::<i32>().map_err(|_| invalid())?;
        let col = col.trim().parse::<i32>().map_err(|_| invalid())?;
        Ok(Coord::new(row, col))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}
