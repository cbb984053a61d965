use std::collections::HashMap;

use crate::{Coord, EditorResult};

/// Player spawn locations of the level.
///
/// Map level, independent of the tile layers. Entries toggled off are kept as
/// `false` so the set mirrors what the level sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpawnSet {
    locations: HashMap<Coord, bool>,
}

impl SpawnSet {
    /// Builds the set from the `"row_col" -> bool` map of the level data.
    pub fn from_keys<'a>(entries: impl IntoIterator<Item = (&'a String, &'a bool)>) -> EditorResult<Self> {
        let mut locations = HashMap::new();
        for (key, enabled) in entries {
            locations.insert(key.parse::<Coord>()?, *enabled);
        }
        Ok(Self { locations })
    }

    pub fn is_spawn(&self, coord: Coord) -> bool {
        self.locations.get(&coord).copied().unwrap_or(false)
    }

    /// Flips the flag of `coord` and returns the new value.
    pub fn toggle(&mut self, coord: Coord) -> bool {
        let flag = self.locations.entry(coord).or_insert(false);
        *flag = !*flag;
        *flag
    }

    /// Enabled locations sorted by row, then column.
    pub fn enabled(&self) -> Vec<Coord> {
        let mut coords: Vec<Coord> = self.locations.iter().filter(|(_, enabled)| **enabled).map(|(coord, _)| *coord).collect();
        coords.sort();
        coords
    }

    /// Submission form: `[row, col]` pairs of every enabled location.
    pub fn to_pairs(&self) -> Vec<[i32; 2]> {
        self.enabled().into_iter().map(Coord::as_pair).collect()
    }
}
