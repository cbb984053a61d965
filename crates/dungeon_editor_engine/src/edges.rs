use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Coord, EditorError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    North,
    South,
    East,
    West,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::North, Edge::South, Edge::East, Edge::West];

    pub fn id(&self) -> &'static str {
        match self {
            Edge::North => "north",
            Edge::South => "south",
            Edge::East => "east",
            Edge::West => "west",
        }
    }

    /// Whether `coord` lies on the one cell wide ring of this side just outside
    /// a `width` x `height` level. Corners belong to no side.
    pub fn contains(&self, coord: Coord, width: i32, height: i32) -> bool {
        let in_cols = (0..width).contains(&coord.col);
        let in_rows = (0..height).contains(&coord.row);
        match self {
            Edge::North => coord.row == -1 && in_cols,
            Edge::South => coord.row == height && in_cols,
            Edge::East => coord.col == width && in_rows,
            Edge::West => coord.col == -1 && in_rows,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Edge {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Edge::ALL
            .iter()
            .copied()
            .find(|edge| edge.id() == s)
            .ok_or_else(|| EditorError::UnknownEdge { name: s.to_string() })
    }
}

/// A tile of an adjacent level shown next to the level border.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeTile {
    pub row: i32,
    pub col: i32,
    pub character: String,
    pub color: String,
    pub background_color: String,
}

impl EdgeTile {
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

/// Edge tiles per side. Read only, edge cells can't be painted.
#[derive(Clone, Debug, Default)]
pub struct EdgeTiles {
    sides: HashMap<Edge, Vec<EdgeTile>>,
}

impl EdgeTiles {
    /// Replaces a side, keeping only tiles that actually lie on it.
    pub fn set(&mut self, edge: Edge, tiles: Vec<EdgeTile>, width: i32, height: i32) {
        let tiles = tiles.into_iter().filter(|t| edge.contains(t.coord(), width, height)).collect();
        self.sides.insert(edge, tiles);
    }

    pub fn clear(&mut self, edge: Edge) {
        self.sides.remove(&edge);
    }

    pub fn side(&self, edge: Edge) -> &[EdgeTile] {
        self.sides.get(&edge).map_or(&[], Vec::as_slice)
    }

    pub fn tile_at(&self, coord: Coord) -> Option<&EdgeTile> {
        self.sides.values().flatten().find(|t| t.coord() == coord)
    }
}
