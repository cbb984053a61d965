use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{ShortlistEntry, TileAttributes, TileTemplate};

/// A tile of the level as rendered by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTile {
    pub row: i32,
    pub col: i32,
    #[serde(default)]
    pub z_index: i32,
    #[serde(flatten)]
    pub attributes: TileAttributes,
}

/// Initial state of an editing session.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelData {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<LevelTile>,
    /// `"row_col" -> enabled`
    pub spawn_locations: HashMap<String, bool>,
    pub palette: Vec<TileTemplate>,
    pub shortlist: Vec<ShortlistEntry>,
    pub z_index_lower: i32,
    pub z_index_upper: i32,
}

impl LevelData {
    pub fn from_json(json: &str) -> crate::EditorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
