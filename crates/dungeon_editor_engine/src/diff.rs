//! Submission of an editing session.

use serde::{Deserialize, Serialize};

use crate::{Coord, EditorResult, Grid, Layer, LayerStatus, SpawnSet};

/// Flattened layer as the map update endpoint expects it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    pub row: i32,
    pub col: i32,
    pub z_index: i32,
    pub tile_template_id: Option<i64>,
    pub color: String,
    pub background_color: String,
    pub character: String,
    pub state: String,
    pub script: String,
    pub name: String,
    pub animate_random: bool,
    pub animate_period: Option<i32>,
    pub animate_characters: String,
    pub animate_colors: String,
    pub animate_background_colors: String,
}

impl TileRecord {
    pub fn new(coord: Coord, layer: &Layer) -> Self {
        let a = &layer.attributes;
        Self {
            row: coord.row,
            col: coord.col,
            z_index: layer.z_index,
            tile_template_id: a.tile_template_id,
            color: a.color.clone(),
            background_color: a.background_color.clone(),
            character: a.character.clone(),
            state: a.state.clone(),
            script: a.script.clone(),
            name: a.name.clone(),
            animate_random: a.animate_random,
            animate_period: a.animate_period,
            animate_characters: a.animate_characters.clone(),
            animate_colors: a.animate_colors.clone(),
            animate_background_colors: a.animate_background_colors.clone(),
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

/// Everything an editing session changed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapDiff {
    pub additions: Vec<TileRecord>,
    pub changes: Vec<TileRecord>,
    pub deletions: Vec<TileRecord>,
    pub spawn_tiles: Vec<[i32; 2]>,
}

impl MapDiff {
    /// Walks the grid and sorts every layer into its change set by status.
    /// Untouched layers and placeholders are left out.
    pub fn collect(grid: &Grid, spawns: &SpawnSet) -> Self {
        let mut diff = MapDiff {
            spawn_tiles: spawns.to_pairs(),
            ..Default::default()
        };
        for (coord, layer) in grid.layers() {
            if layer.is_placeholder() {
                continue;
            }
            let target = match layer.status() {
                LayerStatus::Unchanged => continue,
                LayerStatus::New => &mut diff.additions,
                LayerStatus::Changed => &mut diff.changes,
                LayerStatus::Deleted => &mut diff.deletions,
            };
            target.push(TileRecord::new(coord, layer));
        }
        diff
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.changes.is_empty() && self.deletions.is_empty()
    }

    /// Encodes the four hidden form fields.
    pub fn to_form_payload(&self) -> EditorResult<FormPayload> {
        Ok(FormPayload {
            map_tile_additions: serde_json::to_string(&self.additions)?,
            map_tile_changes: serde_json::to_string(&self.changes)?,
            map_tile_deletions: serde_json::to_string(&self.deletions)?,
            map_spawn_tiles: serde_json::to_string(&self.spawn_tiles)?,
        })
    }
}

/// Hidden field values injected into the level form on submit. Each field
/// holds a JSON document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPayload {
    pub map_tile_additions: String,
    pub map_tile_changes: String,
    pub map_tile_deletions: String,
    pub map_spawn_tiles: String,
}
