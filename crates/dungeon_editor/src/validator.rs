//! Offline stand-ins for the server side collaborators.

use std::{fs, path::PathBuf};

use dungeon_editor_engine::{
    remote::{EdgeTileSource, FieldError, TileValidator, ValidationRequest, ValidationResponse},
    state_vars::{self, StateVariable},
    Edge, EdgeTile, EditorError, EditorResult, LevelData,
};

/// Checks a tile edit locally and normalizes its state the way the server does.
pub struct OfflineValidator;

impl TileValidator for OfflineValidator {
    fn validate(&self, request: &ValidationRequest) -> EditorResult<ValidationResponse> {
        let mut errors = Vec::new();
        let mut rows = Vec::new();
        for (name, value) in request.state_variables.iter().zip(&request.state_values) {
            let row = StateVariable::new(name.trim(), value.trim());
            if row.name.is_empty() {
                if !row.value.is_empty() {
                    errors.push(FieldError::new("state_variables", format!("value '{}' has no variable", row.value)));
                }
                continue;
            }
            rows.push(row);
        }
        if request.animate_period.is_some_and(|period| period <= 0) {
            errors.push(FieldError::new("animate_period", "must be positive"));
        }

        if errors.is_empty() {
            Ok(ValidationResponse::accepted(state_vars::format(&rows)))
        } else {
            Ok(ValidationResponse::rejected(errors))
        }
    }
}

/// Reads neighbouring levels from `<dir>/<level_number>.json` and takes the
/// border that faces this level.
pub struct LevelFileEdges {
    pub dir: PathBuf,
    pub width: i32,
    pub height: i32,
}

impl EdgeTileSource for LevelFileEdges {
    fn fetch(&self, edge: Edge, level_number: i32) -> EditorResult<Vec<EdgeTile>> {
        let path = self.dir.join(format!("{level_number}.json"));
        let text = fs::read_to_string(&path).map_err(|err| EditorError::Remote(format!("{}: {err}", path.display())))?;
        let level = LevelData::from_json(&text)?;

        let tiles = level
            .tiles
            .into_iter()
            .filter_map(|tile| {
                let (row, col) = match edge {
                    Edge::North if tile.row == level.height - 1 => (-1, tile.col),
                    Edge::South if tile.row == 0 => (self.height, tile.col),
                    Edge::East if tile.col == 0 => (tile.row, self.width),
                    Edge::West if tile.col == level.width - 1 => (tile.row, -1),
                    _ => return None,
                };
                Some(EdgeTile {
                    row,
                    col,
                    character: tile.attributes.character,
                    color: tile.attributes.color,
                    background_color: tile.attributes.background_color,
                })
            })
            .collect();
        Ok(tiles)
    }
}
