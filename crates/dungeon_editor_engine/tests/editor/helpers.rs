//! Shared test helpers for edit session tests

#![allow(dead_code)]

use dungeon_editor_engine::{
    Coord, EditSession, Layer, LayerStatus, LevelData, LevelTile, Modifiers, PointerButton, TileAttributes, TileTemplate,
};

pub const FLOOR: i64 = 1;
pub const WALL: i64 = 2;
pub const STATUE: i64 = 3;

pub fn template(id: i64, name: &str, character: &str, color: &str, background_color: &str) -> TileTemplate {
    TileTemplate {
        id,
        name: name.to_string(),
        character: character.to_string(),
        color: color.to_string(),
        background_color: background_color.to_string(),
        ..Default::default()
    }
}

/// Floor, wall and a historic statue
pub fn test_palette() -> Vec<TileTemplate> {
    let mut statue = template(STATUE, "Statue", "&", "#aaa", "");
    statue.historic = true;
    vec![template(FLOOR, "Floor", ".", "#888", "#111"), template(WALL, "Wall", "#", "#fff", "#333"), statue]
}

pub fn tile(row: i32, col: i32, z_index: i32, template: &TileTemplate) -> LevelTile {
    LevelTile {
        row,
        col,
        z_index,
        attributes: template.attributes(),
    }
}

/// Empty level of the given size with the test palette
pub fn create_test_session(width: i32, height: i32) -> EditSession {
    EditSession::new(width, height, test_palette()).unwrap()
}

/// Level of the given size with preloaded tiles
pub fn create_level_session(width: i32, height: i32, tiles: Vec<LevelTile>) -> EditSession {
    let level = LevelData {
        width,
        height,
        tiles,
        palette: test_palette(),
        ..Default::default()
    };
    EditSession::from_level(level).unwrap()
}

pub fn floor() -> TileTemplate {
    test_palette().remove(0)
}

pub fn wall() -> TileTemplate {
    test_palette().remove(1)
}

/// Single primary click without modifiers
pub fn click(session: &mut EditSession, row: i32, col: i32) -> Vec<Coord> {
    let touched = session.pointer_down(Coord::new(row, col), PointerButton::Primary, Modifiers::NONE);
    session.pointer_up();
    touched
}

/// Press at `from`, drag through `path`, release
pub fn drag(session: &mut EditSession, from: (i32, i32), path: &[(i32, i32)]) {
    session.pointer_down(from.into(), PointerButton::Primary, Modifiers::NONE);
    for &step in path {
        session.pointer_move(step.into(), Modifiers::NONE);
    }
    session.pointer_up();
}

pub fn layer_at(session: &EditSession, row: i32, col: i32, z: i32) -> Option<&Layer> {
    session.grid().get_layer(Coord::new(row, col), z)
}

pub fn attributes_at(session: &EditSession, row: i32, col: i32, z: i32) -> TileAttributes {
    layer_at(session, row, col, z).map(|l| l.attributes.clone()).unwrap_or_default()
}

pub fn status_at(session: &EditSession, row: i32, col: i32, z: i32) -> Option<LayerStatus> {
    layer_at(session, row, col, z).map(Layer::status)
}

pub fn character_at(session: &EditSession, row: i32, col: i32) -> String {
    session.visible_layer(Coord::new(row, col)).layer().map(|l| l.attributes.character.clone()).unwrap_or_default()
}
