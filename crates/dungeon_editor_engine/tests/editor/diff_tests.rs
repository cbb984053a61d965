//! Tests for the submission diff and payload

use std::collections::HashSet;

use dungeon_editor_engine::{ColorPair, LayerStatus, TileRecord, Tool};
use pretty_assertions::assert_eq;

use super::helpers::*;

fn slots(records: &[TileRecord]) -> HashSet<(i32, i32, i32)> {
    records.iter().map(|r| (r.row, r.col, r.z_index)).collect()
}

#[test]
fn test_untouched_level_has_empty_diff() {
    let session = create_level_session(3, 3, vec![tile(0, 0, 0, &floor())]);
    assert!(session.diff().is_empty());
}

#[test]
fn test_diff_sorts_layers_by_status() {
    let mut session = create_level_session(4, 4, vec![tile(0, 0, 0, &floor()), tile(1, 1, 0, &floor())]);

    // Two new cells
    click(&mut session, 3, 0);
    click(&mut session, 3, 1);

    // One recolored level tile
    session.select_tool(Tool::ColorPainting);
    session.set_colors(ColorPair::new("red", ""));
    click(&mut session, 0, 0);

    // One erased level tile
    session.select_tool(Tool::TileErase);
    click(&mut session, 1, 1);

    let diff = session.diff();
    assert_eq!(diff.additions.len(), 2);
    assert_eq!(diff.changes.len(), 1);
    assert_eq!(diff.deletions.len(), 1);

    let (additions, changes, deletions) = (slots(&diff.additions), slots(&diff.changes), slots(&diff.deletions));
    assert!(additions.is_disjoint(&changes));
    assert!(additions.is_disjoint(&deletions));
    assert!(changes.is_disjoint(&deletions));
    assert_eq!(diff.changes[0].color, "red");
    assert_eq!(diff.deletions[0].coord(), dungeon_editor_engine::Coord::new(1, 1));
}

#[test]
fn test_erasing_new_tile_drops_it() {
    let mut session = create_test_session(3, 3);
    click(&mut session, 0, 0);
    session.select_tool(Tool::TileErase);
    click(&mut session, 0, 0);

    assert!(session.diff().is_empty());
}

#[test]
fn test_repainting_erased_level_tile_is_a_change() {
    let mut session = create_level_session(3, 3, vec![tile(0, 0, 0, &floor())]);
    session.select_tool(Tool::TileErase);
    click(&mut session, 0, 0);
    session.select_tool(Tool::TilePainting);
    session.select_template(WALL).unwrap();
    click(&mut session, 0, 0);

    assert_eq!(status_at(&session, 0, 0, 0), Some(LayerStatus::Changed));
    let diff = session.diff();
    assert!(diff.deletions.is_empty());
    assert_eq!(diff.changes.len(), 1);
    assert_eq!(diff.changes[0].character, "#");
}

#[test]
fn test_spawn_toggles_serialize_enabled_cells() {
    let mut session = create_test_session(5, 5);
    session.select_tool(Tool::SpawnLocation);
    click(&mut session, 2, 3);
    click(&mut session, 1, 1);
    click(&mut session, 2, 3);

    let payload = session.submit().unwrap();
    assert_eq!(payload.map_spawn_tiles, "[[1,1]]");
}

#[test]
fn test_spawn_click_twice_on_same_cell() {
    let mut session = create_test_session(5, 5);
    session.select_tool(Tool::SpawnLocation);
    click(&mut session, 2, 3);
    assert_eq!(session.diff().spawn_tiles, vec![[2, 3]]);
    click(&mut session, 2, 3);

    assert!(session.diff().spawn_tiles.is_empty());
}

#[test]
fn test_spawn_drag_inside_cell_toggles_once() {
    let mut session = create_test_session(5, 5);
    session.select_tool(Tool::SpawnLocation);
    drag(&mut session, (2, 3), &[(2, 3), (2, 3)]);

    assert_eq!(session.diff().spawn_tiles, vec![[2, 3]]);
}

#[test]
fn test_spawns_from_level_are_kept() {
    let mut level = dungeon_editor_engine::LevelData {
        width: 3,
        height: 3,
        ..Default::default()
    };
    level.spawn_locations.insert("0_2".to_string(), true);
    level.spawn_locations.insert("1_2".to_string(), false);
    let session = dungeon_editor_engine::EditSession::from_level(level).unwrap();

    assert_eq!(session.diff().spawn_tiles, vec![[0, 2]]);
}

#[test]
fn test_payload_fields_are_json() {
    let mut session = create_test_session(3, 3);
    session.set_viewport_z(2);
    click(&mut session, 1, 2);

    let payload = session.submit().unwrap();
    let additions: Vec<TileRecord> = serde_json::from_str(&payload.map_tile_additions).unwrap();
    assert_eq!(additions.len(), 1);
    assert_eq!((additions[0].row, additions[0].col, additions[0].z_index), (1, 2, 2));
    assert_eq!(additions[0].tile_template_id, Some(FLOOR));
    assert_eq!(payload.map_tile_changes, "[]");
    assert_eq!(payload.map_tile_deletions, "[]");
    assert_eq!(payload.map_spawn_tiles, "[]");
}
