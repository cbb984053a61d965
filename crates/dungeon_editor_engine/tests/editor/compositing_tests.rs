//! Tests for layer visibility and z-index navigation

use dungeon_editor_engine::{Coord, Grid, TileAttributes, ViewMode, Visibility};

use super::helpers::*;

const AT: Coord = Coord::new(0, 0);

#[test]
fn test_real_tile_beats_placeholder_on_viewport() {
    let mut grid = Grid::new(2, 2).unwrap();
    grid.set_layer_attributes(AT, 1, TileAttributes::custom("a", "", ""));
    grid.get_or_create_layer(AT, 3);

    let visible = grid.visible_layer(AT, 3, ViewMode::UpToCurrent);
    assert_eq!(visible.z_index(), 1);
    assert!(matches!(visible, Visibility::Tile(_)));

    let visible = grid.visible_layer(AT, 3, ViewMode::OnlyCurrent);
    assert_eq!(visible, Visibility::Blank { z_index: 3 });
}

#[test]
fn test_layers_above_viewport_are_hidden() {
    let mut grid = Grid::new(2, 2).unwrap();
    grid.set_layer_attributes(AT, 0, TileAttributes::custom("low", "", ""));
    grid.set_layer_attributes(AT, 5, TileAttributes::custom("high", "", ""));

    let shown = |z| grid.visible_layer(AT, z, ViewMode::UpToCurrent).layer().map(|l| l.attributes.character.clone());
    assert_eq!(shown(4).as_deref(), Some("low"));
    assert_eq!(shown(5).as_deref(), Some("high"));
    assert_eq!(shown(-1), None);
}

#[test]
fn test_only_current_shows_single_z() {
    let mut session = create_level_session(2, 2, vec![tile(0, 0, 0, &floor())]);
    session.set_viewport_z(1);
    assert_eq!(character_at(&session, 0, 0), ".");

    session.toggle_view_mode();
    assert_eq!(session.view_mode(), ViewMode::OnlyCurrent);
    assert_eq!(character_at(&session, 0, 0), "");
    assert_eq!(session.visible_layer(AT).z_index(), 1);
}

#[test]
fn test_deleted_layers_are_not_visible() {
    let mut session = create_level_session(2, 2, vec![tile(0, 0, 0, &floor()), tile(0, 0, 1, &wall())]);
    session.set_viewport_z(1);
    assert_eq!(character_at(&session, 0, 0), "#");

    session.select_tool(dungeon_editor_engine::Tool::TileErase);
    click(&mut session, 0, 0);
    assert_eq!(character_at(&session, 0, 0), ".");
    assert!(layer_at(&session, 0, 0, 1).is_some_and(|l| l.is_deleted()));
}

#[test]
fn test_painting_above_bounds_extends_them() {
    let mut session = create_test_session(2, 2);
    session.set_viewport_z(4);
    click(&mut session, 0, 0);
    session.set_viewport_z(-2);
    click(&mut session, 1, 1);

    let bounds = session.z_bounds();
    assert_eq!((bounds.lower, bounds.upper), (-2, 4));

    session.set_viewport_z(0);
    session.viewport_to_upper_bound();
    assert_eq!(session.viewport_z(), 4);
    session.viewport_to_lower_bound();
    assert_eq!(session.viewport_z(), -2);
}

#[test]
fn test_level_bounds_are_loaded() {
    let level = dungeon_editor_engine::LevelData {
        width: 2,
        height: 2,
        z_index_lower: -3,
        z_index_upper: 2,
        tiles: vec![tile(1, 1, 7, &floor())],
        ..Default::default()
    };
    let session = dungeon_editor_engine::EditSession::from_level(level).unwrap();
    let bounds = session.z_bounds();
    assert_eq!((bounds.lower, bounds.upper), (-3, 7));
}

#[test]
fn test_placeholders_do_not_survive_painting() {
    let mut session = create_test_session(3, 3);
    session.select_tool(dungeon_editor_engine::Tool::TileEdit);
    click(&mut session, 1, 1);
    session.cancel_tile_edit();

    assert!(layer_at(&session, 1, 1, 0).is_none());
    assert!(session.grid().layers().all(|(_, layer)| !layer.is_placeholder()));
}
