//! Tests for the erase tool

use dungeon_editor_engine::{Coord, LayerStatus, Modifiers, PointerButton, Tool};

use super::helpers::*;

const AT: Coord = Coord::new(1, 1);

fn deleted_count(session: &dungeon_editor_engine::EditSession) -> usize {
    session.diff().deletions.len()
}

/// Level with two stacked tiles at (1, 1), viewing z-index 1 with the eraser
fn stacked_session() -> dungeon_editor_engine::EditSession {
    let mut session = create_level_session(3, 3, vec![tile(1, 1, 0, &floor()), tile(1, 1, 1, &wall())]);
    session.set_viewport_z(1);
    session.select_tool(Tool::TileErase);
    session
}

#[test]
fn test_erase_removes_top_layer() {
    let mut session = stacked_session();
    let touched = click(&mut session, 1, 1);

    assert_eq!(touched, vec![AT]);
    assert_eq!(status_at(&session, 1, 1, 1), Some(LayerStatus::Deleted));
    assert_eq!(status_at(&session, 1, 1, 0), Some(LayerStatus::Unchanged));
    assert_eq!(character_at(&session, 1, 1), ".");
}

#[test]
fn test_revealed_layer_is_not_erased_in_same_drag() {
    let mut session = stacked_session();
    session.pointer_down(AT, PointerButton::Primary, Modifiers::NONE);
    session.pointer_move(AT, Modifiers::NONE);
    session.pointer_leave();
    session.pointer_move(AT, Modifiers::NONE);

    assert_eq!(deleted_count(&session), 1);
    assert_eq!(character_at(&session, 1, 1), ".");
}

#[test]
fn test_next_press_erases_revealed_layer() {
    let mut session = stacked_session();
    click(&mut session, 1, 1);
    click(&mut session, 1, 1);

    assert_eq!(deleted_count(&session), 2);
    assert_eq!(character_at(&session, 1, 1), "");
}

#[test]
fn test_erase_blank_cell_is_noop() {
    let mut session = stacked_session();
    assert!(click(&mut session, 0, 0).is_empty());
    assert_eq!(deleted_count(&session), 0);
}

#[test]
fn test_drag_erases_each_cell() {
    let mut session = create_level_session(3, 1, (0..3).map(|col| tile(0, col, 0, &wall())).collect());
    session.select_tool(Tool::TileErase);
    drag(&mut session, (0, 0), &[(0, 1), (0, 2)]);

    assert_eq!(deleted_count(&session), 3);
}

#[test]
fn test_erase_outside_grid_is_noop() {
    let mut session = stacked_session();
    let touched = session.pointer_down(Coord::new(-1, 1), PointerButton::Primary, Modifiers::NONE);
    assert!(touched.is_empty());
}
