//! Tests for text cursor movement

use dungeon_editor_engine::{
    brushes::{next_cursor, previous_cursor},
    Coord,
};

#[test]
fn test_advance_within_row() {
    assert_eq!(next_cursor(Coord::new(0, 1), 5, 2), Coord::new(0, 2));
}

#[test]
fn test_wrap_to_next_row() {
    assert_eq!(next_cursor(Coord::new(0, 4), 5, 2), Coord::new(1, 0));
}

#[test]
fn test_wrap_to_first_row() {
    assert_eq!(next_cursor(Coord::new(1, 4), 5, 2), Coord::new(0, 0));
}

#[test]
fn test_previous_wraps_backwards() {
    assert_eq!(previous_cursor(Coord::new(1, 0), 5, 2), Coord::new(0, 4));
    assert_eq!(previous_cursor(Coord::new(0, 0), 5, 2), Coord::new(1, 4));
}

#[test]
fn test_full_loop_returns_to_start() {
    let start = Coord::new(1, 3);
    let mut cursor = start;
    for _ in 0..10 {
        cursor = next_cursor(cursor, 5, 2);
    }
    assert_eq!(cursor, start);
    for _ in 0..10 {
        cursor = previous_cursor(cursor, 5, 2);
    }
    assert_eq!(cursor, start);
}
