//! Tests for line interpolation

use dungeon_editor_engine::{
    brushes::{coords_between, line_between},
    Coord,
};

/// Helper to build coordinates from `(row, col)` pairs
fn coords(pairs: &[(i32, i32)]) -> Vec<Coord> {
    pairs.iter().copied().map(Coord::from).collect()
}

// ============================================================================
// line_between
// ============================================================================

#[test]
fn test_diagonal_line() {
    let points = line_between(Coord::new(0, 0), Coord::new(3, 3));
    assert_eq!(points, coords(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
}

#[test]
fn test_reverse_line_touches_same_cells() {
    let a = Coord::new(0, 0);
    let b = Coord::new(3, 3);
    let mut reversed = line_between(b, a);
    reversed.reverse();
    assert_eq!(line_between(a, b), reversed);
}

#[test]
fn test_shallow_lines_are_symmetric() {
    let pairs = [((0, 0), (1, 4)), ((2, 7), (5, 0)), ((0, 0), (3, 2)), ((4, 1), (0, 6))];
    for (a, b) in pairs {
        let (a, b) = (Coord::from(a), Coord::from(b));
        let mut reversed = line_between(b, a);
        reversed.reverse();
        assert_eq!(line_between(a, b), reversed, "{a} -> {b}");
    }
}

#[test]
fn test_line_has_no_gaps() {
    let points = line_between(Coord::new(0, 0), Coord::new(2, 6));
    assert_eq!(points.len(), 7);
    for pair in points.windows(2) {
        assert!((pair[1].row - pair[0].row).abs() <= 1);
        assert_eq!(pair[1].col - pair[0].col, 1);
    }
}

#[test]
fn test_single_point() {
    assert_eq!(line_between(Coord::new(3, 3), Coord::new(3, 3)), coords(&[(3, 3)]));
}

// ============================================================================
// coords_between
// ============================================================================

#[test]
fn test_coords_between_excludes_start() {
    let points = coords_between(Some(Coord::new(0, 0)), Coord::new(0, 3));
    assert_eq!(points, coords(&[(0, 1), (0, 2), (0, 3)]));
}

#[test]
fn test_coords_between_without_start() {
    assert_eq!(coords_between(None, Coord::new(2, 1)), coords(&[(2, 1)]));
}

#[test]
fn test_coords_between_same_cell() {
    assert_eq!(coords_between(Some(Coord::new(2, 1)), Coord::new(2, 1)), coords(&[(2, 1)]));
}

#[test]
fn test_coords_between_skipped_cells_on_fast_drag() {
    let points = coords_between(Some(Coord::new(4, 0)), Coord::new(0, 0));
    assert_eq!(points, coords(&[(3, 0), (2, 0), (1, 0), (0, 0)]));
}
