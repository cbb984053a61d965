//! Text cursor movement
//!
//! The cursor runs left to right, wraps to the next row at the right edge and
//! back to the first row after the last one.

use crate::Coord;

pub fn next_cursor(cursor: Coord, width: i32, height: i32) -> Coord {
    let mut row = cursor.row;
    if cursor.col + 1 >= width {
        row += 1;
    }
    Coord::new(row.rem_euclid(height), (cursor.col + 1).rem_euclid(width))
}

pub fn previous_cursor(cursor: Coord, width: i32, height: i32) -> Coord {
    let mut row = cursor.row;
    if cursor.col - 1 < 0 {
        row -= 1;
    }
    Coord::new(row.rem_euclid(height), (cursor.col - 1).rem_euclid(width))
}
