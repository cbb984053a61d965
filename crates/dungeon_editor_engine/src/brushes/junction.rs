//! Junction glyphs for the line draw tool
//!
//! Every line point looks at its four neighbours and picks a box-drawing
//! character that connects to the neighbouring line points.

use crate::Coord;

pub const NORTH: u8 = 8;
pub const SOUTH: u8 = 4;
pub const EAST: u8 = 2;
pub const WEST: u8 = 1;

/// Glyph per neighbour score (N=8, S=4, E=2, W=1).
pub const LINE_SCORE_MAP: [char; 16] = [
    '⋅', '╡', '╞', '═', '╥', '╗', '╔', '╦', '╨', '╝', '╚', '╩', '║', '╣', '╠', '╬',
];

/// Sums the direction bits of every neighbour of `coord` that is a line point.
pub fn junction_score<F>(coord: Coord, is_line_point: F) -> u8
where
    F: Fn(Coord) -> bool,
{
    let mut score = 0;
    if is_line_point(coord.north()) {
        score += NORTH;
    }
    if is_line_point(coord.south()) {
        score += SOUTH;
    }
    if is_line_point(coord.east()) {
        score += EAST;
    }
    if is_line_point(coord.west()) {
        score += WEST;
    }
    score
}

/// Glyph for a score. Scores above 15 can't happen, they render as `X`.
pub fn junction_glyph(score: u8) -> char {
    LINE_SCORE_MAP.get(score as usize).copied().unwrap_or('X')
}
