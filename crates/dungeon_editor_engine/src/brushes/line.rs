//! Line rasterization
//!
//! Lines are interpolated linearly over `max(|Δrow|, |Δcol|)` steps with each
//! step rounded half up. Rounding half up keeps lines symmetric: drawing from
//! `b` to `a` touches the same cells as drawing from `a` to `b`.

use crate::Coord;

/// Cells from `start` (exclusive) to `end` (inclusive).
///
/// Used for drag painting and shift-click lines where `start` was already
/// painted. Without a start, or when both are the same cell, only `end` is
/// returned.
pub fn coords_between(start: Option<Coord>, end: Coord) -> Vec<Coord> {
    let Some(start) = start else {
        return vec![end];
    };
    let steps = step_count(start, end);
    if steps == 0 {
        return vec![end];
    }
    (1..=steps).map(|step| interpolate(start, end, step, steps)).collect()
}

/// All cells from `a` to `b`, both ends included.
pub fn line_between(a: Coord, b: Coord) -> Vec<Coord> {
    let steps = step_count(a, b);
    if steps == 0 {
        return vec![a];
    }
    (0..=steps).map(|step| interpolate(a, b, step, steps)).collect()
}

fn step_count(a: Coord, b: Coord) -> i32 {
    (b.row - a.row).abs().max((b.col - a.col).abs())
}

fn interpolate(a: Coord, b: Coord, step: i32, steps: i32) -> Coord {
    Coord::new(
        a.row + round_half_up((b.row - a.row) * step, steps),
        a.col + round_half_up((b.col - a.col) * step, steps),
    )
}

/// `num / den` rounded half towards positive infinity, `den` must be positive.
fn round_half_up(num: i32, den: i32) -> i32 {
    (2 * num + den).div_euclid(2 * den)
}
