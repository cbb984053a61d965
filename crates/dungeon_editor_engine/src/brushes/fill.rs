//! Flood fill (4-connected, stack based)

use std::collections::HashSet;

use crate::Coord;

/// Computes the region reachable from `origin` through orthogonal neighbours
/// for which `matches` holds.
///
/// Returns the cells in visiting order, each exactly once; `origin` is always
/// the first entry. The frontier is a stack, so the order is depth first but
/// only the resulting set is meaningful. Neighbours outside the
/// `width` x `height` grid are never expanded into.
pub fn flood_fill<F>(origin: Coord, width: i32, height: i32, matches: F) -> Vec<Coord>
where
    F: Fn(Coord) -> bool,
{
    let inside = |c: Coord| c.row >= 0 && c.col >= 0 && c.row < height && c.col < width;
    if !inside(origin) {
        return Vec::new();
    }

    let mut filled = Vec::new();
    let mut visited = HashSet::new();
    let mut queued = HashSet::new();
    let mut frontier = vec![origin];
    queued.insert(origin);

    while let Some(coord) = frontier.pop() {
        queued.remove(&coord);
        visited.insert(coord);
        filled.push(coord);

        for candidate in coord.adjacent() {
            if !inside(candidate) || visited.contains(&candidate) || queued.contains(&candidate) {
                continue;
            }
            if matches(candidate) {
                queued.insert(candidate);
                frontier.push(candidate);
            }
        }
    }

    filled
}
