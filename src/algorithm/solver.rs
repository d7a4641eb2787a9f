//! Depth-first search from the entrance to the exit
//!
//! Directions are tried in the fixed order up, down, left, right, and the
//! first route that reaches the exit wins. The result is therefore not a
//! shortest path, only the one this enumeration order discovers. The search
//! only trusts the wall flag on the cell it is leaving, which is sufficient
//! for any grid whose walls were changed in pairs.

use tracing::debug;

use crate::io::surface::{DrawingSurface, NoopSurface};
use crate::spatial::{Direction, Grid, Position};

/// One suspended cell on the search stack
struct SearchFrame {
    position: Position,
    /// Index of the next direction to try in `Direction::ALL`
    cursor: usize,
}

impl SearchFrame {
    const fn new(position: Position) -> Self {
        Self {
            position,
            cursor: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction = Direction::ALL.get(self.cursor).copied();
        if direction.is_some() {
            self.cursor += 1;
        }
        direction
    }
}

/// Check whether the exit is reachable from the entrance
///
/// Marks every cell the search enters as visited. Unreachable exits are a
/// normal `false`, not an error.
pub fn solve(grid: &mut Grid) -> bool {
    solve_with_surface(grid, &mut NoopSurface)
}

/// Check whether the exit is reachable, animating the search
pub fn solve_with_surface<S: DrawingSurface + ?Sized>(grid: &mut Grid, surface: &mut S) -> bool {
    find_path(grid, surface).is_some()
}

/// Search for a route and return it, entrance first and exit last
///
/// Every step into a new cell draws a forward segment and refreshes. When a
/// branch is exhausted, the segment back to its parent is drawn as undone.
/// Cells already marked visited are never entered, so callers that reuse a
/// grid must clear visited flags first.
pub fn find_path<S: DrawingSurface + ?Sized>(
    grid: &mut Grid,
    surface: &mut S,
) -> Option<Vec<Position>> {
    let start = grid.entrance();
    let target = grid.exit();

    surface.refresh();
    grid.mark_visited(start);
    if start == target {
        return Some(vec![start]);
    }

    let mut stack = vec![SearchFrame::new(start)];
    let mut explored = 1_usize;

    while let Some(frame) = stack.last_mut() {
        let current = frame.position;

        let Some(direction) = frame.next_direction() else {
            stack.pop();
            if let Some(parent) = stack.last() {
                surface.draw_path_segment(current, parent.position, false);
            }
            continue;
        };

        let Some(next) = grid.neighbor(current, direction) else {
            continue;
        };
        if grid.is_visited(next) || grid.has_wall(current, direction) {
            continue;
        }

        surface.draw_path_segment(current, next, true);
        surface.refresh();
        grid.mark_visited(next);
        explored += 1;

        if next == target {
            let mut path: Vec<Position> = stack.iter().map(|frame| frame.position).collect();
            path.push(next);
            debug!(explored, length = path.len(), "reached exit");
            return Some(path);
        }

        stack.push(SearchFrame::new(next));
    }

    debug!(explored, "exit unreachable");
    None
}
