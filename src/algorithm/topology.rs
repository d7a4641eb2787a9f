//! Structural checks over the passage graph
//!
//! These functions read walls only and never touch visited flags, so they
//! can run at any point between carving and solving.

use bitvec::prelude::*;
use std::collections::VecDeque;

use crate::spatial::{Direction, Grid, Position};

// Each internal wall pair is owned by the cell above or to the left of it
const FORWARD: [Direction; 2] = [Direction::Down, Direction::Right];

/// Summary of a grid's passage structure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeStats {
    /// Total number of cells
    pub cells: usize,
    /// Open internal wall pairs
    pub passages: usize,
    /// Cells with exactly one open internal side
    pub dead_ends: usize,
    /// Cells reachable from the entrance
    pub reachable: usize,
    /// Adjacent pairs whose facing walls disagree
    pub asymmetric_walls: usize,
}

impl MazeStats {
    /// Check for a spanning tree with consistent walls
    pub const fn is_perfect(&self) -> bool {
        self.asymmetric_walls == 0
            && self.reachable == self.cells
            && self.passages + 1 == self.cells
    }
}

/// Count internal wall pairs that are open on both sides
///
/// Entrance and exit openings are on the boundary and are not counted.
pub fn count_passages(grid: &Grid) -> usize {
    grid.positions()
        .flat_map(|position| FORWARD.map(|direction| (position, direction)))
        .filter(|&(position, direction)| {
            grid.neighbor(position, direction).is_some_and(|next| {
                !grid.has_wall(position, direction) && !grid.has_wall(next, direction.opposite())
            })
        })
        .count()
}

/// List adjacent pairs where one side has a wall and the other does not
///
/// Each pair is reported once, from the cell above or to the left.
pub fn wall_asymmetries(grid: &Grid) -> Vec<(Position, Direction)> {
    grid.positions()
        .flat_map(|position| FORWARD.map(|direction| (position, direction)))
        .filter(|&(position, direction)| {
            grid.neighbor(position, direction).is_some_and(|next| {
                grid.has_wall(position, direction) != grid.has_wall(next, direction.opposite())
            })
        })
        .collect()
}

/// Cells reachable from `start` through open walls, indexed row-major
///
/// Movement follows the wall flag of the cell being left, matching the
/// solver. A `start` outside the grid yields an empty set.
pub fn reachable_from(grid: &Grid, start: Position) -> BitVec {
    let mut seen = bitvec![0; grid.cell_count()];
    let Some(start_index) = grid.index_of(start) else {
        return seen;
    };

    seen.set(start_index, true);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for (direction, next) in grid.neighbors(current) {
            if grid.has_wall(current, direction) {
                continue;
            }
            let Some(index) = grid.index_of(next) else {
                continue;
            };
            if seen.get(index).as_deref() == Some(&false) {
                seen.set(index, true);
                queue.push_back(next);
            }
        }
    }

    seen
}

/// Check that a path steps between adjacent cells through open walls only
///
/// An empty path is not considered open.
pub fn path_is_open(grid: &Grid, path: &[Position]) -> bool {
    if path.iter().any(|&position| !grid.contains(position)) {
        return false;
    }
    !path.is_empty()
        && path.windows(2).all(|step| match step {
            [from, to] => Direction::between(*from, *to).is_some_and(|direction| {
                !grid.has_wall(*from, direction) && !grid.has_wall(*to, direction.opposite())
            }),
            _ => false,
        })
}

/// Number of open internal sides of a cell
pub fn open_passages(grid: &Grid, position: Position) -> usize {
    grid.neighbors(position)
        .filter(|&(direction, _)| !grid.has_wall(position, direction))
        .count()
}

/// Gather passage statistics for a grid
pub fn analyze(grid: &Grid) -> MazeStats {
    let dead_ends = grid
        .positions()
        .filter(|&position| open_passages(grid, position) == 1)
        .count();

    MazeStats {
        cells: grid.cell_count(),
        passages: count_passages(grid),
        dead_ends,
        reachable: reachable_from(grid, grid.entrance()).count_ones(),
        asymmetric_walls: wall_asymmetries(grid).len(),
    }
}
