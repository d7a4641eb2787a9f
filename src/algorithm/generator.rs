//! Randomized backtracker that carves a perfect maze
//!
//! The carve is a depth-first walk from the entrance cell. Each cell visits
//! its in-bounds neighbors in a shuffled order, knocking down the wall pair
//! to every neighbor not yet reached. Because every cell is entered exactly
//! once through exactly one removed wall pair, the passages form a spanning
//! tree: `rows * cols - 1` internal openings and one route between any two
//! cells. The walk keeps its own stack, so depth is limited by heap rather
//! than by the thread's call stack.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::io::surface::{DrawingSurface, NoopSurface};
use crate::spatial::{Direction, Grid, Position};

/// One suspended cell on the carve stack
struct CarveFrame {
    position: Position,
    /// Remaining directions, consumed from the back
    pending: Vec<Direction>,
}

impl CarveFrame {
    fn new<R: Rng + ?Sized>(grid: &Grid, position: Position, rng: &mut R) -> Self {
        let mut pending: Vec<Direction> = grid
            .neighbors(position)
            .map(|(direction, _)| direction)
            .collect();
        pending.shuffle(rng);
        Self { position, pending }
    }
}

/// Carve a perfect maze into a fully walled grid without drawing
///
/// Returns the number of internal passages carved.
pub fn generate<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> usize {
    generate_with_surface(grid, rng, &mut NoopSurface)
}

/// Carve a perfect maze, reporting progress to a drawing surface
///
/// The entrance and exit are opened first and drawn. While carving, a cell
/// is redrawn each time the walk returns to it from a finished branch. All
/// visited flags are cleared before returning so a later search starts clean.
/// The surface never influences the result: the same seed produces the same
/// walls with or without one.
pub fn generate_with_surface<R, S>(grid: &mut Grid, rng: &mut R, surface: &mut S) -> usize
where
    R: Rng + ?Sized,
    S: DrawingSurface + ?Sized,
{
    grid.reset_visited();
    break_entrance_and_exit(grid, surface);

    let start = grid.entrance();
    let carved = carve_passages(grid, start, rng, surface);
    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        carved,
        "carved passages"
    );

    grid.reset_visited();
    carved
}

fn break_entrance_and_exit<S: DrawingSurface + ?Sized>(grid: &mut Grid, surface: &mut S) {
    grid.open_entrance_and_exit();
    draw_cell(grid, grid.entrance(), surface);
    draw_cell(grid, grid.exit(), surface);
    surface.refresh();
}

fn carve_passages<R, S>(grid: &mut Grid, start: Position, rng: &mut R, surface: &mut S) -> usize
where
    R: Rng + ?Sized,
    S: DrawingSurface + ?Sized,
{
    grid.mark_visited(start);
    let mut stack = vec![CarveFrame::new(grid, start, rng)];
    let mut carved = 0;

    while let Some(frame) = stack.last_mut() {
        let current = frame.position;

        let Some(direction) = frame.pending.pop() else {
            stack.pop();
            if let Some(parent) = stack.last() {
                draw_cell(grid, parent.position, surface);
                surface.refresh();
            }
            continue;
        };

        let Some(next) = grid.neighbor(current, direction) else {
            continue;
        };
        if grid.is_visited(next) {
            continue;
        }

        grid.remove_wall(current, direction);
        grid.mark_visited(next);
        carved += 1;
        stack.push(CarveFrame::new(grid, next, rng));
    }

    carved
}

fn draw_cell<S: DrawingSurface + ?Sized>(grid: &Grid, position: Position, surface: &mut S) {
    if let Some(cell) = grid.cell(position) {
        surface.draw_cell_walls(position, cell);
    }
}
