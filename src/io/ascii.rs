//! Plain-text rendering of a maze

use std::collections::HashSet;

use crate::spatial::{Cell, Grid, Position};

const CORNER: char = '+';
const HORIZONTAL_WALL: &str = "---";
const VERTICAL_WALL: char = '|';
const OPEN_SIDE: &str = "   ";
const EMPTY_CELL: &str = "   ";
const PATH_CELL: &str = " * ";

/// Render the grid as ASCII art, marking cells on `path` with `*`
///
/// Each cell is three characters wide. Horizontal wall rows come from the
/// top walls of the first row and the bottom walls of every row, so the
/// entrance and exit openings appear in the outer border.
pub fn render_ascii(grid: &Grid, path: Option<&[Position]>) -> String {
    let on_path: HashSet<Position> = path.unwrap_or(&[]).iter().copied().collect();
    let mut out = String::with_capacity((grid.rows() * 2 + 1) * (grid.cols() * 4 + 2));

    push_horizontal(&mut out, grid, 0, |cell| cell.top_wall);

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let left_wall = grid.cell([row, col]).is_none_or(|cell| cell.left_wall);
            out.push(if left_wall { VERTICAL_WALL } else { ' ' });
            out.push_str(if on_path.contains(&[row, col]) {
                PATH_CELL
            } else {
                EMPTY_CELL
            });
        }
        let right_wall = grid
            .cell([row, grid.cols() - 1])
            .is_none_or(|cell| cell.right_wall);
        out.push(if right_wall { VERTICAL_WALL } else { ' ' });
        out.push('\n');

        push_horizontal(&mut out, grid, row, |cell| cell.bottom_wall);
    }

    out
}

fn push_horizontal(
    out: &mut String,
    grid: &Grid,
    row: usize,
    wall: impl Fn(&Cell) -> bool,
) {
    for col in 0..grid.cols() {
        out.push(CORNER);
        let present = grid.cell([row, col]).is_none_or(&wall);
        out.push_str(if present { HORIZONTAL_WALL } else { OPEN_SIDE });
    }
    out.push(CORNER);
    out.push('\n');
}
