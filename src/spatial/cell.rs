//! Wall and visit state for a single maze cell

use crate::io::canvas::{Canvas, CellBounds, LineColor, Point};
use crate::spatial::Direction;

/// A grid unit with four walls and a visited marker
///
/// The cell's position is implicit in its grid index. Walls facing a
/// neighbor are kept consistent by the grid, which removes them in pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Wall on the side facing row - 1
    pub top_wall: bool,
    /// Wall on the side facing row + 1
    pub bottom_wall: bool,
    /// Wall on the side facing col - 1
    pub left_wall: bool,
    /// Wall on the side facing col + 1
    pub right_wall: bool,
    /// Whether the current carve or search pass has reached this cell
    pub visited: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}

impl Cell {
    /// A fully walled, unvisited cell
    pub const fn new() -> Self {
        Self {
            top_wall: true,
            bottom_wall: true,
            left_wall: true,
            right_wall: true,
            visited: false,
        }
    }

    /// Check the wall on the given side
    pub const fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.top_wall,
            Direction::Down => self.bottom_wall,
            Direction::Left => self.left_wall,
            Direction::Right => self.right_wall,
        }
    }

    /// Set or clear the wall on the given side
    pub const fn set_wall(&mut self, direction: Direction, present: bool) {
        match direction {
            Direction::Up => self.top_wall = present,
            Direction::Down => self.bottom_wall = present,
            Direction::Left => self.left_wall = present,
            Direction::Right => self.right_wall = present,
        }
    }

    /// Number of sides without a wall, boundary openings included
    pub fn open_sides(&self) -> usize {
        Direction::ALL
            .iter()
            .filter(|&&direction| !self.has_wall(direction))
            .count()
    }

    /// Draw all four sides, erasing the ones without a wall
    ///
    /// Absent walls are painted in the background color so that a redraw
    /// after carving visibly removes them.
    pub fn draw<C: Canvas + ?Sized>(&self, bounds: &CellBounds, canvas: &mut C) {
        let color = |present: bool| {
            if present {
                LineColor::Wall
            } else {
                LineColor::Background
            }
        };

        let top_left = Point::new(bounds.x1, bounds.y1);
        let top_right = Point::new(bounds.x2, bounds.y1);
        let bottom_left = Point::new(bounds.x1, bounds.y2);
        let bottom_right = Point::new(bounds.x2, bounds.y2);

        canvas.draw_line(top_left, bottom_left, color(self.left_wall));
        canvas.draw_line(top_right, bottom_right, color(self.right_wall));
        canvas.draw_line(top_left, top_right, color(self.top_wall));
        canvas.draw_line(bottom_left, bottom_right, color(self.bottom_wall));
    }

    /// Draw a line between two cell centers
    ///
    /// `undo` marks a segment the search has backed out of.
    pub fn draw_move<C: Canvas + ?Sized>(
        from: &CellBounds,
        to: &CellBounds,
        undo: bool,
        canvas: &mut C,
    ) {
        let color = if undo {
            LineColor::Backtrack
        } else {
            LineColor::Path
        };
        canvas.draw_line(from.center(), to.center(), color);
    }
}
