//! Grid arena holding every cell of the maze
//!
//! Cells live in a single row-major `Array2` indexed by `[row, col]`. All
//! neighbor lookups go through checked arithmetic so an out-of-bounds step
//! produces `None` rather than an index fault.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result};
use crate::spatial::{Cell, Direction};

/// Grid coordinates as `[row, col]`
pub type Position = [usize; 2];

/// Rectangular arrangement of cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    /// Grid dimensions (rows, cols)
    dimensions: (usize, usize),
}

impl Grid {
    /// Create a fully walled grid
    ///
    /// # Errors
    ///
    /// Returns `MazeError::InvalidDimensions` if either dimension is zero or
    /// exceeds `MAX_GRID_DIMENSION`. Validation happens before allocation.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        validate_dimensions(rows, cols)?;

        Ok(Self {
            cells: Array2::from_elem((rows, cols), Cell::new()),
            dimensions: (rows, cols),
        })
    }

    /// Get the number of rows in the grid
    pub const fn rows(&self) -> usize {
        self.dimensions.0
    }

    /// Get the number of columns in the grid
    pub const fn cols(&self) -> usize {
        self.dimensions.1
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.dimensions.0 * self.dimensions.1
    }

    /// The cell whose top wall is the entrance
    pub const fn entrance(&self) -> Position {
        [0, 0]
    }

    /// The cell whose bottom wall is the exit
    pub const fn exit(&self) -> Position {
        [self.dimensions.0 - 1, self.dimensions.1 - 1]
    }

    /// Check whether a position lies inside the grid
    pub const fn contains(&self, position: Position) -> bool {
        position[0] < self.dimensions.0 && position[1] < self.dimensions.1
    }

    /// Flat row-major index of a position
    pub const fn index_of(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position[0] * self.dimensions.1 + position[1])
        } else {
            None
        }
    }

    /// Borrow the cell at a position
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.cells.get(position)
    }

    /// Mutably borrow the cell at a position
    ///
    /// Changing a wall through this handle does not touch the neighbor's
    /// matching wall; use [`Grid::set_wall`] to keep pairs consistent.
    pub fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.cells.get_mut(position)
    }

    /// Position one step away, or `None` when the step leaves the grid
    pub const fn neighbor(&self, position: Position, direction: Direction) -> Option<Position> {
        if !self.contains(position) {
            return None;
        }

        let [row_delta, col_delta] = direction.offset();
        let Some(row) = position[0].checked_add_signed(row_delta) else {
            return None;
        };
        let Some(col) = position[1].checked_add_signed(col_delta) else {
            return None;
        };

        let next = [row, col];
        if self.contains(next) { Some(next) } else { None }
    }

    /// In-bounds neighbors in direction enumeration order
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = (Direction, Position)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| {
                self.neighbor(position, direction)
                    .map(|next| (direction, next))
            })
    }

    /// Check the wall on one side of a cell
    ///
    /// Positions outside the grid are treated as solid.
    pub fn has_wall(&self, position: Position, direction: Direction) -> bool {
        self.cell(position)
            .is_none_or(|cell| cell.has_wall(direction))
    }

    /// Set or clear the wall between a cell and its neighbor on both sides
    ///
    /// Returns `false` without changing anything if there is no neighbor in
    /// that direction.
    pub fn set_wall(&mut self, position: Position, direction: Direction, present: bool) -> bool {
        let Some(next) = self.neighbor(position, direction) else {
            return false;
        };

        if let Some(cell) = self.cells.get_mut(position) {
            cell.set_wall(direction, present);
        }
        if let Some(cell) = self.cells.get_mut(next) {
            cell.set_wall(direction.opposite(), present);
        }
        true
    }

    /// Carve a passage between a cell and its neighbor
    pub fn remove_wall(&mut self, position: Position, direction: Direction) -> bool {
        self.set_wall(position, direction, false)
    }

    /// Remove the entrance and exit boundary walls
    pub fn open_entrance_and_exit(&mut self) {
        let entrance = self.entrance();
        let exit = self.exit();

        if let Some(cell) = self.cells.get_mut(entrance) {
            cell.top_wall = false;
        }
        if let Some(cell) = self.cells.get_mut(exit) {
            cell.bottom_wall = false;
        }
    }

    /// Check whether a cell has been visited by the current pass
    pub fn is_visited(&self, position: Position) -> bool {
        self.cell(position).is_some_and(|cell| cell.visited)
    }

    /// Mark a cell as visited
    pub fn mark_visited(&mut self, position: Position) {
        if let Some(cell) = self.cells.get_mut(position) {
            cell.visited = true;
        }
    }

    /// Clear every visited flag
    pub fn reset_visited(&mut self) {
        for cell in &mut self.cells {
            cell.visited = false;
        }
    }

    /// Iterate positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.cols();
        (0..self.rows()).flat_map(move |row| (0..cols).map(move |col| [row, col]))
    }

    /// Iterate cells with their positions in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ([row, col], cell))
    }
}

fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    let reason = if rows == 0 || cols == 0 {
        "grid must have at least one row and one column".to_string()
    } else if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        format!("each dimension must not exceed {MAX_GRID_DIMENSION}")
    } else {
        return Ok(());
    };

    Err(MazeError::InvalidDimensions { rows, cols, reason })
}
