//! Pixel-level drawing primitives and the cell-to-pixel layout
//!
//! A [`Canvas`] only knows how to draw colored lines and mark frame
//! boundaries. [`CanvasSurface`] bridges the cell-level [`DrawingSurface`]
//! callbacks onto a canvas using a [`Layout`].

use crate::io::configuration::{
    BACKGROUND_COLOR, BACKTRACK_COLOR, MAX_CANVAS_DIMENSION, PATH_COLOR, WALL_COLOR,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::surface::DrawingSurface;
use crate::spatial::{Cell, Position};

/// Pixel coordinates on a canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    /// Horizontal pixel offset
    pub x: i32,
    /// Vertical pixel offset
    pub y: i32,
}

impl Point {
    /// Create a point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Semantic line colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineColor {
    /// A wall that is present
    Wall,
    /// Erases a removed wall
    Background,
    /// Forward search movement
    Path,
    /// Search movement that was undone
    Backtrack,
}

impl LineColor {
    /// RGBA value used when rasterizing
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Wall => WALL_COLOR,
            Self::Background => BACKGROUND_COLOR,
            Self::Path => PATH_COLOR,
            Self::Backtrack => BACKTRACK_COLOR,
        }
    }
}

/// Line-drawing target
pub trait Canvas {
    /// Draw a straight line between two points
    fn draw_line(&mut self, from: Point, to: Point, color: LineColor);

    /// Flush pending lines as one visible frame
    fn refresh(&mut self);
}

/// Pixel rectangle occupied by one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellBounds {
    /// Left edge
    pub x1: i32,
    /// Top edge
    pub y1: i32,
    /// Right edge
    pub x2: i32,
    /// Bottom edge
    pub y2: i32,
}

impl CellBounds {
    /// Midpoint of the rectangle
    pub const fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }
}

/// Placement of the grid on a canvas
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    origin: Point,
    cell_width: i32,
    cell_height: i32,
}

impl Layout {
    /// Create a layout with the top-left cell corner at `origin`
    ///
    /// # Errors
    ///
    /// Returns an error if a cell size is zero or does not fit in `i32`.
    pub fn new(origin: Point, cell_width: u32, cell_height: u32) -> Result<Self> {
        let cell_width = positive_i32("cell_width", cell_width)?;
        let cell_height = positive_i32("cell_height", cell_height)?;

        Ok(Self {
            origin,
            cell_width,
            cell_height,
        })
    }

    /// Square cells with an equal margin on every side
    ///
    /// # Errors
    ///
    /// Returns an error if the cell size is zero or the margin does not fit in `i32`.
    pub fn square(margin: u32, cell_size: u32) -> Result<Self> {
        let margin =
            i32::try_from(margin).map_err(|err| invalid_parameter("margin", &margin, &err))?;
        Self::new(Point::new(margin, margin), cell_size, cell_size)
    }

    /// Pixel rectangle of the cell at `position`
    pub fn bounds(&self, position: Position) -> CellBounds {
        let col = i32::try_from(position[1]).unwrap_or(i32::MAX);
        let row = i32::try_from(position[0]).unwrap_or(i32::MAX);

        let x1 = self
            .origin
            .x
            .saturating_add(col.saturating_mul(self.cell_width));
        let y1 = self
            .origin
            .y
            .saturating_add(row.saturating_mul(self.cell_height));

        CellBounds {
            x1,
            y1,
            x2: x1.saturating_add(self.cell_width),
            y2: y1.saturating_add(self.cell_height),
        }
    }

    /// Canvas size (width, height) that fits the grid plus the origin margin on both sides
    ///
    /// # Errors
    ///
    /// Returns an error if the canvas would exceed `MAX_CANVAS_DIMENSION`.
    pub fn canvas_size(&self, rows: usize, cols: usize) -> Result<(u32, u32)> {
        let width = extent(self.origin.x, self.cell_width, cols)
            .ok_or_else(|| invalid_parameter("cols", &cols, &"canvas width is too large"))?;
        let height = extent(self.origin.y, self.cell_height, rows)
            .ok_or_else(|| invalid_parameter("rows", &rows, &"canvas height is too large"))?;

        Ok((width, height))
    }
}

fn positive_i32(parameter: &'static str, value: u32) -> Result<i32> {
    match i32::try_from(value) {
        Ok(converted) if converted > 0 => Ok(converted),
        _ => Err(invalid_parameter(
            parameter,
            &value,
            &"must be positive and fit in a signed 32-bit value",
        )),
    }
}

// Margin on both sides plus the cells, with one extra pixel for the closing wall
fn extent(margin: i32, cell: i32, count: usize) -> Option<u32> {
    let count = i64::try_from(count).ok()?;
    let total = i64::from(margin.max(0)) * 2 + i64::from(cell) * count + 1;
    u32::try_from(total)
        .ok()
        .filter(|&size| size <= MAX_CANVAS_DIMENSION)
}

/// Cell-level drawing surface backed by a canvas
pub struct CanvasSurface<C: Canvas> {
    canvas: C,
    layout: Layout,
}

impl<C: Canvas> CanvasSurface<C> {
    /// Wrap a canvas with the given layout
    pub const fn new(canvas: C, layout: Layout) -> Self {
        Self { canvas, layout }
    }

    /// Borrow the underlying canvas
    pub const fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Layout used to place cells
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Recover the underlying canvas
    pub fn into_inner(self) -> C {
        self.canvas
    }
}

impl<C: Canvas> DrawingSurface for CanvasSurface<C> {
    fn draw_cell_walls(&mut self, position: Position, cell: &Cell) {
        let bounds = self.layout.bounds(position);
        cell.draw(&bounds, &mut self.canvas);
    }

    fn draw_path_segment(&mut self, from: Position, to: Position, forward: bool) {
        let from_bounds = self.layout.bounds(from);
        let to_bounds = self.layout.bounds(to);
        Cell::draw_move(&from_bounds, &to_bounds, !forward, &mut self.canvas);
    }

    fn refresh(&mut self) {
        self.canvas.refresh();
    }
}
