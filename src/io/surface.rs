//! Drawing callbacks invoked by the carve and search algorithms
//!
//! Generation and solving produce the same grid state whether or not a
//! surface is attached; surfaces only observe.

use crate::spatial::{Cell, Position};

/// Observer for maze drawing events
pub trait DrawingSurface {
    /// Render a cell's four sides, erasing absent walls
    fn draw_cell_walls(&mut self, position: Position, cell: &Cell);

    /// Render a line between two cell centers
    ///
    /// `forward` is false when the search is retreating from `from` to `to`.
    fn draw_path_segment(&mut self, from: Position, to: Position, forward: bool);

    /// Flush pending drawing as one visible frame
    fn refresh(&mut self);
}

/// Headless surface that ignores every call
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSurface;

impl DrawingSurface for NoopSurface {
    fn draw_cell_walls(&mut self, _position: Position, _cell: &Cell) {}

    fn draw_path_segment(&mut self, _from: Position, _to: Position, _forward: bool) {}

    fn refresh(&mut self) {}
}

/// One captured drawing call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A cell was drawn with the given wall state
    CellWalls {
        /// Cell position
        position: Position,
        /// Snapshot of the cell when drawn
        cell: Cell,
    },
    /// A path segment was drawn
    PathSegment {
        /// Segment start
        from: Position,
        /// Segment end
        to: Position,
        /// Whether this is forward movement
        forward: bool,
    },
    /// A frame boundary
    Refresh,
}

/// Surface that keeps every call in order
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    /// Create an empty recorder
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// All captured events
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Number of frame boundaries seen
    pub fn refresh_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SurfaceEvent::Refresh))
            .count()
    }

    /// Path segments as `(from, to, forward)` in drawing order
    pub fn path_segments(&self) -> Vec<(Position, Position, bool)> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                SurfaceEvent::PathSegment { from, to, forward } => Some((from, to, forward)),
                _ => None,
            })
            .collect()
    }
}

impl DrawingSurface for RecordingSurface {
    fn draw_cell_walls(&mut self, position: Position, cell: &Cell) {
        self.events.push(SurfaceEvent::CellWalls {
            position,
            cell: *cell,
        });
    }

    fn draw_path_segment(&mut self, from: Position, to: Position, forward: bool) {
        self.events
            .push(SurfaceEvent::PathSegment { from, to, forward });
    }

    fn refresh(&mut self) {
        self.events.push(SurfaceEvent::Refresh);
    }
}
