//! Perfect maze generation with a randomized backtracker and depth-first solving
//!
//! A rectangular grid of walled cells is carved into a spanning tree of passages,
//! then searched from the entrance at the top-left to the exit at the bottom-right.
//! Drawing is an injected capability, so both algorithms run headless or animated.

#![forbid(unsafe_code)]

/// Maze carving, solving, and topology analysis
pub mod algorithm;
/// Drawing surfaces, rendering, configuration, and error handling
pub mod io;
/// Cells, directions, and the grid arena
pub mod spatial;

pub use algorithm::executor::Maze;
pub use io::error::{MazeError, Result};
pub use spatial::{Cell, Direction, Grid, Position};
