//! Spatial data structures for the maze
//!
//! This module contains:
//! - Cell wall and visit state
//! - Cardinal directions and their offsets
//! - The grid arena with bounds-checked neighbor lookup

/// Cell wall flags and drawing
pub mod cell;
/// Cardinal directions between adjacent cells
pub mod direction;
/// Grid arena and wall-pair manipulation
pub mod grid;

pub use cell::Cell;
pub use direction::Direction;
pub use grid::{Grid, Position};
