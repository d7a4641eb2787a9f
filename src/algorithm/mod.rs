/// Maze facade owning the grid and its seed
pub mod executor;
/// Randomized backtracker carving
pub mod generator;
/// Depth-first search from entrance to exit
pub mod solver;
/// Passage graph statistics and structural checks
pub mod topology;
