//! Maze constants and runtime configuration defaults

// Default values for configurable parameters
/// Default number of maze rows
pub const DEFAULT_ROWS: usize = 10;
/// Default number of maze columns
pub const DEFAULT_COLS: usize = 12;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Drawing geometry
/// Default cell edge length in pixels
pub const DEFAULT_CELL_SIZE: u32 = 50;
/// Default blank border around the maze in pixels
pub const DEFAULT_MARGIN: u32 = 50;
/// Line thickness in pixels
pub const STROKE_WIDTH: u32 = 2;
/// Largest canvas edge a GIF can hold
pub const MAX_CANVAS_DIMENSION: u32 = u16::MAX as u32;

// Colors
/// Canvas background, also used to erase walls
pub const BACKGROUND_COLOR: [u8; 4] = [217, 217, 217, 255];
/// Wall color
pub const WALL_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Forward search segment color
pub const PATH_COLOR: [u8; 4] = [220, 20, 20, 255];
/// Abandoned search segment color
pub const BACKTRACK_COLOR: [u8; 4] = [128, 128, 128, 255];

// Output settings
/// Delay between animation frames
pub const DEFAULT_FRAME_DELAY_MS: u32 = 50;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// The last frame is held this many frame delays
pub const FINAL_FRAME_HOLD: u32 = 25;
/// GIF quantizer speed (1 = best quality, 30 = fastest)
pub const GIF_ENCODER_SPEED: i32 = 10;

/// Reported when the exit is reachable
pub const SOLVED_MESSAGE: &str = "Maze solved!";
/// Reported when the exit is unreachable
pub const UNSOLVED_MESSAGE: &str = "No solution found.";
