/// Plain-text maze rendering
pub mod ascii;
/// Pixel canvas primitives and cell layout
pub mod canvas;
/// Command-line interface and run orchestration
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types
pub mod error;
/// Line rasterization and PNG export
pub mod image;
/// Phase progress display
pub mod progress;
/// Drawing callbacks for the maze algorithms
pub mod surface;
/// Frame recording and GIF export
pub mod visualization;
