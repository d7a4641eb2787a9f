//! Command-line interface for carving, rendering, and solving a maze

use crate::algorithm::executor::Maze;
use crate::algorithm::topology::analyze;
use crate::io::ascii::render_ascii;
use crate::io::canvas::{CanvasSurface, Layout};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE, DEFAULT_COLS, DEFAULT_FRAME_DELAY_MS, DEFAULT_MARGIN, DEFAULT_ROWS,
    SOLVED_MESSAGE, UNSOLVED_MESSAGE,
};
use crate::io::error::Result;
use crate::io::progress::{ProgressManager, ProgressSurface};
use crate::io::surface::{DrawingSurface, NoopSurface};
use crate::io::visualization::FrameRecorder;
use crate::spatial::Position;
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, info, warn};

#[derive(Parser, Debug)]
#[command(name = "mazecarve")]
#[command(
    author,
    version,
    about = "Carve a perfect maze with a randomized backtracker and solve it depth-first"
)]
/// Command-line arguments for the maze tool
pub struct Cli {
    /// Number of rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Random seed for reproducible generation (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write the carve and search animation as a GIF
    #[arg(short, long, value_name = "GIF")]
    pub output: Option<PathBuf>,

    /// Write the final drawing as a PNG
    #[arg(long, value_name = "PNG")]
    pub snapshot: Option<PathBuf>,

    /// Cell edge length in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// Blank border around the maze in pixels
    #[arg(long, default_value_t = DEFAULT_MARGIN)]
    pub margin: u32,

    /// Delay between animation frames in milliseconds
    #[arg(short = 'd', long, default_value_t = DEFAULT_FRAME_DELAY_MS)]
    pub frame_delay: u32,

    /// Print the maze and its solution as ASCII art
    #[arg(short, long)]
    pub ascii: bool,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if any image output was requested
    pub const fn wants_rendering(&self) -> bool {
        self.output.is_some() || self.snapshot.is_some()
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.wants_rendering()
    }
}

/// Log level for a verbosity count, or `None` when quiet
pub const fn log_level(verbose: u8, quiet: bool) -> Option<Level> {
    if quiet {
        return None;
    }
    Some(match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    })
}

/// Install a stderr log subscriber
///
/// Does nothing when quiet or when a subscriber is already installed.
pub fn init_logging(verbose: u8, quiet: bool) {
    if let Some(level) = log_level(verbose, quiet) {
        // A subscriber installed by an embedding program takes precedence
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .ok();
    }
}

/// Outcome of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// The carved maze, with visited flags left by the search
    pub maze: Maze,
    /// Route found by the search, entrance first
    pub path: Option<Vec<Position>>,
    /// GIF frames written, if an animation was exported
    pub frames_written: Option<usize>,
}

impl RunReport {
    /// Whether the exit was reached
    pub const fn solved(&self) -> bool {
        self.path.is_some()
    }

    /// Message shown to the user
    pub const fn message(&self) -> &'static str {
        if self.solved() {
            SOLVED_MESSAGE
        } else {
            UNSOLVED_MESSAGE
        }
    }
}

/// Orchestrates generation, drawing, solving, and export for one CLI run
pub struct MazeRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl MazeRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run and print the outcome
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions or layout are invalid, or if an
    /// output file cannot be written.
    // Allow print for the user-facing result
    #[allow(clippy::print_stdout)]
    pub fn run(&mut self) -> Result<RunReport> {
        let report = self.execute()?;

        if self.cli.ascii {
            println!("{}", render_ascii(report.maze.grid(), report.path.as_deref()));
        }
        println!("{}", report.message());

        Ok(report)
    }

    /// Run without printing
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions or layout are invalid, or if an
    /// output file cannot be written.
    pub fn execute(&mut self) -> Result<RunReport> {
        if !self.cli.wants_rendering() {
            let mut surface = NoopSurface;
            let (maze, path) = self.carve_and_solve(&mut surface)?;
            return Ok(RunReport {
                maze,
                path,
                frames_written: None,
            });
        }

        let layout = Layout::square(self.cli.margin, self.cli.cell_size)?;
        let (width, height) = layout.canvas_size(self.cli.rows, self.cli.cols)?;
        let mut surface = CanvasSurface::new(FrameRecorder::new(width, height), layout);

        let (maze, path) = self.carve_and_solve(&mut surface)?;
        let recorder = surface.into_inner();
        info!(
            strokes = recorder.stroke_count(),
            frames = recorder.frame_count(),
            "recorded drawing"
        );

        if let Some(pm) = &self.progress_manager {
            pm.start_phase("encode");
        }

        let mut frames_written = None;
        if let Some(output) = &self.cli.output {
            frames_written = Some(recorder.export_gif(output, self.cli.frame_delay)?);
            info!(path = %output.display(), "animation written");
        }
        if let Some(snapshot) = &self.cli.snapshot {
            recorder.export_png(snapshot)?;
            info!(path = %snapshot.display(), "snapshot written");
        }

        if let Some(pm) = &self.progress_manager {
            pm.finish();
        }

        Ok(RunReport {
            maze,
            path,
            frames_written,
        })
    }

    fn carve_and_solve<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
    ) -> Result<(Maze, Option<Vec<Position>>)> {
        let hidden;
        let progress = if let Some(pm) = &self.progress_manager {
            pm
        } else {
            hidden = ProgressManager::hidden();
            &hidden
        };
        let mut surface = ProgressSurface::new(surface, progress);

        progress.start_phase("carve");
        let mut maze =
            Maze::with_surface(self.cli.rows, self.cli.cols, self.cli.seed, &mut surface)?;
        maze.draw(&mut surface);
        progress.finish_phase("carved");

        let stats = analyze(maze.grid());
        info!(
            passages = stats.passages,
            dead_ends = stats.dead_ends,
            "maze structure"
        );
        if !stats.is_perfect() {
            warn!(?stats, "carved grid is not a perfect maze");
        }

        progress.start_phase("solve");
        let path = maze.solve_path(&mut surface);
        progress.finish_phase(if path.is_some() { "solved" } else { "unsolved" });

        Ok((maze, path))
    }
}
