use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::algorithm::{generator, solver};
use crate::io::error::Result;
use crate::io::surface::{DrawingSurface, NoopSurface};
use crate::spatial::{Grid, Position};

/// A carved maze together with the seed that produced it
///
/// Construction runs the whole carve, so a `Maze` built by [`Maze::new`] or
/// [`Maze::with_surface`] always holds a perfect maze with clear visited
/// flags. [`Maze::from_grid`] accepts arbitrary wall layouts for searching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    seed: Option<u64>,
}

impl Maze {
    /// Build and carve a maze without drawing
    ///
    /// When `seed` is `None` one is drawn from the thread RNG and kept, so
    /// the layout can be reproduced later via [`Maze::seed`].
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid.
    pub fn new(rows: usize, cols: usize, seed: Option<u64>) -> Result<Self> {
        Self::with_surface(rows, cols, seed, &mut NoopSurface)
    }

    /// Build and carve a maze, animating the carve on `surface`
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid. Nothing is drawn in
    /// that case.
    #[tracing::instrument(skip(surface))]
    pub fn with_surface<S: DrawingSurface + ?Sized>(
        rows: usize,
        cols: usize,
        seed: Option<u64>,
        surface: &mut S,
    ) -> Result<Self> {
        let mut grid = Grid::new(rows, cols)?;

        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = StdRng::seed_from_u64(seed);
        let carved = generator::generate_with_surface(&mut grid, &mut rng, surface);
        info!(seed, carved, "maze generated");

        Ok(Self {
            grid,
            seed: Some(seed),
        })
    }

    /// Wrap an externally built grid without carving it
    pub const fn from_grid(grid: Grid) -> Self {
        Self { grid, seed: None }
    }

    /// The underlying grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access for editing walls
    pub const fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Consume the maze and return its grid
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Seed used to carve this maze, if it was carved here
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw every cell column by column, refreshing after each one
    pub fn draw<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        for col in 0..self.grid.cols() {
            for row in 0..self.grid.rows() {
                if let Some(cell) = self.grid.cell([row, col]) {
                    surface.draw_cell_walls([row, col], cell);
                    surface.refresh();
                }
            }
        }
    }

    /// Check whether the exit is reachable, animating the search
    ///
    /// Visited flags are cleared first, so a maze can be solved repeatedly.
    pub fn solve<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> bool {
        self.solve_path(surface).is_some()
    }

    /// Search for a route from entrance to exit, animating the search
    pub fn solve_path<S: DrawingSurface + ?Sized>(
        &mut self,
        surface: &mut S,
    ) -> Option<Vec<Position>> {
        self.grid.reset_visited();
        let path = solver::find_path(&mut self.grid, surface);
        debug!(solved = path.is_some(), "search finished");
        path
    }
}
