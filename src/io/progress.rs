//! Phase progress display for carving, solving, and encoding

use crate::io::surface::DrawingSurface;
use crate::spatial::{Cell, Position};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static PHASE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix:>8} {pos} frames [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner that reports frame counts for one phase at a time
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(PHASE_STYLE.clone());
        Self { bar }
    }

    /// Create a progress manager that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Reset the counter and label a new phase
    pub fn start_phase(&self, label: &'static str) {
        self.bar.reset();
        self.bar.set_prefix(label);
        self.bar.set_message("");
        self.bar.enable_steady_tick(Duration::from_millis(100));
    }

    /// Count one frame
    pub fn tick(&self) {
        self.bar.inc(1);
    }

    /// Frames counted in the current phase
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Stop ticking and leave a summary message on the line
    pub fn finish_phase(&self, message: impl Into<String>) {
        self.bar.disable_steady_tick();
        self.bar.set_message(message.into());
        self.bar.tick();
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Surface adapter that forwards every call and ticks progress on refresh
pub struct ProgressSurface<'a, S: DrawingSurface + ?Sized> {
    inner: &'a mut S,
    progress: &'a ProgressManager,
}

impl<'a, S: DrawingSurface + ?Sized> ProgressSurface<'a, S> {
    /// Wrap a surface
    pub const fn new(inner: &'a mut S, progress: &'a ProgressManager) -> Self {
        Self { inner, progress }
    }
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for ProgressSurface<'_, S> {
    fn draw_cell_walls(&mut self, position: Position, cell: &Cell) {
        self.inner.draw_cell_walls(position, cell);
    }

    fn draw_path_segment(&mut self, from: Position, to: Position, forward: bool) {
        self.inner.draw_path_segment(from, to, forward);
    }

    fn refresh(&mut self) {
        self.inner.refresh();
        self.progress.tick();
    }
}
