//! Frame capture and GIF generation for maze animation

use crate::io::canvas::{Canvas, LineColor, Point};
use crate::io::configuration::{
    BACKGROUND_COLOR, FINAL_FRAME_HOLD, GIF_ENCODER_SPEED, STROKE_WIDTH,
    VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{MazeError, Result};
use crate::io::image::{blank_image, draw_line, ensure_parent_dir, export_png};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Represents a single line drawing event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    /// Line start
    pub from: Point,
    /// Line end
    pub to: Point,
    /// Semantic color
    pub color: LineColor,
}

/// Canvas that records strokes and frame boundaries for later replay
///
/// Frames are not rasterized while drawing; export replays the stroke list
/// onto a single image and emits it at each recorded boundary, so memory
/// stays proportional to the number of lines rather than frames.
#[derive(Debug, Clone)]
pub struct FrameRecorder {
    width: u32,
    height: u32,
    strokes: Vec<Stroke>,
    /// Stroke count at each refresh
    frame_marks: Vec<usize>,
}

impl FrameRecorder {
    /// Create a recorder for a canvas of the given size
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            strokes: Vec::new(),
            frame_marks: Vec::new(),
        }
    }

    /// Canvas size (width, height)
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns all recorded strokes
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Returns the total number of recorded strokes
    pub const fn stroke_count(&self) -> usize {
        self.strokes.len()
    }

    /// Returns the number of distinct frames recorded
    pub const fn frame_count(&self) -> usize {
        self.frame_marks.len()
    }

    /// Rasterize every stroke onto one image
    pub fn render_final(&self) -> RgbaImage {
        let mut img = blank_image(self.width, self.height, BACKGROUND_COLOR);
        for stroke in &self.strokes {
            rasterize(&mut img, stroke);
        }
        img
    }

    /// Save the final state as a PNG image
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been drawn or the file cannot be written.
    pub fn export_png(&self, output_path: &Path) -> Result<()> {
        if self.strokes.is_empty() {
            return Err(MazeError::NothingToRender {
                reason: "No strokes recorded for snapshot".to_string(),
            });
        }
        export_png(&self.render_final(), output_path)
    }

    /// Export the recorded frames as a looping GIF with automatic frame skipping
    ///
    /// If `frame_delay_ms` is below what viewers reliably display, frames are
    /// merged so the apparent animation speed is kept. For example a 5ms
    /// delay against a 20ms viewer minimum keeps every 4th frame. Returns the
    /// number of frames written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No strokes were recorded
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<usize> {
        if self.strokes.is_empty() {
            return Err(MazeError::NothingToRender {
                reason: "No strokes recorded for animation".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        ensure_parent_dir(output_path)?;
        let file = File::create(output_path)
            .map_err(|err| MazeError::file_system(output_path, "create file", err))?;
        let export_error = |err| MazeError::image_export(output_path, err);

        let mut encoder = GifEncoder::new_with_speed(BufWriter::new(file), GIF_ENCODER_SPEED);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;

        let mut img = blank_image(self.width, self.height, BACKGROUND_COLOR);
        let mut drawn = 0;
        let mut frames_written = 0;

        for (index, &mark) in self.frame_marks.iter().enumerate() {
            drawn = self.replay(&mut img, drawn, mark);

            let is_last = index + 1 == self.frame_marks.len();
            if (index + 1) % skip_factor == 0 || is_last {
                encoder
                    .encode_frame(make_frame(&img, effective_delay_ms))
                    .map_err(export_error)?;
                frames_written += 1;
            }
        }

        // Strokes after the final refresh are still shown, and the end state is held longer
        self.replay(&mut img, drawn, self.strokes.len());
        encoder
            .encode_frame(make_frame(
                &img,
                effective_delay_ms.saturating_mul(FINAL_FRAME_HOLD),
            ))
            .map_err(export_error)?;
        frames_written += 1;

        Ok(frames_written)
    }

    // Draws strokes[start..end] and returns the new cursor
    fn replay(&self, img: &mut RgbaImage, start: usize, end: usize) -> usize {
        for stroke in self.strokes.get(start..end).unwrap_or(&[]) {
            rasterize(img, stroke);
        }
        end.max(start)
    }
}

impl Canvas for FrameRecorder {
    fn draw_line(&mut self, from: Point, to: Point, color: LineColor) {
        self.strokes.push(Stroke { from, to, color });
    }

    fn refresh(&mut self) {
        // Refreshes with nothing new drawn would only repeat the previous frame
        if self.frame_marks.last().copied().unwrap_or(0) != self.strokes.len() {
            self.frame_marks.push(self.strokes.len());
        }
    }
}

fn rasterize(img: &mut RgbaImage, stroke: &Stroke) {
    draw_line(img, stroke.from, stroke.to, stroke.color.rgba(), STROKE_WIDTH);
}

fn make_frame(img: &RgbaImage, delay_ms: u32) -> Frame {
    Frame::from_parts(img.clone(), 0, 0, Delay::from_numer_denom_ms(delay_ms, 1))
}
