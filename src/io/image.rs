//! Line rasterization and PNG export

use crate::io::canvas::Point;
use crate::io::error::{MazeError, Result};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Create a canvas image filled with one color
pub fn blank_image(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

/// Draw a line with a square brush of the given width
///
/// Uses Bresenham stepping; pixels falling outside the image are skipped.
pub fn draw_line(image: &mut RgbaImage, from: Point, to: Point, color: [u8; 4], width: u32) {
    let dx = (i64::from(to.x) - i64::from(from.x)).abs();
    let dy = -(i64::from(to.y) - i64::from(from.y)).abs();
    let step_x = if from.x < to.x { 1 } else { -1 };
    let step_y = if from.y < to.y { 1 } else { -1 };

    let mut x = i64::from(from.x);
    let mut y = i64::from(from.y);
    let mut error = dx + dy;

    loop {
        stamp(image, x, y, color, width);

        if x == i64::from(to.x) && y == i64::from(to.y) {
            break;
        }

        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}

// Brush is centered on the pixel, biased towards the top-left for even widths
fn stamp(image: &mut RgbaImage, x: i64, y: i64, color: [u8; 4], width: u32) {
    let width = i64::from(width.max(1));
    let start = -(width / 2);

    for offset_y in start..start + width {
        for offset_x in start..start + width {
            let (Ok(px), Ok(py)) = (u32::try_from(x + offset_x), u32::try_from(y + offset_y))
            else {
                continue;
            };
            if let Some(pixel) = image.get_pixel_mut_checked(px, py) {
                *pixel = Rgba(color);
            }
        }
    }
}

/// Save an image as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn export_png(image: &RgbaImage, output_path: &Path) -> Result<()> {
    ensure_parent_dir(output_path)?;

    image
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|err| MazeError::image_export(output_path, err))
}

/// Create the parent directory of an output path
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if parent.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(parent)
            .map_err(|err| MazeError::file_system(parent, "create directory", err))?;
    }
    Ok(())
}
