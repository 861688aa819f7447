//! Module drawing laid out captions onto images.

use image::RgbaImage;

use crate::model::Position;
use crate::model::constants::{BOTTOM_MARGIN, MIN_OUTLINE_THICKNESS, OUTLINE_COLOR,
                              OUTLINE_THICKNESS_DIVISOR, TEXT_COLOR, TOP_MARGIN};
use crate::resources::FontHandle;
use crate::util::text;
use super::layout::LineBlock;


/// Thickness (in pixels) of the outline drawn around text of given font size.
#[inline]
pub fn outline_thickness(font_size: u32) -> u32 {
    MIN_OUTLINE_THICKNESS.max(font_size / OUTLINE_THICKNESS_DIVISOR)
}

/// Vertical coordinate where a caption block of given height starts.
///
/// The result is negative if a bottom caption is taller than the image.
#[inline]
pub fn block_top(position: Position, image_height: u32, block_height: u32) -> i32 {
    match position {
        Position::Top => TOP_MARGIN,
        Position::Bottom => image_height as i32 - block_height as i32 - BOTTOM_MARGIN,
    }
}

/// Horizontal coordinate where a line of given width starts
/// so that it's centered within the image.
#[inline]
pub fn line_left(image_width: u32, text_width: u32) -> i32 {
    (image_width as i32 - text_width as i32).div_euclid(2)
}


/// Draw the lines of a caption onto the image at given position.
///
/// Every line is centered horizontally on its own and rendered as white text
/// with a black outline. The outline is made by drawing the text in black
/// at every offset within a square around the actual position.
pub fn render_caption(img: &mut RgbaImage, block: &LineBlock, position: Position,
                      font: &FontHandle) {
    if block.is_empty() {
        return;
    }
    let (width, height) = img.dimensions();

    let top = block_top(position, height, block.height());
    let thickness = outline_thickness(font.size()) as i32;
    trace!("Rendering {} line(s) of {} caption at y={} with {}px outline",
        block.len(), position, top, thickness);

    for (i, line) in block.lines().iter().enumerate() {
        let rasterized = text::rasterize(line, font);
        if rasterized.is_blank() {
            continue;
        }
        let x = line_left(width, rasterized.width());
        let y = top + i as i32 * block.line_height() as i32;

        for dx in -thickness..=thickness {
            for dy in -thickness..=thickness {
                if dx != 0 || dy != 0 {
                    text::stamp(img, &rasterized, x + dx, y + dy, OUTLINE_COLOR);
                }
            }
        }
        text::stamp(img, &rasterized, x, y, TEXT_COLOR);
    }
}
