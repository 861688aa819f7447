//! Module responsible for rasterizing and drawing text.

use image::{Pixel, RgbaImage};
use rusttype::point;

use crate::model::Color;
use crate::resources::{BITMAP_GLYPH_SIZE, Face, Font, FontHandle, bitmap_glyph};


/// Warn if given font doesn't have all the glyphs for given text.
pub fn check(font: &FontHandle, text: &str) {
    if let Face::Scalable(ref font) = *font.face() {
        let missing = font.missing_chars(text);
        if !missing.is_empty() {
            warn!("Missing glyphs for {} codepoint(s): {}", missing.len(),
                missing.into_iter().map(|c| format!("{:#x}", c as u32))
                    .collect::<Vec<_>>().join(", "));
        }
    }
}


/// Single line of text turned into pixel coverage values.
///
/// Coordinates are relative to the line's origin: x = 0 is the pen position
/// where the text starts, y = 0 is the top of the line (ascender line).
#[derive(Clone, Debug, Default)]
pub struct RasterizedText {
    pixels: Vec<(i32, i32, u8)>,
    /// Horizontal extent of the glyphs' ink, as a half-open range.
    extent: Option<(i32, i32)>,
}

impl RasterizedText {
    /// Width of the text in pixels, measured as the extent of its glyphs.
    pub fn width(&self) -> u32 {
        self.extent.map(|(min, max)| (max - min).max(0) as u32).unwrap_or(0)
    }

    /// Whether the rasterized text has no visible pixels.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.pixels.is_empty()
    }

    fn extend_extent(&mut self, min_x: i32, max_x: i32) {
        self.extent = Some(match self.extent {
            Some((min, max)) => (min.min(min_x), max.max(max_x)),
            None => (min_x, max_x),
        });
    }
}


/// Rasterize a single line of text using given font.
///
/// Line breaks are not interpreted.
pub fn rasterize(s: &str, font: &FontHandle) -> RasterizedText {
    let result = match *font.face() {
        Face::Scalable(ref f) => rasterize_scalable(s, f, font.size()),
        Face::Bitmap => rasterize_bitmap(s),
    };
    trace!("Rasterized {:?} into {} pixel(s), {}px wide",
        s, result.pixels.len(), result.width());
    result
}

fn rasterize_scalable(s: &str, font: &Font, size: u32) -> RasterizedText {
    let mut result = RasterizedText::default();

    let scale = font.scale_for_size(size);
    let ascent = font.v_metrics(scale).ascent;
    for glyph in font.layout(s, scale, point(0.0, ascent)) {
        if let Some(bbox) = glyph.pixel_bounding_box() {
            result.extend_extent(bbox.min.x, bbox.max.x);
            let pixels = &mut result.pixels;
            glyph.draw(|x, y, v| {
                let alpha = (v * 255.0).round().max(0.0).min(255.0) as u8;
                if alpha > 0 {
                    pixels.push((bbox.min.x + x as i32, bbox.min.y + y as i32, alpha));
                }
            });
        }
    }
    result
}

fn rasterize_bitmap(s: &str) -> RasterizedText {
    let mut result = RasterizedText::default();

    let cell = BITMAP_GLYPH_SIZE as i32;
    for (i, ch) in s.chars().enumerate() {
        let origin_x = i as i32 * cell;
        for (row, bits) in bitmap_glyph(ch).iter().enumerate() {
            for col in 0..cell {
                if (bits >> col) & 1 == 0 {
                    continue;
                }
                let x = origin_x + col;
                result.pixels.push((x, row as i32, 0xff));
                result.extend_extent(x, x + 1);
            }
        }
    }
    result
}


/// Draw rasterized text onto the image with its origin at given point.
///
/// Pixels falling outside of the image are clipped.
pub fn stamp(img: &mut RgbaImage, text: &RasterizedText, x: i32, y: i32, color: Color) {
    let (width, height) = img.dimensions();
    for &(px, py, alpha) in &text.pixels {
        let (px, py) = (x + px, y + py);
        if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
            continue;
        }
        img.get_pixel_mut(px as u32, py as u32).blend(&color.to_rgba(alpha));
    }
}


#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use spectral::prelude::*;

    use crate::model::Color;
    use crate::resources::FontHandle;
    use super::{rasterize, stamp};

    #[test]
    fn bitmap_width() {
        let font = FontHandle::bitmap(20);
        // "I" in the bitmap font doesn't touch the edges of its cell,
        // so the measured width is less than the full two cells.
        let text = rasterize("II", &font);
        assert_that!(text.width()).is_greater_than(8);
        assert_that!(text.width()).is_less_than(16);
    }

    #[test]
    fn blank_text() {
        let font = FontHandle::bitmap(20);
        let text = rasterize("   ", &font);
        assert_that!(text.is_blank()).is_true();
        assert_that!(text.width()).is_equal_to(0);
    }

    #[test]
    fn stamp_draws_color() {
        let font = FontHandle::bitmap(20);
        let text = rasterize("H", &font);
        let mut img = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0xff, 0xff]));
        stamp(&mut img, &text, 4, 4, Color::white());

        let white = img.pixels().filter(|p| **p == Rgba([0xff, 0xff, 0xff, 0xff])).count();
        assert_that!(white).is_greater_than(0);
        // Top-left corner is outside of the glyph.
        assert_that!(*img.get_pixel(0, 0)).is_equal_to(Rgba([0, 0, 0xff, 0xff]));
    }

    #[test]
    fn stamp_clips() {
        let font = FontHandle::bitmap(20);
        let text = rasterize("HELLO", &font);
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0xff]));
        stamp(&mut img, &text, -20, -3, Color::white());
        stamp(&mut img, &text, 100, 100, Color::white());
        assert_that!(img.dimensions()).is_equal_to((4, 4));
    }
}
