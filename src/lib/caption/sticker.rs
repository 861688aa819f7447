//! Module turning captioned images into chat stickers.
//!
//! A sticker is a square, transparent canvas with the image centered on it,
//! encoded as WebP.

use image::{DynamicImage, GenericImageView, ImageError, ImageFormat, Rgba, RgbaImage};
use image::error::{EncodingError, ImageFormatHint};
use image::imageops::{self, FilterType};


/// Dimensions that an image should be shrunk to in order to fit
/// within a square of given size, preserving its aspect ratio.
///
/// Images that already fit are left at their original size.
/// The side that is not constrained by the bound is rounded
/// (up or down) so that the aspect ratio is kept as closely as possible.
pub fn thumbnail_dimensions(width: u32, height: u32, bound: u32) -> (u32, u32) {
    if (width <= bound && height <= bound) || width == 0 || height == 0 {
        return (width, height);
    }

    let aspect = width as f64 / height as f64;
    let bound_f = bound as f64;
    if aspect <= 1.0 {
        let width = round_aspect(bound_f * aspect, |n| (aspect - n / bound_f).abs());
        (width, bound)
    } else {
        let height = round_aspect(bound_f / aspect, |n| {
            if n == 0.0 { 0.0 } else { (aspect - bound_f / n).abs() }
        });
        (bound, height)
    }
}

fn round_aspect<K: Fn(f64) -> f64>(value: f64, key: K) -> u32 {
    let (floor, ceil) = (value.floor(), value.ceil());
    let best = if key(ceil) < key(floor) { ceil } else { floor };
    best.max(1.0) as u32
}


/// Center the image on a transparent square canvas of given size,
/// shrinking it first if it doesn't fit.
pub fn make_canvas(img: DynamicImage, size: u32) -> RgbaImage {
    let (orig_width, orig_height) = img.dimensions();
    let (width, height) = thumbnail_dimensions(orig_width, orig_height, size);

    let img = if (width, height) != (orig_width, orig_height) {
        debug!("Shrinking {}x{} image to {}x{} for the sticker",
            orig_width, orig_height, width, height);
        img.resize_exact(width, height, FilterType::Lanczos3)
    } else {
        trace!("Image of size {}x{} fits within the sticker as is", width, height);
        img
    };

    let mut canvas = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let x = (size - width) / 2;
    let y = (size - height) / 2;
    trace!("Placing the image on {}x{} canvas at ({}, {})", size, size, x, y);
    imageops::replace(&mut canvas, &img.to_rgba8(), x as i64, y as i64);
    canvas
}


/// Encode the canvas as lossy WebP at given quality (in %).
///
/// Transparency is kept in a separate, losslessly compressed alpha channel.
pub fn encode_webp(canvas: &RgbaImage, quality: u8) -> Result<Vec<u8>, ImageError> {
    let (width, height) = canvas.dimensions();
    let quality = quality.max(1).min(100);
    trace!("Encoding {}x{} sticker as WebP at quality {}", width, height, quality);

    let encoded = webp::Encoder::from_rgba(canvas.as_raw(), width, height)
        .encode_simple(false, quality as f32)
        .map_err(|e| ImageError::Encoding(EncodingError::new(
            ImageFormatHint::Exact(ImageFormat::WebP), format!("{:?}", e))))?;
    debug!("Encoded {}x{} sticker into {} bytes", width, height, encoded.len());
    Ok(encoded.to_vec())
}


#[cfg(test)]
mod tests {
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
    use spectral::prelude::*;

    use super::{encode_webp, make_canvas, thumbnail_dimensions};

    #[test]
    fn small_images_are_not_enlarged() {
        assert_that!(thumbnail_dimensions(400, 300, 512)).is_equal_to((400, 300));
        assert_that!(thumbnail_dimensions(512, 512, 512)).is_equal_to((512, 512));
    }

    #[test]
    fn landscape_is_bounded_by_width() {
        assert_that!(thumbnail_dimensions(1024, 768, 512)).is_equal_to((512, 384));
        assert_that!(thumbnail_dimensions(1000, 333, 512)).is_equal_to((512, 170));
    }

    #[test]
    fn portrait_is_bounded_by_height() {
        assert_that!(thumbnail_dimensions(600, 1200, 512)).is_equal_to((256, 512));
        assert_that!(thumbnail_dimensions(513, 1000, 512)).is_equal_to((263, 512));
    }

    #[test]
    fn extreme_aspect_keeps_one_pixel() {
        assert_that!(thumbnail_dimensions(10000, 1, 512)).is_equal_to((512, 1));
        assert_that!(thumbnail_dimensions(1, 10000, 512)).is_equal_to((1, 512));
    }

    #[test]
    fn canvas_centers_image() {
        let img: DynamicImage = RgbImage::from_pixel(400, 300, Rgb([0, 0, 0xff])).into();
        let canvas = make_canvas(img, 512);
        assert_that!(canvas.dimensions()).is_equal_to((512, 512));

        // Image occupies [56, 456) x [106, 406).
        assert_that!(*canvas.get_pixel(0, 0)).is_equal_to(Rgba([0, 0, 0, 0]));
        assert_that!(*canvas.get_pixel(55, 256)).is_equal_to(Rgba([0, 0, 0, 0]));
        assert_that!(*canvas.get_pixel(56, 106)).is_equal_to(Rgba([0, 0, 0xff, 0xff]));
        assert_that!(*canvas.get_pixel(455, 405)).is_equal_to(Rgba([0, 0, 0xff, 0xff]));
        assert_that!(*canvas.get_pixel(456, 405)).is_equal_to(Rgba([0, 0, 0, 0]));
        assert_that!(*canvas.get_pixel(256, 406)).is_equal_to(Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn canvas_shrinks_large_image() {
        let img: DynamicImage = RgbImage::from_pixel(1024, 256, Rgb([0xff, 0, 0])).into();
        let canvas = make_canvas(img, 512);
        assert_that!(canvas.dimensions()).is_equal_to((512, 512));
        // Shrunk to 512x128, placed at y = 192.
        assert_that!(canvas.get_pixel(256, 191)[3]).is_equal_to(0);
        assert_that!(canvas.get_pixel(256, 256)[3]).is_equal_to(0xff);
        assert_that!(canvas.get_pixel(256, 320)[3]).is_equal_to(0);
    }

    /// Deterministic noise, which doesn't compress well.
    fn noise(width: u32, height: u32) -> RgbaImage {
        let mut state: u32 = 0x1234_5678;
        RgbaImage::from_fn(width, height, |_, _| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
            let [r, g, b, _] = state.to_le_bytes();
            Rgba([r, g, b, 0xff])
        })
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn webp_keeps_transparency() {
        let mut canvas = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 0]));
        canvas.put_pixel(8, 8, Rgba([0xff, 0x80, 0, 0xff]));
        let bytes = encode_webp(&canvas, 80).unwrap();

        assert_that!(image::guess_format(&bytes).unwrap()).is_equal_to(ImageFormat::WebP);
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_that!(decoded.dimensions()).is_equal_to((16, 16));
        assert_that!(decoded.get_pixel(0, 0)[3]).is_equal_to(0);
        assert_that!(decoded.get_pixel(8, 8)[3]).is_equal_to(0xff);
    }

    #[test]
    fn webp_is_lossy_with_alpha() {
        let mut canvas = noise(64, 64);
        canvas.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        let bytes = encode_webp(&canvas, 80).unwrap();

        assert_that!((&bytes[..4])).is_equal_to(&b"RIFF"[..]);
        assert_that!(contains(&bytes, b"VP8 ")).is_true();
        assert_that!(contains(&bytes, b"VP8L")).is_false();
        assert_that!(contains(&bytes, b"ALPH")).is_true();
    }

    #[test]
    fn lower_quality_is_smaller() {
        let canvas = noise(128, 128);
        let default_quality = encode_webp(&canvas, 80).unwrap();
        let full_quality = encode_webp(&canvas, 100).unwrap();
        assert_that!(default_quality.len()).is_less_than(full_quality.len());
    }
}
