//! Module which defines the captioning engine.

mod builder;
mod config;

pub use self::builder::{Builder, Error as BuildError};
pub use self::config::Config;


use std::io::Cursor;
use std::sync::Arc;

use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::model::Captions;
use crate::model::constants::STICKER_SIZE;
use crate::resources::FontResolver;
use super::error::CaptionError;
use super::output::CaptionOutput;
use super::sticker;
use super::task::CaptionTask;


/// Image captioning engine.
///
/// The engine is thread-safe (`Sync`) since normally you'd want the captioning
/// to be performed in a background thread.
///
/// *Note*: `Engine` implements `Clone`
/// by merely cloning a shared reference to the underlying object.
#[derive(Clone, Debug)]
pub struct Engine {
    inner: Arc<Inner>,
}

/// Shared state of the engine.
#[derive(Debug)]
struct Inner {
    config: Config,
    fonts: FontResolver,
}

impl From<Config> for Engine {
    fn from(config: Config) -> Self {
        let fonts = FontResolver::new(config.font_paths.iter().cloned());
        Engine{inner: Arc::new(Inner{config, fonts})}
    }
}

impl Default for Engine {
    /// Create an Engine with the default configuration.
    ///
    /// For other ways of creating `Engine`, see the `EngineBuilder`.
    fn default() -> Self {
        Engine::from(Config::default())
    }
}

impl Engine {
    #[inline]
    pub fn new() -> Self {
        Engine::default()
    }

    /// Configuration that the `Engine` was created with.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}

// Captioning.
impl Engine {
    /// Draw the captions over given image.
    ///
    /// The result is an opaque RGB image of the same size as the original,
    /// which itself is left intact.
    #[inline]
    pub fn compose(&self, img: &DynamicImage, captions: &Captions) -> DynamicImage {
        CaptionTask::new(captions, &self.inner.fonts).perform(img)
    }

    /// Caption the image and encode the result as PNG.
    pub fn render_meme(&self, img: &DynamicImage,
                       captions: &Captions) -> Result<CaptionOutput, CaptionError> {
        ensure_not_empty(img)?;
        let meme = self.compose(img, captions);

        let mut bytes = vec![];
        meme.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        debug!("Encoded {}x{} meme as PNG ({} bytes)", meme.width(), meme.height(), bytes.len());
        Ok(CaptionOutput::new(ImageFormat::Png, bytes))
    }

    /// Caption the image and turn it into a WebP sticker.
    ///
    /// The sticker is a square canvas with the captioned image shrunk to fit
    /// (if necessary) and centered on it. The rest of the canvas is transparent.
    pub fn pack(&self, img: &DynamicImage,
                captions: &Captions) -> Result<CaptionOutput, CaptionError> {
        ensure_not_empty(img)?;
        let meme = self.compose(img, captions);

        let canvas = sticker::make_canvas(meme, STICKER_SIZE);
        let bytes = sticker::encode_webp(&canvas, self.inner.config.sticker_quality)?;
        Ok(CaptionOutput::new(ImageFormat::WebP, bytes))
    }
}

fn ensure_not_empty(img: &DynamicImage) -> Result<(), CaptionError> {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        warn!("Refusing to caption an empty {}x{} image", width, height);
        return Err(CaptionError::EmptyImage{width, height});
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use image::{DynamicImage, GenericImageView, ImageFormat, Rgb, RgbImage};
    use spectral::prelude::*;

    use crate::caption::CaptionError;
    use crate::model::Captions;
    use super::{Builder, Engine};

    fn blue_image(width: u32, height: u32) -> DynamicImage {
        RgbImage::from_pixel(width, height, Rgb([0, 0, 0xff])).into()
    }

    fn bitmap_engine() -> Engine {
        Builder::new().font_paths(Vec::<&str>::new()).build().unwrap()
    }

    #[test]
    fn thread_safe() {
        fn assert_sync<T: Sync>() {}
        fn assert_send<T: Send>() {}

        assert_sync::<Engine>();
        assert_send::<Engine>();
    }

    #[test]
    fn compose_keeps_dimensions() {
        let img = blue_image(400, 300);
        let captions = Captions::new("HELLO", "WORLD").unwrap();
        let result = Engine::default().compose(&img, &captions);
        assert_that!(result.dimensions()).is_equal_to((400, 300));
    }

    #[test]
    fn meme_is_png() {
        let img = blue_image(120, 80);
        let captions = Captions::new("top", "bottom").unwrap();
        let output = bitmap_engine().render_meme(&img, &captions).unwrap();

        assert_that!(output.format()).is_equal_to(ImageFormat::Png);
        assert_that!(image::guess_format(&output).unwrap()).is_equal_to(ImageFormat::Png);
        let decoded = image::load_from_memory(&output).unwrap();
        assert_that!(decoded.dimensions()).is_equal_to((120, 80));
    }

    #[test]
    fn sticker_is_bounded_webp() {
        let img = blue_image(400, 300);
        let captions = Captions::new("HELLO", "WORLD").unwrap();
        let output = Engine::default().pack(&img, &captions).unwrap();

        assert_that!(image::guess_format(&output).unwrap()).is_equal_to(ImageFormat::WebP);
        let decoded = image::load_from_memory(&output).unwrap();
        assert_that!(decoded.width()).is_less_than_or_equal_to(512);
        assert_that!(decoded.height()).is_less_than_or_equal_to(512);
    }

    #[test]
    fn sticker_of_large_image() {
        let img = blue_image(2000, 500);
        let captions = Captions::top("wide").unwrap();
        let output = bitmap_engine().pack(&img, &captions).unwrap();
        let decoded = image::load_from_memory(&output).unwrap();
        assert_that!(decoded.dimensions()).is_equal_to((512, 512));
    }

    #[test]
    fn sticker_without_captions_centers_image() {
        let img = blue_image(100, 50);
        let output = bitmap_engine().pack(&img, &Captions::default()).unwrap();
        let decoded = image::load_from_memory(&output).unwrap().to_rgba8();

        assert_that!(decoded.dimensions()).is_equal_to((512, 512));
        assert_that!(decoded.get_pixel(0, 0)[3]).is_equal_to(0);
        // Image occupies [206, 306) x [231, 281).
        let center = decoded.get_pixel(256, 256);
        assert_that!(center[3]).is_equal_to(0xff);
        // Lossy encoding only approximates the colors.
        assert_that!(center[2]).is_greater_than(0xf0);
        assert_that!(center[0]).is_less_than(0x10);
        assert_that!(decoded.get_pixel(205, 256)[3]).is_equal_to(0);
        assert_that!(decoded.get_pixel(256, 230)[3]).is_equal_to(0);
    }

    #[test]
    fn empty_image_is_rejected() {
        let engine = bitmap_engine();
        let captions = Captions::top("nothing to see").unwrap();
        let img = blue_image(0, 10);

        match engine.pack(&img, &captions) {
            Err(CaptionError::EmptyImage{width, height}) => {
                assert_that!((width, height)).is_equal_to((0, 10));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_that!(engine.render_meme(&img, &captions).is_err()).is_true();
        assert_that!(engine.compose(&img, &captions).dimensions()).is_equal_to((0, 10));
    }

    #[test]
    fn clones_share_configuration() {
        let engine = Builder::new().sticker_quality(50).build().unwrap();
        let clone = engine.clone();
        assert_that!(clone.config().sticker_quality).is_equal_to(50);
    }
}
