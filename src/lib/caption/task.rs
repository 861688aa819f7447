//! Module implementing the actual captioning task.
//! Most of the compositing logic lives here.

use image::{DynamicImage, RgbaImage};

use crate::model::{Captions, Position};
use crate::resources::FontResolver;
use crate::util::text;
use super::layout::{self, wrap};
use super::render::render_caption;


/// Represents a single captioning task.
///
/// This is a separate struct so that the inputs of the task
/// can be easily carried between its methods.
pub(super) struct CaptionTask<'t> {
    captions: &'t Captions,
    fonts: &'t FontResolver,
}

impl<'t> CaptionTask<'t> {
    #[inline]
    pub fn new(captions: &'t Captions, fonts: &'t FontResolver) -> Self {
        CaptionTask{captions, fonts}
    }
}

impl<'t> CaptionTask<'t> {
    /// Perform the captioning task.
    ///
    /// Returns a new, opaque image of the same size as the original.
    pub fn perform(&self, img: &DynamicImage) -> DynamicImage {
        debug!("Captioning {}x{} image with {:?}", img.width(), img.height(), self.captions);

        // Rendering text requires alpha blending.
        let mut canvas = img.to_rgba8();
        if self.captions.has_text() {
            for &position in Position::ALL.iter() {
                self.draw_caption(&mut canvas, position);
            }
        }

        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(canvas).to_rgb8())
    }

    /// Draw a single caption on the canvas.
    fn draw_caption(&self, canvas: &mut RgbaImage, position: Position) {
        let caption = self.captions.text_at(position);
        if caption.is_empty() {
            debug!("Empty {} caption, skipping.", position);
            return;
        }
        debug!("Rendering {} caption: {:?}", position, caption);

        let (width, _) = canvas.dimensions();
        let font_size = layout::font_size(width);
        let font = self.fonts.resolve(font_size);
        trace!("Using {} font at size {}",
            font.path().map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in".into()),
            font_size);

        let block = wrap(caption, width, font_size);
        for line in block.lines() {
            text::check(&font, line);
        }
        render_caption(canvas, &block, position, &font);
    }
}
