//! Captioning error.

use image::ImageError;


/// Error that may occur during the captioning.
///
/// Laying out and drawing the text cannot fail by itself,
/// so this only covers the input image and encoding of the result.
#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    /// The image has no pixels to caption.
    #[error("cannot caption an empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// Failed to encode the final image.
    #[error("failed to encode the final image: {0}")]
    Encode(#[from] ImageError),
}
