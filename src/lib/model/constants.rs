//! Module defining constants relevant to the data model.

use super::types::Color;


/// Color of the caption text.
pub const TEXT_COLOR: Color = Color::white();
/// Color of the caption outline.
pub const OUTLINE_COLOR: Color = Color::black();

/// Maximum length (in Unicode codepoints) of a single caption text.
pub const MAX_CAPTION_LENGTH: usize = 300;


/// Smallest font size (in pixels) that captions are rendered with.
pub const MIN_FONT_SIZE: u32 = 20;
/// Image width is divided by this to obtain the font size.
pub const FONT_SIZE_DIVISOR: u32 = 12;
/// Lower bound of the character limit of a single caption line.
pub const MIN_LINE_CHARS: u32 = 10;
/// Extra vertical space added to the font size to get the line height.
pub const LINE_LEADING: u32 = 6;

/// Distance between the top edge of the image and the top caption.
pub const TOP_MARGIN: i32 = 10;
/// Distance between the bottom caption and the bottom edge of the image.
pub const BOTTOM_MARGIN: i32 = 16;

/// Thinnest outline (in pixels) drawn around caption text.
pub const MIN_OUTLINE_THICKNESS: u32 = 2;
/// Font size is divided by this to obtain the outline thickness.
pub const OUTLINE_THICKNESS_DIVISOR: u32 = 20;


/// Width & height of the square sticker canvas.
pub const STICKER_SIZE: u32 = 512;
/// Default quality (in %) of the encoded sticker.
pub const DEFAULT_STICKER_QUALITY: u8 = 80;
