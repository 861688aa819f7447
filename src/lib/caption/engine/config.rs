//! Module with captioning engine configuration.

use std::path::PathBuf;

use crate::model::constants::DEFAULT_STICKER_QUALITY;
use crate::resources::DEFAULT_FONT_PATHS;


/// Structure holding configuration for the `Engine`.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Candidate paths of TrueType fonts, in order of preference.
    ///
    /// If none of them can be loaded, captions are drawn with a built-in bitmap font.
    pub font_paths: Vec<PathBuf>,
    /// Quality of the generated WebP stickers (in %).
    pub sticker_quality: u8,
}

impl Default for Config {
    /// Initialize Config with default values.
    fn default() -> Self {
        Config {
            font_paths: DEFAULT_FONT_PATHS.iter().map(PathBuf::from).collect(),
            sticker_quality: DEFAULT_STICKER_QUALITY,
        }
    }
}
