//! Module handling the resources used for captioning.

mod bitmap;
mod fonts;


pub use self::fonts::{DEFAULT_FONT_PATHS, Face, Font, FontError, FontHandle, FontLoader,
                      FontResolver};
pub(crate) use self::bitmap::{GLYPH_SIZE as BITMAP_GLYPH_SIZE, glyph as bitmap_glyph};


use std::path::Path;


/// Loader of resources from some external source.
pub trait Loader {
    /// Type of resources that this loader can load.
    type Item;
    /// Error that may occur while loading the resource.
    type Err;

    /// Load a resource from given path.
    fn load(&self, path: &Path) -> Result<Self::Item, Self::Err>;
}
