//! Module for resolving fonts that captions are rendered with.

use std::fmt;
use std::fs;
use std::io;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use rusttype::{self, GlyphId, Scale};
use thiserror::Error;

use super::Loader;


/// Fonts tried (in order) when looking for a scalable font.
///
/// These are bold sans-serif fonts found in common Linux distributions.
pub const DEFAULT_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
];


/// Scalable font that can be used to caption images.
pub struct Font(rusttype::Font<'static>);

impl Deref for Font {
    type Target = rusttype::Font<'static>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl From<rusttype::Font<'static>> for Font {
    fn from(font: rusttype::Font<'static>) -> Self {
        Font(font)
    }
}
impl fmt::Debug for Font {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "Font({} glyphs)", self.0.glyph_count())
    }
}

impl Font {
    /// Scale that makes the font's em square `size` pixels tall.
    ///
    /// rusttype measures scale as the distance between ascent & descent,
    /// which is usually somewhat larger than the em square.
    pub fn scale_for_size(&self, size: u32) -> Scale {
        let units_per_em = self.0.units_per_em() as f32;
        let v_metrics = self.0.v_metrics_unscaled();
        let height = v_metrics.ascent - v_metrics.descent;
        if units_per_em <= 0.0 || height <= 0.0 {
            return Scale::uniform(size as f32);
        }
        Scale::uniform(size as f32 * height / units_per_em)
    }

    /// Characters from given text which the font has no glyphs for.
    pub fn missing_chars(&self, text: &str) -> Vec<char> {
        let mut missing: Vec<char> = text.chars()
            .filter(|c| !c.is_whitespace())
            .filter(|&c| self.0.glyph(c).id() == GlyphId(0))
            .collect();
        missing.sort();
        missing.dedup();
        missing
    }
}


/// Typeface of a resolved font.
#[derive(Debug)]
pub enum Face {
    /// Scalable (TrueType/OpenType) font loaded from a file.
    Scalable(Font),
    /// The built-in, fixed-size bitmap font.
    Bitmap,
}

/// Font resolved at a particular pixel size.
///
/// Handles are meant to be short-lived: they are resolved for a single
/// rendering operation and dropped afterwards.
#[derive(Debug)]
pub struct FontHandle {
    face: Face,
    size: u32,
    path: Option<PathBuf>,
}

impl FontHandle {
    /// Create a handle for a scalable font loaded from given path.
    #[inline]
    pub fn scalable<P: Into<PathBuf>>(font: Font, size: u32, path: P) -> Self {
        FontHandle{face: Face::Scalable(font), size, path: Some(path.into())}
    }

    /// Create a handle for the built-in bitmap font.
    ///
    /// The bitmap font has a fixed glyph size;
    /// `size` is only recorded for layout purposes.
    #[inline]
    pub fn bitmap(size: u32) -> Self {
        FontHandle{face: Face::Bitmap, size, path: None}
    }
}

impl FontHandle {
    #[inline]
    pub fn face(&self) -> &Face { &self.face }

    /// The pixel size the font was requested at.
    #[inline]
    pub fn size(&self) -> u32 { self.size }

    /// Path of the font file, unless it's the built-in font.
    #[inline]
    pub fn path(&self) -> Option<&Path> { self.path.as_ref().map(|p| p.as_path()) }

    #[inline]
    pub fn is_bitmap(&self) -> bool {
        match self.face { Face::Bitmap => true, _ => false }
    }
}


/// Error that may occur when loading a font file.
#[derive(Debug, Error)]
pub enum FontError {
    /// The font file couldn't be read.
    #[error("cannot read font file {}: {}", .path.display(), .error)]
    Io { path: PathBuf, #[source] error: io::Error },
    /// The file was read but doesn't contain a usable font.
    #[error("unsupported or malformed font file {}", .path.display())]
    Parse { path: PathBuf },
}


/// Loader of scalable fonts from files.
#[derive(Clone, Copy, Debug, Default)]
pub struct FontLoader;

impl Loader for FontLoader {
    type Item = Font;
    type Err = FontError;

    fn load(&self, path: &Path) -> Result<Font, Self::Err> {
        let bytes = fs::read(path)
            .map_err(|error| FontError::Io{path: path.to_owned(), error})?;
        let font = rusttype::Font::try_from_vec(bytes)
            .ok_or_else(|| FontError::Parse{path: path.to_owned()})?;
        debug!("Font {} loaded successfully", path.display());
        Ok(font.into())
    }
}


/// Picks the font to render captions with.
///
/// Tries a list of candidate font files in order,
/// and falls back to the built-in bitmap font if none of them loads.
/// Nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct FontResolver<L = FontLoader>
    where L: Loader<Item=Font>
{
    loader: L,
    candidates: Vec<PathBuf>,
}

impl Default for FontResolver {
    fn default() -> Self {
        FontResolver::new(DEFAULT_FONT_PATHS.iter().map(PathBuf::from))
    }
}

impl FontResolver {
    /// Create a resolver which tries given font files.
    #[inline]
    pub fn new<I, P>(candidates: I) -> Self
        where I: IntoIterator<Item=P>, P: Into<PathBuf>
    {
        FontResolver::with_loader(FontLoader, candidates)
    }
}

impl<L: Loader<Item=Font>> FontResolver<L> {
    /// Create a resolver which loads the candidate fonts using given loader.
    pub fn with_loader<I, P>(loader: L, candidates: I) -> Self
        where I: IntoIterator<Item=P>, P: Into<PathBuf>
    {
        FontResolver{
            loader,
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    /// Font files that the resolver tries, in order.
    #[inline]
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }
}

impl<L> FontResolver<L>
    where L: Loader<Item=Font>, L::Err: fmt::Display
{
    /// Resolve a font at given pixel size.
    ///
    /// This never fails: if no candidate font can be loaded,
    /// the built-in bitmap font is returned.
    pub fn resolve(&self, size: u32) -> FontHandle {
        for path in &self.candidates {
            match self.loader.load(path) {
                Ok(font) => {
                    trace!("Resolved font {} at size {}", path.display(), size);
                    return FontHandle::scalable(font, size, path.clone());
                }
                Err(e) => debug!("Skipping font candidate: {}", e),
            }
        }
        debug!("No scalable font could be loaded out of {} candidate(s), \
            using the built-in bitmap font", self.candidates.len());
        FontHandle::bitmap(size)
    }
}
