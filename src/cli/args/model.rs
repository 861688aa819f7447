//! Data structures for command-line arguments.

use std::path::PathBuf;

use memestudio::{CaptionBuildError, Captions};


/// Structure to hold options received from the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Verbosity of the logging output.
    ///
    /// Corresponds to the number of times the -v flag has been passed.
    /// If -q has been used instead, this will be negative.
    pub verbosity: isize,

    /// Path to the image that should be captioned.
    pub input_path: PathBuf,
    /// Captions to put on the image.
    pub captions: Captions,
    /// Whether to produce a WebP sticker rather than a PNG image.
    pub sticker: bool,
    /// Quality of the sticker (in %), if different than the default.
    pub sticker_quality: Option<u8>,
    /// Fonts to try before falling back to the built-in one.
    ///
    /// If empty, the default list of system fonts is used.
    pub font_paths: Vec<PathBuf>,
    /// Path to write the finished image to.
    ///
    /// If absent, it shall be written to standard output.
    pub output_path: Option<PathBuf>,
}

#[allow(dead_code)]
impl Options {
    #[inline]
    pub fn verbose(&self) -> bool { self.verbosity > 0 }
    #[inline]
    pub fn quiet(&self) -> bool { self.verbosity < 0 }
}


/// Error that can occur while parsing of command line arguments.
#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    /// General error when parsing the arguments.
    #[error("invalid arguments: {0}")]
    Parse(#[from] clap::Error),
    /// Caption text that cannot be rendered.
    #[error("invalid caption: {0}")]
    Caption(#[from] CaptionBuildError),
}
