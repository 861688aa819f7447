//! Module implementing the builder for `Engine`.

use std::path::PathBuf;

use super::config::Config;
use super::Engine;


/// Builder for `Engine`.
#[derive(Debug, Default)]
#[must_use = "unused builder which must be used"]
pub struct Builder {
    errors: Vec<Error>,

    font_paths: Option<Vec<PathBuf>>,
    sticker_quality: Option<u8>,
}

impl Builder {
    /// Create a new `Builder`.
    #[inline]
    pub fn new() -> Self {
        Builder::default()
    }
}

// Setters.
impl Builder {
    /// Set the paths of fonts that the `Engine` will try to use, in order of preference.
    ///
    /// An empty list means that only the built-in bitmap font will be used.
    pub fn font_paths<I, P>(mut self, paths: I) -> Self
        where I: IntoIterator<Item=P>, P: Into<PathBuf>
    {
        self.font_paths = Some(paths.into_iter().map(Into::into).collect()); self
    }

    /// Set the quality percentage of WebP stickers generated by the `Engine`.
    #[inline]
    pub fn sticker_quality(mut self, quality: u8) -> Self {
        if quality < 1 || quality > 100 {
            return self.err(Error::InvalidQuality(quality));
        }
        self.sticker_quality = Some(quality); self
    }
}

// Validation & building.
impl Builder {
    /// Build the `Engine`.
    pub fn build(self) -> Result<Engine, Error> {
        self.check_errors()?;
        Ok(Engine::from(self.build_config()))
    }

    #[doc(hidden)]
    fn build_config(self) -> Config {
        let mut config = Config::default();
        if let Some(paths) = self.font_paths {
            config.font_paths = paths;
        }
        if let Some(quality) = self.sticker_quality {
            config.sticker_quality = quality;
        }
        config
    }

    #[doc(hidden)]
    fn check_errors(&self) -> Result<(), Error> {
        // TODO: consider making an Error::Multiple variant to return them all
        match self.errors.first() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    #[doc(hidden)]
    fn err(mut self, error: Error) -> Self {
        self.errors.push(error); self
    }
}


/// Error that resulted from misconfiguration of the `Engine` via its `Builder`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Sticker quality outside of the 1-100% range.
    #[error("invalid sticker quality: {0}% (expected 1-100%)")]
    InvalidQuality(u8),
}


#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use spectral::prelude::*;

    use crate::model::constants::DEFAULT_STICKER_QUALITY;
    use super::{Builder, Error};

    #[test]
    fn defaults() {
        let engine = Builder::new().build().unwrap();
        assert_that!(engine.config().sticker_quality).is_equal_to(DEFAULT_STICKER_QUALITY);
        assert_that!(engine.config().font_paths).has_length(3);
    }

    #[test]
    fn custom_font_paths() {
        let engine = Builder::new().font_paths(vec!["/tmp/a.ttf", "/tmp/b.ttf"]).build().unwrap();
        assert_that!(engine.config().font_paths).is_equal_to(
            vec![PathBuf::from("/tmp/a.ttf"), PathBuf::from("/tmp/b.ttf")]);
    }

    #[test]
    fn sticker_quality() {
        let engine = Builder::new().sticker_quality(100).build().unwrap();
        assert_that!(engine.config().sticker_quality).is_equal_to(100);
    }

    #[test]
    fn invalid_sticker_quality() {
        assert_that!(Builder::new().sticker_quality(0).build().unwrap_err())
            .is_equal_to(Error::InvalidQuality(0));
        assert_that!(Builder::new().sticker_quality(101).build().unwrap_err())
            .is_equal_to(Error::InvalidQuality(101));
    }

    #[test]
    fn first_error_is_reported() {
        let result = Builder::new().sticker_quality(200).sticker_quality(0).build();
        assert_that!(result.unwrap_err()).is_equal_to(Error::InvalidQuality(200));
    }
}
