//! Module implementing the `Captions` type.

use std::fmt;

use thiserror::Error;

use crate::model::constants::MAX_CAPTION_LENGTH;
use super::position::Position;


/// Pair of caption texts rendered over an image.
///
/// Either text may be empty, in which case nothing is drawn at its position.
/// Use `Captions::new` to create it with the length limits enforced.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Captions {
    top: String,
    bottom: String,
}

impl Captions {
    /// Create `Captions` from the top & bottom texts.
    ///
    /// Fails if either text is longer than `MAX_CAPTION_LENGTH` characters.
    pub fn new<T, B>(top: T, bottom: B) -> Result<Self, Error>
        where T: Into<String>, B: Into<String>
    {
        let top = top.into();
        let bottom = bottom.into();
        validate(Position::Top, &top)?;
        validate(Position::Bottom, &bottom)?;
        Ok(Captions{top, bottom})
    }

    /// Create `Captions` with only the top text.
    #[inline]
    pub fn top<T: Into<String>>(text: T) -> Result<Self, Error> {
        Self::new(text, "")
    }

    /// Create `Captions` with only the bottom text.
    #[inline]
    pub fn bottom<B: Into<String>>(text: B) -> Result<Self, Error> {
        Self::new("", text)
    }
}

impl Captions {
    /// Text of the caption at given position.
    #[inline]
    pub fn text_at(&self, position: Position) -> &str {
        match position {
            Position::Top => &self.top,
            Position::Bottom => &self.bottom,
        }
    }

    /// Top caption text.
    #[inline]
    pub fn top_text(&self) -> &str { &self.top }

    /// Bottom caption text.
    #[inline]
    pub fn bottom_text(&self) -> &str { &self.bottom }

    /// Whether there is any text to render.
    #[inline]
    pub fn has_text(&self) -> bool {
        !self.top.is_empty() || !self.bottom.is_empty()
    }
}

impl fmt::Debug for Captions {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut ds = fmt.debug_struct("Captions");
        if !self.top.is_empty() {
            ds.field("top", &self.top);
        }
        if !self.bottom.is_empty() {
            ds.field("bottom", &self.bottom);
        }
        ds.finish()
    }
}


fn validate(position: Position, text: &str) -> Result<(), Error> {
    let length = text.chars().count();
    if length > MAX_CAPTION_LENGTH {
        return Err(Error::TooLong{position, length});
    }
    Ok(())
}


/// Error while creating `Captions`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Caption text too long.
    #[error("{position} caption text too long: {length} > {max}", max = MAX_CAPTION_LENGTH)]
    TooLong { position: Position, length: usize },
}
