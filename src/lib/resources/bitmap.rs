//! Built-in bitmap font, used when no scalable font can be loaded.

use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};


/// Width & height of every glyph in the bitmap font, in pixels.
pub const GLYPH_SIZE: u32 = 8;

/// Character rendered in place of those the bitmap font doesn't cover.
const REPLACEMENT_CHAR: char = '?';


/// Look up the bitmap of given character.
///
/// Each byte is one row of the glyph (top to bottom),
/// with the least significant bit being the leftmost pixel.
pub fn glyph(ch: char) -> [u8; 8] {
    BASIC_FONTS.get(ch)
        .or_else(|| LATIN_FONTS.get(ch))
        .or_else(|| BASIC_FONTS.get(REPLACEMENT_CHAR))
        .unwrap_or([0; 8])
}


#[cfg(test)]
mod tests {
    use spectral::prelude::*;
    use super::glyph;

    #[test]
    fn space_is_blank() {
        assert_that!(glyph(' ')).is_equal_to([0; 8]);
    }

    #[test]
    fn letters_have_pixels() {
        for ch in "HELLO WORLD".chars().filter(|c| !c.is_whitespace()) {
            assert_that!(glyph(ch).iter().any(|&row| row != 0)).is_true();
        }
    }

    #[test]
    fn unknown_uses_replacement() {
        assert_that!(glyph('\u{1F600}')).is_equal_to(glyph('?'));
    }
}
