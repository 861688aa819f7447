//! Module implementing the `Color` type.

use image::Rgba;


/// RGB color of the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    /// Create a white color.
    #[inline]
    pub const fn white() -> Self {
        Color(0xff, 0xff, 0xff)
    }

    /// Create a black color.
    #[inline]
    pub const fn black() -> Self {
        Color(0x0, 0x0, 0x0)
    }
}

impl Color {
    #[inline]
    pub(crate) fn to_rgba(self, alpha: u8) -> Rgba<u8> {
        let Color(r, g, b) = self;
        Rgba([r, g, b, alpha])
    }
}


#[cfg(test)]
mod tests {
    use image::Rgba;
    use spectral::prelude::*;
    use crate::model::constants::{OUTLINE_COLOR, TEXT_COLOR};
    use super::Color;

    #[test]
    fn caption_colors() {
        assert_that!(TEXT_COLOR).is_equal_to(Color(0xff, 0xff, 0xff));
        assert_that!(OUTLINE_COLOR).is_equal_to(Color(0, 0, 0));
    }

    #[test]
    fn rgba_keeps_alpha() {
        assert_that!(Color::white().to_rgba(0x80)).is_equal_to(Rgba([0xff, 0xff, 0xff, 0x80]));
    }
}
