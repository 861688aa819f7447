//! Module defining the caption position enum.

use std::fmt;


/// Vertical position of a caption on the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Position {
    /// Caption anchored at the top edge.
    Top,
    /// Caption anchored at the bottom edge.
    Bottom,
}

impl Position {
    /// All positions, in the order captions are rendered.
    pub const ALL: [Position; 2] = [Position::Top, Position::Bottom];
}

impl fmt::Display for Position {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Position::Top => write!(fmt, "top"),
            Position::Bottom => write!(fmt, "bottom"),
        }
    }
}
