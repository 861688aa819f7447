//! Module defining the model types.

mod caption;
mod color;
mod position;

pub use self::caption::{Captions, Error as CaptionBuildError};
pub use self::color::Color;
pub use self::position::Position;
