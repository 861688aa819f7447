//! Module implementing image captioning.

mod engine;
mod error;
mod layout;
mod output;
mod render;
mod sticker;
mod task;


pub use self::engine::{Builder as EngineBuilder,
                       BuildError as EngineBuildError,
                       Config as EngineConfig,
                       Engine};
pub use self::error::CaptionError;
pub use self::layout::{LineBlock, font_size, line_height, max_line_chars, wrap, wrap_lines};
pub use self::output::CaptionOutput;
pub use self::render::{block_top, line_left, outline_thickness};
pub use self::sticker::thumbnail_dimensions;
