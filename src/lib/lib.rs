//!
//! memestudio  -- Captions on demand
//!

             extern crate font8x8;
             extern crate image;
#[macro_use] extern crate log;
             extern crate mime;
             extern crate rusttype;
             extern crate thiserror;
             extern crate webp;


mod caption;
mod model;
mod resources;
mod util;


pub use caption::*;
pub use model::*;
pub use resources::*;
