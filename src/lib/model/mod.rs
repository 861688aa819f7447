//! Module defining the data model.

pub mod constants;
mod types;

pub use self::types::*;
