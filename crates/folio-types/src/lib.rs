//! Foundation types for FOLIO_TERM.
//!
//! This crate contains the types shared by all FOLIO_TERM crates: error
//! types, color values, and the input keys the engine dispatches on.

pub mod color;
pub mod error;
pub mod input;

pub use color::Color;
pub use error::{FolioError, Result};
pub use input::Key;
