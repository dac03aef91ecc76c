//! Color math and brand palette derivation.

pub mod color;
pub mod files;
pub mod scheme;

pub use color::{Color, ColorError, HexCase};
pub use scheme::{Palette, DEFAULT_PRIMARY, DEFAULT_SECONDARY, MIN_TEXT_CONTRAST};
