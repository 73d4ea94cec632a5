//! Builder Utilities - Small helpers shared by the style-editing panels
//!
//! This crate provides:
//! - Pixel unit parsing and formatting (`"12px"` <-> `12.0`)
//! - Hex <-> HSV color conversion and pastel swatch generation
//! - An awaitable yes/no confirmation prompt
//!
//! None of the parsing helpers fail: malformed input degrades to `0` or black.

pub mod units;
pub mod color;
pub mod prompt;

pub use units::*;
pub use color::*;
pub use prompt::*;
