//! Rendering of the final [`WordReport`](crate::models::WordReport).
//!
//! # Submodules
//!
//! - [`text`]: ranked `word count` lines for reading in a terminal
//! - [`json`]: the whole report as pretty-printed JSON
//!
//! Both write to any [`std::io::Write`]; the binary hands them stdout.

pub mod json;
pub mod text;
