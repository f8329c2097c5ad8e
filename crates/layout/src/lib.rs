//! Layout decision engine.
//!
//! Maps a content analysis and a category slug to a `CustomLayout`. Every
//! field is computed from the analysis and category alone, never from
//! another field's decided value, so the result is deterministic.

#![warn(missing_docs)]

pub mod palette;
pub mod engine;

pub use engine::LayoutEngine;
pub use palette::{normalize_category, color_scheme};
