//! Shared constants and geometry.

pub mod constants;
pub mod geometry;

pub use constants::*;
pub use geometry::Rect;
