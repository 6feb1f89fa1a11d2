//! Coordinate and geometry types shared by the rasterizer and the widget layer.
//!
//! Canonical CPU space:
//! - pixels after density scaling (`px = dp × density`)
//! - origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
