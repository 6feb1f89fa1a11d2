//! Paint model shared between widgets and the rasterizer.
//!
//! Scope:
//! - color representation (premultiplied alpha)
//! - color filters applied to images at draw time

pub mod color;
pub mod filter;

pub use color::Color;
pub use filter::ColorFilter;
