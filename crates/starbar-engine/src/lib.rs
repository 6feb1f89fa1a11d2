//! starbar engine crate.
//!
//! Owns the renderer-agnostic pieces used by the widget layer: geometry,
//! paint, the recorded draw stream, and a CPU rasterizer that turns a draw
//! stream into pixels.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
