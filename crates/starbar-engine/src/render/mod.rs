//! Rendering subsystem.
//!
//! Renderers consume `scene` draw streams and produce pixels. The only
//! backend is a CPU rasterizer writing into an `image::RgbaImage`, which keeps
//! the widget layer testable and usable headless.

mod raster;

pub use raster::RasterRenderer;
