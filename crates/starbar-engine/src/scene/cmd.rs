use crate::scene::ImageCmd;

/// Renderer-agnostic draw command stream.
///
/// Star widgets only ever draw pre-rendered raster images, so this holds a
/// single variant. New primitives get their own module under `scene` plus a
/// matching branch in `render::raster`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Image(ImageCmd),
}
