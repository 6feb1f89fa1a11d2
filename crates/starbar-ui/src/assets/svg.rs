use std::collections::HashMap;

use image::{Rgba, RgbaImage};
use resvg::tiny_skia;
use resvg::usvg;

use crate::assets::{AssetError, AssetProvider, FillLevel};

/// Five-pointed star on a 24×24 grid.
const STAR_PATH: &str = "M12 2 L14.81 8.63 L22 9.24 L16.54 13.97 L18.18 21 L12 17.27 L5.82 21 L7.46 13.97 L2 9.24 L9.19 8.63 Z";

/// Canonical edge length, in pixels, that SVG sources are rasterized at.
pub const DEFAULT_CANONICAL_SIZE: u32 = 48;

/// Provider that rasterizes SVG sources with `resvg`.
///
/// [`SvgAssetProvider::builtin`] ships a monochrome star for every level: an
/// outline, filled from the left by the level's fraction. Colors in the
/// artwork do not matter, widgets tint by coverage.
#[derive(Debug, Clone)]
pub struct SvgAssetProvider {
    sources: HashMap<FillLevel, String>,
    canonical_size: u32,
}

impl SvgAssetProvider {
    /// Provider with no sources; every level is missing until added.
    pub fn empty() -> Self {
        Self { sources: HashMap::new(), canonical_size: DEFAULT_CANONICAL_SIZE }
    }

    /// Provider with the built-in star for every level.
    pub fn builtin() -> Self {
        FillLevel::ALL
            .iter()
            .fold(Self::empty(), |p, &level| p.with_source(level, builtin_svg(level)))
    }

    /// Replaces the SVG document used for `level`.
    pub fn with_source(mut self, level: FillLevel, svg: impl Into<String>) -> Self {
        self.sources.insert(level, svg.into());
        self
    }

    pub fn without(mut self, level: FillLevel) -> Self {
        self.sources.remove(&level);
        self
    }

    /// Edge length of the rasterized square. Zero is bumped to one pixel.
    pub fn canonical_size(mut self, px: u32) -> Self {
        self.canonical_size = px.max(1);
        self
    }

    fn rasterize(&self, level: FillLevel, src: &str) -> Result<RgbaImage, AssetError> {
        let invalid = |message: String| AssetError::InvalidSvg { level, message };

        let tree = usvg::Tree::from_str(src, &usvg::Options::default())
            .map_err(|e| invalid(e.to_string()))?;

        let size = self.canonical_size;
        let mut pixmap = tiny_skia::Pixmap::new(size, size)
            .ok_or_else(|| invalid(format!("cannot allocate a {size}x{size} pixmap")))?;

        let natural = tree.size();
        let transform = tiny_skia::Transform::from_scale(
            size as f32 / natural.width(),
            size as f32 / natural.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // tiny-skia stores premultiplied pixels; image buffers are straight.
        let mut out = RgbaImage::new(size, size);
        for (dst, src) in out.pixels_mut().zip(pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Ok(out)
    }
}

impl Default for SvgAssetProvider {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AssetProvider for SvgAssetProvider {
    fn star_image(&self, level: FillLevel) -> Result<RgbaImage, AssetError> {
        let src = self.sources.get(&level).ok_or(AssetError::MissingAsset(level))?;
        self.rasterize(level, src)
    }
}

/// Built-in SVG document for `level`.
pub fn builtin_svg(level: FillLevel) -> String {
    let fill = match level {
        FillLevel::Empty => String::new(),
        FillLevel::Full => format!(r##"<path d="{STAR_PATH}" fill="#000000"/>"##),
        partial => format!(
            r##"<clipPath id="part"><rect x="0" y="0" width="{w}" height="24"/></clipPath><path d="{STAR_PATH}" fill="#000000" clip-path="url(#part)"/>"##,
            w = 24.0 * partial.fraction(),
        ),
    };
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24">{fill}<path d="{STAR_PATH}" fill="none" stroke="#000000" stroke-width="1.5" stroke-linejoin="round"/></svg>"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha(img: &RgbaImage, x: u32, y: u32) -> u8 {
        img.get_pixel(x, y).0[3]
    }

    #[test]
    fn builtin_renders_every_level_at_canonical_size() {
        let provider = SvgAssetProvider::builtin();
        for level in FillLevel::ALL {
            let img = provider.star_image(level).unwrap();
            assert_eq!(img.dimensions(), (DEFAULT_CANONICAL_SIZE, DEFAULT_CANONICAL_SIZE));
        }
    }

    #[test]
    fn full_star_is_solid_and_empty_star_is_hollow() {
        let provider = SvgAssetProvider::builtin();
        let full = provider.star_image(FillLevel::Full).unwrap();
        let empty = provider.star_image(FillLevel::Empty).unwrap();
        assert_eq!(alpha(&full, 24, 24), 255);
        assert_eq!(alpha(&empty, 24, 24), 0);
        // corners sit outside the star entirely
        assert_eq!(alpha(&full, 0, 47), 0);
    }

    #[test]
    fn half_star_fills_left_side_only() {
        let half = SvgAssetProvider::builtin().star_image(FillLevel::Half).unwrap();
        assert_eq!(alpha(&half, 20, 26), 255);
        assert_eq!(alpha(&half, 28, 26), 0);
    }

    #[test]
    fn custom_canonical_size() {
        let img = SvgAssetProvider::builtin()
            .canonical_size(10)
            .star_image(FillLevel::Quarter)
            .unwrap();
        assert_eq!(img.dimensions(), (10, 10));
    }

    #[test]
    fn missing_source_is_reported() {
        let provider = SvgAssetProvider::builtin().without(FillLevel::Full);
        let err = provider.star_image(FillLevel::Full).unwrap_err();
        assert!(matches!(err, AssetError::MissingAsset(FillLevel::Full)));
    }

    #[test]
    fn malformed_source_is_reported() {
        let provider = SvgAssetProvider::empty().with_source(FillLevel::Half, "<not-svg");
        let err = provider.star_image(FillLevel::Half).unwrap_err();
        assert!(matches!(err, AssetError::InvalidSvg { level: FillLevel::Half, .. }));
    }
}
