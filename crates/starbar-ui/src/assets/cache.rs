use image::RgbaImage;
use image::imageops::{self, FilterType};
use starbar_engine::scene::ImageHandle;

use crate::assets::{AssetError, AssetProvider, FillLevel};

/// Canonical, unscaled artwork for every level, fetched once from a provider.
#[derive(Debug, Clone)]
pub struct StarSources {
    images: [RgbaImage; 5],
}

impl StarSources {
    /// Queries `provider` for every level. Any failure aborts the load.
    pub fn load(provider: &dyn AssetProvider) -> Result<Self, AssetError> {
        Ok(Self {
            images: [
                provider.star_image(FillLevel::Empty)?,
                provider.star_image(FillLevel::Quarter)?,
                provider.star_image(FillLevel::Half)?,
                provider.star_image(FillLevel::ThreeQuarter)?,
                provider.star_image(FillLevel::Full)?,
            ],
        })
    }

    #[inline]
    pub fn get(&self, level: FillLevel) -> &RgbaImage {
        &self.images[level.index()]
    }
}

/// The five star images scaled to one edge length.
///
/// Always fully populated. A size change builds a new cache and the owner
/// swaps it in, so readers see either the old set or the new one.
#[derive(Debug, Clone)]
pub struct AssetCache {
    pixel_size: u32,
    images: [ImageHandle; 5],
}

impl AssetCache {
    /// Largest edge length the cache scales to, in pixels.
    pub const MAX_PIXEL_SIZE: u32 = 1024;

    /// Scales every source to `star_size × star_size`.
    ///
    /// The size is truncated toward zero; negative or NaN sizes give empty
    /// images rather than an error. Sizes above [`MAX_PIXEL_SIZE`](Self::MAX_PIXEL_SIZE)
    /// are clamped to it.
    pub fn build(sources: &StarSources, star_size: f32) -> Self {
        let mut px = star_size as u32;
        if px > Self::MAX_PIXEL_SIZE {
            log::warn!("star size {star_size} exceeds {} px; clamping", Self::MAX_PIXEL_SIZE);
            px = Self::MAX_PIXEL_SIZE;
        }
        let images = FillLevel::ALL.map(|level| ImageHandle::new(scale(sources.get(level), px)));
        log::debug!("star cache rebuilt at {px}x{px}");
        Self { pixel_size: px, images }
    }

    #[inline]
    pub fn get(&self, level: FillLevel) -> &ImageHandle {
        &self.images[level.index()]
    }

    /// Edge length of every cached image, in pixels.
    #[inline]
    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }
}

fn scale(src: &RgbaImage, px: u32) -> RgbaImage {
    if px == 0 {
        return RgbaImage::new(0, 0);
    }
    if src.width() == 0 || src.height() == 0 {
        return RgbaImage::new(px, px);
    }
    if src.dimensions() == (px, px) {
        return src.clone();
    }
    imageops::resize(src, px, px, FilterType::Nearest)
}
