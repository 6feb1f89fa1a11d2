//! Star artwork: fill levels, providers that supply the canonical images,
//! and the per-widget cache of images scaled to the configured star size.
//!
//! | Item | Role |
//! |------|------|
//! | [`FillLevel`] | discrete per-star visual state |
//! | [`AssetProvider`] | source of one canonical image per level |
//! | [`SvgAssetProvider`] | built-in (or custom) vector stars rendered with `resvg` |
//! | [`MemoryAssetProvider`] | pre-decoded images, optionally loaded from disk |
//! | [`AssetCache`] | five images scaled to one star size, rebuilt as a whole |

mod cache;
mod error;
mod fill;
mod memory;
mod svg;

use image::RgbaImage;

pub use cache::{AssetCache, StarSources};
pub use error::AssetError;
pub use fill::FillLevel;
pub use memory::MemoryAssetProvider;
pub use svg::SvgAssetProvider;

/// Supplies the artwork for each [`FillLevel`] at a canonical size.
///
/// Widgets query every level once at construction and scale the results
/// themselves. Returning [`AssetError::MissingAsset`] for any level makes
/// construction fail.
pub trait AssetProvider {
    fn star_image(&self, level: FillLevel) -> Result<RgbaImage, AssetError>;
}

impl<P: AssetProvider + ?Sized> AssetProvider for &P {
    fn star_image(&self, level: FillLevel) -> Result<RgbaImage, AssetError> {
        (**self).star_image(level)
    }
}
