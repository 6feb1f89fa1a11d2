use std::collections::HashMap;
use std::path::Path;

use image::RgbaImage;

use crate::assets::{AssetError, AssetProvider, FillLevel};

/// Provider backed by images already in memory.
///
/// Useful for hosts that ship raster artwork, and for tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryAssetProvider {
    images: HashMap<FillLevel, RgbaImage>,
}

impl MemoryAssetProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a provider with one image per level.
    pub fn from_fn(mut f: impl FnMut(FillLevel) -> RgbaImage) -> Self {
        let images = FillLevel::ALL.iter().map(|&level| (level, f(level))).collect();
        Self { images }
    }

    pub fn with_image(mut self, level: FillLevel, image: RgbaImage) -> Self {
        self.insert(level, image);
        self
    }

    pub fn insert(&mut self, level: FillLevel, image: RgbaImage) {
        self.images.insert(level, image);
    }

    pub fn remove(&mut self, level: FillLevel) -> Option<RgbaImage> {
        self.images.remove(&level)
    }

    pub fn contains(&self, level: FillLevel) -> bool {
        self.images.contains_key(&level)
    }

    /// Decodes an image file (PNG and the other formats `image` is built
    /// with) and registers it for `level`.
    pub fn load_file(&mut self, level: FillLevel, path: impl AsRef<Path>) -> Result<(), AssetError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| AssetError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        self.insert(level, decoded.to_rgba8());
        Ok(())
    }

    /// Loads `star_<level>.png` for every level found in `dir`.
    ///
    /// Absent files are skipped; the widget reports them as
    /// [`AssetError::MissingAsset`] when it is built.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let dir = dir.as_ref();
        let mut provider = Self::new();
        for level in FillLevel::ALL {
            let path = dir.join(format!("star_{}.png", level.name()));
            if path.is_file() {
                provider.load_file(level, &path)?;
            } else {
                log::debug!("no star artwork at {}", path.display());
            }
        }
        Ok(provider)
    }
}

impl AssetProvider for MemoryAssetProvider {
    fn star_image(&self, level: FillLevel) -> Result<RgbaImage, AssetError> {
        self.images.get(&level).cloned().ok_or(AssetError::MissingAsset(level))
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn returns_registered_image() {
        let img = RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 4]));
        let provider = MemoryAssetProvider::new().with_image(FillLevel::Half, img.clone());
        assert_eq!(provider.star_image(FillLevel::Half).unwrap(), img);
    }

    #[test]
    fn missing_level_is_an_error() {
        let mut provider = MemoryAssetProvider::from_fn(|_| RgbaImage::new(1, 1));
        provider.remove(FillLevel::Quarter);
        assert!(!provider.contains(FillLevel::Quarter));
        let err = provider.star_image(FillLevel::Quarter).unwrap_err();
        assert!(matches!(err, AssetError::MissingAsset(FillLevel::Quarter)));
        assert_eq!(err.to_string(), "no star image for fill level `quarter`");
    }

    /// Fresh directory private to one test in this process.
    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("starbar-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn scratch_dirs_are_per_process() {
        let dir = scratch_dir("scratch-check");
        let name = dir.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.ends_with(&std::process::id().to_string()));
        assert!(std::fs::read_dir(&dir).unwrap().next().is_none());
    }

    #[test]
    fn from_dir_skips_absent_files() {
        let dir = scratch_dir("memory-provider-empty");
        let provider = MemoryAssetProvider::from_dir(&dir).unwrap();
        assert!(FillLevel::ALL.iter().all(|&l| !provider.contains(l)));
    }

    #[test]
    fn load_file_round_trips_png() {
        let dir = scratch_dir("memory-provider-png");
        let path = dir.join("star_full.png");
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        img.save(&path).unwrap();

        let provider = MemoryAssetProvider::from_dir(&dir).unwrap();
        assert!(provider.contains(FillLevel::Full));
        assert_eq!(provider.star_image(FillLevel::Full).unwrap(), img);
    }

    #[test]
    fn load_file_reports_decode_errors() {
        let mut provider = MemoryAssetProvider::new();
        let err = provider
            .load_file(FillLevel::Full, "/definitely/not/here/star.png")
            .unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }
}
