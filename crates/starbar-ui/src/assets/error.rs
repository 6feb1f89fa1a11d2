use std::path::PathBuf;

use thiserror::Error;

use crate::assets::FillLevel;

/// Failures while obtaining star artwork. All are fatal at widget construction.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The provider has no image for a level the widget needs.
    #[error("no star image for fill level `{0}`")]
    MissingAsset(FillLevel),

    /// An SVG source failed to parse or rasterize.
    #[error("invalid SVG for fill level `{level}`: {message}")]
    InvalidSvg { level: FillLevel, message: String },

    /// An image file could not be opened or decoded.
    #[error("failed to load star image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
