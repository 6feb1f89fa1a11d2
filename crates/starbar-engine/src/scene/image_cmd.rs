use std::rc::Rc;

use image::RgbaImage;

use crate::coords::{Rect, Vec2};
use crate::paint::ColorFilter;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Shared, immutable raster image (straight-alpha RGBA8).
///
/// Cloning is cheap. Equality is identity: two handles are equal when they
/// point at the same pixels, which is what draw-list comparisons care about.
#[derive(Debug, Clone)]
pub struct ImageHandle(Rc<RgbaImage>);

impl ImageHandle {
    pub fn new(image: RgbaImage) -> Self {
        Self(Rc::new(image))
    }

    #[inline]
    pub fn pixels(&self) -> &RgbaImage {
        &self.0
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.0.height()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &ImageHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl From<RgbaImage> for ImageHandle {
    fn from(image: RgbaImage) -> Self {
        Self::new(image)
    }
}

/// Image draw payload: blit `image` with its top-left at `origin`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub image: ImageHandle,
    pub origin: Vec2,
    pub filter: ColorFilter,
}

impl ImageCmd {
    #[inline]
    pub fn new(image: ImageHandle, origin: Vec2, filter: ColorFilter) -> Self {
        Self { image, origin, filter }
    }

    /// Area covered by the image, in pixels.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(
            self.origin,
            Vec2::new(self.image.width() as f32, self.image.height() as f32),
        )
    }
}

impl DrawList {
    /// Records an image draw command.
    #[inline]
    pub fn push_image(&mut self, z: ZIndex, image: ImageHandle, origin: Vec2, filter: ColorFilter) {
        self.push(z, DrawCmd::Image(ImageCmd::new(image, origin, filter)));
    }
}
