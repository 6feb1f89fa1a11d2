use image::{Rgba, RgbaImage};

use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ImageCmd};

/// CPU renderer compositing a [`DrawList`] into an RGBA8 target.
///
/// Blending is source-over in premultiplied space; the target stores
/// straight-alpha bytes like any decoded PNG. Image origins are snapped to
/// the nearest whole pixel.
#[derive(Debug, Default)]
pub struct RasterRenderer {
    clear_color: Color,
    warned_non_finite: bool,
}

impl RasterRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Background written before compositing in [`render`](Self::render).
    pub fn clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }

    /// Renders `draw_list` into a fresh `width × height` image.
    pub fn render(&mut self, draw_list: &mut DrawList, width: u32, height: u32) -> RgbaImage {
        let mut target = RgbaImage::from_pixel(width, height, Rgba(self.clear_color.to_srgb_u8()));
        self.render_into(&mut target, draw_list);
        target
    }

    /// Composites `draw_list` on top of the existing contents of `target`.
    pub fn render_into(&mut self, target: &mut RgbaImage, draw_list: &mut DrawList) {
        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Image(cmd) => {
                    if !cmd.origin.is_finite() {
                        if !self.warned_non_finite {
                            log::debug!("RasterRenderer: non-finite image origin skipped");
                            self.warned_non_finite = true;
                        }
                        continue;
                    }
                    if cmd.bounds().is_empty() {
                        continue;
                    }
                    blit(target, cmd);
                }
            }
        }
    }
}

fn blit(target: &mut RgbaImage, cmd: &ImageCmd) {
    let origin = cmd.origin.round();
    let (ox, oy) = (origin.x as i64, origin.y as i64);
    let (tw, th) = (i64::from(target.width()), i64::from(target.height()));

    for (sx, sy, px) in cmd.image.pixels().enumerate_pixels() {
        let dx = ox + i64::from(sx);
        let dy = oy + i64::from(sy);
        if dx < 0 || dy < 0 || dx >= tw || dy >= th {
            continue;
        }
        let [r, g, b, a] = px.0;
        if a == 0 {
            continue;
        }
        let src = cmd.filter.apply(Color::from_srgb_u8(r, g, b, a));
        let dst_px = target.get_pixel_mut(dx as u32, dy as u32);
        let [dr, dg, db, da] = dst_px.0;
        let out = src.over(Color::from_srgb_u8(dr, dg, db, da));
        *dst_px = Rgba(out.to_srgb_u8());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::ColorFilter;
    use crate::scene::{ImageHandle, ZIndex};

    fn white_square(size: u32) -> ImageHandle {
        ImageHandle::new(RgbaImage::from_pixel(size, size, Rgba([255, 255, 255, 255])))
    }

    #[test]
    fn blits_at_origin_with_tint() {
        let mut list = DrawList::new();
        list.push_image(
            ZIndex::default(),
            white_square(2),
            Vec2::new(1.0, 1.0),
            ColorFilter::tint(Color::rgb(255, 0, 0)),
        );
        let out = RasterRenderer::new().render(&mut list, 4, 4);
        assert_eq!(out.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(2, 2).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(out.get_pixel(3, 3).0, [0, 0, 0, 0]);
    }

    #[test]
    fn clips_to_target_bounds() {
        let mut list = DrawList::new();
        list.push_image(ZIndex::default(), white_square(4), Vec2::new(-2.0, 2.0), ColorFilter::None);
        let out = RasterRenderer::new().render(&mut list, 3, 3);
        assert_eq!(out.get_pixel(0, 2).0, [255, 255, 255, 255]);
        assert_eq!(out.get_pixel(2, 2).0, [0, 0, 0, 0]);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    #[test]
    fn transparent_pixels_leave_background() {
        let mut list = DrawList::new();
        let clear = ImageHandle::new(RgbaImage::new(2, 2));
        list.push_image(ZIndex::default(), clear, Vec2::zero(), ColorFilter::tint(Color::BLACK));
        let out = RasterRenderer::new().clear_color(Color::WHITE).render(&mut list, 2, 2);
        assert_eq!(out.get_pixel(0, 0).0, [255, 255, 255, 255]);
    }

    #[test]
    fn non_finite_origin_is_skipped() {
        let mut list = DrawList::new();
        list.push_image(ZIndex::default(), white_square(1), Vec2::new(f32::NAN, 0.0), ColorFilter::None);
        let out = RasterRenderer::new().render(&mut list, 1, 1);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }
}
