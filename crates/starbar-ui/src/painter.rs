use starbar_engine::coords::Vec2;
use starbar_engine::paint::ColorFilter;
use starbar_engine::scene::{DrawList, ImageHandle, ZIndex};

/// Draw surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList`; every draw call lands one layer above the
/// previous one.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Pre-rendered raster image with its top-left at `origin`, passed
    /// through `filter` when composited.
    pub fn draw_image(&mut self, image: &ImageHandle, origin: Vec2, filter: ColorFilter) {
        let z = self.next_z();
        self.draw_list.push_image(z, image.clone(), origin, filter);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
