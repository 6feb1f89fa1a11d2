use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// `push()` is O(1); paint-order iteration reuses an internal index buffer
/// so a warmed list does not allocate per frame.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_indices.clear();
        self.sorted_dirty = true;
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);
        self.items.push(DrawItem { key: SortKey::new(z, order), cmd });
        self.sorted_dirty = true;
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));
        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use image::RgbaImage;

    use super::*;
    use crate::coords::Vec2;
    use crate::paint::ColorFilter;
    use crate::scene::ImageHandle;

    fn origins(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|item| match &item.cmd {
                DrawCmd::Image(cmd) => cmd.origin.x,
            })
            .collect()
    }

    #[test]
    fn paint_order_sorts_by_z_then_insertion() {
        let img = ImageHandle::new(RgbaImage::new(1, 1));
        let mut list = DrawList::new();
        list.push_image(ZIndex::new(2), img.clone(), Vec2::new(0.0, 0.0), ColorFilter::None);
        list.push_image(ZIndex::new(1), img.clone(), Vec2::new(1.0, 0.0), ColorFilter::None);
        list.push_image(ZIndex::new(1), img, Vec2::new(2.0, 0.0), ColorFilter::None);
        assert_eq!(origins(&mut list), vec![1.0, 2.0, 0.0]);
    }

    #[test]
    fn clear_resets_items() {
        let mut list = DrawList::new();
        list.push_image(
            ZIndex::default(),
            ImageHandle::new(RgbaImage::new(1, 1)),
            Vec2::zero(),
            ColorFilter::None,
        );
        assert_eq!(list.len(), 1);
        list.clear();
        assert!(list.is_empty());
        assert_eq!(origins(&mut list), Vec::<f32>::new());
    }

    #[test]
    fn image_handles_compare_by_identity() {
        let a = ImageHandle::new(RgbaImage::new(2, 2));
        let b = ImageHandle::new(RgbaImage::new(2, 2));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
