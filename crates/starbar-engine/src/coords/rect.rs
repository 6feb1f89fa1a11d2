use super::Vec2;

/// Axis-aligned rectangle in pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Converts an absolute point into this rect's local space.
    #[inline]
    pub fn to_local(self, p: Vec2) -> Vec2 {
        p - self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_local_subtracts_origin() {
        let r = Rect::new(8.0, 4.0, 100.0, 24.0);
        assert_eq!(r.to_local(Vec2::new(50.0, 10.0)), Vec2::new(42.0, 6.0));
    }

    #[test]
    fn zero_width_is_empty() {
        assert!(Rect::new(0.0, 0.0, 0.0, 24.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
