use starbar_engine::coords::Vec2;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from host to widget during measure.
///
/// A widget may return any size; hosts that care enforce their own policy
/// with [`Constraints::constrain`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: child can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Per-frame values made available to [`Widget::measure`](crate::widget::Widget::measure)
/// and [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutCtx {
    /// Display density: physical pixels per density-independent pixel.
    pub scale: f32,
}

impl LayoutCtx {
    #[inline]
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    /// Converts density-independent pixels to pixels.
    #[inline]
    pub fn dp(&self, dp: f32) -> f32 {
        dp * self.scale
    }
}

impl Default for LayoutCtx {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
