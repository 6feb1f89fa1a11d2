use std::fmt;

use starbar_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The entry points a host calls on every UI component.
///
/// Hosts drive three passes: `measure` to negotiate a size, `paint` to record
/// draw commands, and `on_event` to route input. Outward requests (redraw,
/// re-layout, accessibility click) go through the [`Host`](crate::host::Host)
/// a widget was given.
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic: calling `measure` twice with the same arguments
    /// must return the same result.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Record draw commands into `painter` within the bounds of `rect`.
    ///
    /// Painting must not mutate widget state.
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    ///
    /// The default implementation ignores everything, so display-only widgets
    /// need not override it.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect, _ctx: &LayoutCtx) -> EventResult {
        EventResult::Ignored
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget, as produced by the `.mkml` builder.
///
/// Wrap any `Widget` with [`Element::new`].
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(w: W) -> Self {
        Self(Box::new(w))
    }
}

impl Widget for Element {
    #[inline]
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        self.0.measure(constraints, ctx)
    }

    #[inline]
    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        self.0.paint(painter, rect)
    }

    #[inline]
    fn on_event(&mut self, event: &UiEvent, rect: Rect, ctx: &LayoutCtx) -> EventResult {
        self.0.on_event(event, rect, ctx)
    }
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Element(..)")
    }
}
