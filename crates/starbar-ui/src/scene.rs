use std::rc::Rc;

use starbar_engine::coords::{Rect, Vec2};
use starbar_engine::scene::DrawList;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::host::FlagHost;
use crate::painter::Painter;
use crate::widget::Widget;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of pointer state for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current cursor position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` while the primary button is held down.
    pub mouse_pressed: bool,
    /// The pointer gesture was taken away (window lost focus, etc.).
    pub cancelled: bool,
}

impl UiInput {
    pub fn at(mouse_pos: Vec2, mouse_pressed: bool) -> Self {
        Self { mouse_pos, mouse_pressed, cancelled: false }
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Frame coordinator: turns input snapshots into pointer events, then
/// measures and paints the root widget into a [`DrawList`].
///
/// The scene owns a [`FlagHost`]; hand [`host`](UiScene::host) to widgets so
/// their redraw and layout requests mark the scene dirty.
///
/// # Example
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let mut bar = RatingBar::new(RatingConfig::default(), &provider)?.host(ui.host());
///
/// let list = ui.frame(&mut bar, viewport, &UiInput::at(pos, pressed));
/// let image = renderer.render(list, w, h);
/// ```
pub struct UiScene {
    /// Draw list populated by the most recent [`frame`](UiScene::frame) call.
    pub draw_list: DrawList,
    host: Rc<FlagHost>,
    scale: f32,
    was_pressed: bool,
    last_pos: Option<Vec2>,
}

impl UiScene {
    pub fn new() -> Self {
        Self::with_scale(1.0)
    }

    /// Scene whose layout context reports `scale` physical pixels per dp.
    pub fn with_scale(scale: f32) -> Self {
        Self {
            draw_list: DrawList::new(),
            host: Rc::new(FlagHost::new()),
            scale,
            was_pressed: false,
            last_pos: None,
        }
    }

    /// Shared host handle for widgets shown in this scene.
    pub fn host(&self) -> Rc<FlagHost> {
        self.host.clone()
    }

    /// Returns and clears the dirty state accumulated since the last call.
    pub fn take_dirty(&self) -> bool {
        self.host.take_dirty()
    }

    /// Pointer events implied by moving from the previous snapshot to `input`.
    fn derive_events(&mut self, input: &UiInput) -> Vec<UiEvent> {
        let pos = input.mouse_pos;
        let moved = self.last_pos != Some(pos);
        let mut events = Vec::new();

        if input.cancelled {
            if self.was_pressed {
                events.push(UiEvent::PointerCancel);
            }
            self.was_pressed = false;
        } else {
            match (self.was_pressed, input.mouse_pressed) {
                (false, true) => events.push(UiEvent::PointerDown { pos }),
                (true, true) if moved => events.push(UiEvent::PointerMove { pos }),
                (true, false) => events.push(UiEvent::PointerUp { pos }),
                (false, false) if moved => events.push(UiEvent::Hover { pos }),
                _ => {}
            }
            self.was_pressed = input.mouse_pressed;
        }

        self.last_pos = Some(pos);
        events
    }

    /// Route this frame's input, then measure and paint `root`.
    ///
    /// Input is handled first so the returned list already reflects it.
    /// The list is owned by the scene and valid until the next call.
    #[must_use]
    pub fn frame<W: Widget + ?Sized>(
        &mut self,
        root: &mut W,
        viewport: Vec2,
        input: &UiInput,
    ) -> &mut DrawList {
        self.draw_list.clear();
        let ctx = LayoutCtx::new(self.scale);
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        // ── input ─────────────────────────────────────────────────────────
        for event in self.derive_events(input) {
            if !root.on_event(&event, rect, &ctx).is_consumed() {
                log::trace!("unhandled {event:?}");
            }
        }

        // ── measure ───────────────────────────────────────────────────────
        let constraints = Constraints::loose(viewport);
        let size = constraints.constrain(root.measure(constraints, &ctx));
        let rect = Rect::from_origin_size(rect.origin, size);

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list);
            root.paint(&mut painter, rect);
        }
        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::event::EventResult;

    /// Records every event it sees and paints nothing.
    #[derive(Default)]
    struct Probe {
        seen: Rc<RefCell<Vec<UiEvent>>>,
    }

    impl Widget for Probe {
        fn measure(&self, _: Constraints, _: &LayoutCtx) -> Vec2 {
            Vec2::new(1000.0, 10.0)
        }

        fn paint(&self, _: &mut Painter<'_>, _: Rect) {}

        fn on_event(&mut self, event: &UiEvent, _: Rect, _: &LayoutCtx) -> EventResult {
            self.seen.borrow_mut().push(event.clone());
            EventResult::Consumed
        }
    }

    fn run(inputs: &[UiInput]) -> Vec<UiEvent> {
        let mut ui = UiScene::new();
        let mut probe = Probe::default();
        let seen = probe.seen.clone();
        for input in inputs {
            let _ = ui.frame(&mut probe, Vec2::new(200.0, 50.0), input);
        }
        seen.take()
    }

    #[test]
    fn press_drag_release() {
        let a = Vec2::new(10.0, 5.0);
        let b = Vec2::new(30.0, 5.0);
        let events = run(&[
            UiInput::at(a, true),
            UiInput::at(b, true),
            UiInput::at(b, true),
            UiInput::at(b, false),
        ]);
        assert_eq!(
            events,
            vec![
                UiEvent::PointerDown { pos: a },
                UiEvent::PointerMove { pos: b },
                UiEvent::PointerUp { pos: b },
            ]
        );
    }

    #[test]
    fn hover_only_when_moving() {
        let a = Vec2::new(1.0, 1.0);
        let events = run(&[UiInput::at(a, false), UiInput::at(a, false)]);
        assert_eq!(events, vec![UiEvent::Hover { pos: a }]);
    }

    #[test]
    fn cancel_while_pressed() {
        let a = Vec2::new(1.0, 1.0);
        let cancelled = UiInput { cancelled: true, ..UiInput::at(a, true) };
        let events = run(&[UiInput::at(a, true), cancelled.clone(), cancelled]);
        assert_eq!(events, vec![UiEvent::PointerDown { pos: a }, UiEvent::PointerCancel]);
    }

    #[test]
    fn root_is_constrained_to_viewport() {
        struct Big;
        impl Widget for Big {
            fn measure(&self, _: Constraints, ctx: &LayoutCtx) -> Vec2 {
                assert_eq!(ctx.scale, 2.0);
                Vec2::new(1000.0, 1000.0)
            }
            fn paint(&self, _: &mut Painter<'_>, rect: Rect) {
                assert_eq!(rect.size, Vec2::new(200.0, 50.0));
            }
        }
        let mut ui = UiScene::with_scale(2.0);
        let _ = ui.frame(&mut Big, Vec2::new(200.0, 50.0), &UiInput::default());
    }
}
