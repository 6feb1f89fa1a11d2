//! Outward calls from a widget to whatever is hosting it.

use std::cell::Cell;

/// Services a widget may request from its host.
///
/// Requests are fire-and-forget: the host schedules the repaint or layout
/// pass later and the widget never waits on it. All methods default to
/// no-ops so hosts only implement what they support.
pub trait Host {
    /// The widget's appearance changed; repaint it.
    fn request_redraw(&self) {}

    /// The widget's footprint changed; measure it again.
    fn request_layout(&self) {}

    /// A pointer gesture completed; run the accessibility click action.
    fn perform_click(&self) {}
}

/// Host that ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHost;

impl Host for NoopHost {}

/// Host that latches requests until the owner drains them.
///
/// Used by [`UiScene`](crate::scene::UiScene) to decide when a frame is
/// dirty.
#[derive(Debug, Default)]
pub struct FlagHost {
    redraw: Cell<bool>,
    layout: Cell<bool>,
    clicks: Cell<u32>,
}

impl FlagHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a redraw or layout was requested, clearing both flags.
    pub fn take_dirty(&self) -> bool {
        let redraw = self.redraw.replace(false);
        let layout = self.layout.replace(false);
        redraw || layout
    }

    pub fn layout_requested(&self) -> bool {
        self.layout.get()
    }

    pub fn redraw_requested(&self) -> bool {
        self.redraw.get()
    }

    /// Number of accessibility clicks performed so far.
    pub fn clicks(&self) -> u32 {
        self.clicks.get()
    }
}

impl Host for FlagHost {
    fn request_redraw(&self) {
        self.redraw.set(true);
    }

    fn request_layout(&self) {
        self.layout.set(true);
    }

    fn perform_click(&self) {
        self.clicks.set(self.clicks.get() + 1);
    }
}
