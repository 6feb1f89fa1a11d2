use starbar_engine::coords::Vec2;

/// Input events routed to widgets. Positions are absolute, in pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Primary pointer went down at `pos`.
    PointerDown { pos: Vec2 },
    /// Pointer moved to `pos` while held down.
    PointerMove { pos: Vec2 },
    /// Primary pointer released at `pos`.
    PointerUp { pos: Vec2 },
    /// The host aborted the current gesture.
    PointerCancel,
    /// Pointer moved to `pos` with no button held.
    Hover { pos: Vec2 },
}

impl UiEvent {
    /// Collapses the event into the single-pointer action a widget reacts to,
    /// plus the pointer position when there is one.
    pub fn pointer(&self) -> (PointerAction, Option<Vec2>) {
        match *self {
            UiEvent::PointerDown { pos } => (PointerAction::Down, Some(pos)),
            UiEvent::PointerMove { pos } => (PointerAction::Move, Some(pos)),
            UiEvent::PointerUp { pos } => (PointerAction::Up, Some(pos)),
            UiEvent::PointerCancel => (PointerAction::Cancel, None),
            UiEvent::Hover { pos } => (PointerAction::Hover, Some(pos)),
        }
    }
}

/// Single-pointer gesture phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Cancel,
    Hover,
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; the host applies its default handling.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}

impl From<bool> for EventResult {
    #[inline]
    fn from(handled: bool) -> Self {
        if handled { EventResult::Consumed } else { EventResult::Ignored }
    }
}
