use textswitch_engine::coords::Vec2;

/// Input events routed to widgets.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Primary pointer went down at `pos`.
    TouchBegin { pos: Vec2 },
    /// Primary pointer went up at `pos`.
    TouchEnd { pos: Vec2 },
}

impl UiEvent {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        match self {
            UiEvent::TouchBegin { pos } | UiEvent::TouchEnd { pos } => *pos,
        }
    }
}

/// Result returned by [`Widget::on_event`](crate::widget::Widget::on_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; the host must not reinterpret it (e.g. as a pan).
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
