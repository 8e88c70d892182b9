use textswitch_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// The trait every UI component implements.
///
/// The host drives one frame as: [`advance`](Widget::advance) →
/// [`measure`](Widget::measure) → [`layout`](Widget::layout) →
/// [`on_event`](Widget::on_event) → [`paint`](Widget::paint).
///
/// ```rust,ignore
/// use textswitch_ui::prelude::*;
///
/// pub struct Dot { color: Color, size: f32 }
///
/// impl Widget for Dot {
///     fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
///         constraints.constrain(Vec2::new(self.size, self.size))
///     }
///     fn paint(&self, painter: &mut Painter, rect: Rect) {
///         painter.fill_rounded_rect(rect, rect.size.y / 2.0, self.color, None);
///     }
/// }
/// ```
pub trait Widget: 'static {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic: the host may call it several times per frame.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2;

    /// Bounds hook: the host assigns the widget its rectangle for this frame.
    ///
    /// Retained widgets compare against their previous bounds and re-layout
    /// their children when the size changed.
    fn layout(&mut self, _rect: Rect) {}

    /// Moves running animations forward by `dt` seconds.
    fn advance(&mut self, _dt: f32) {}

    /// Draw this widget into `painter` within `rect`.
    fn paint(&self, painter: &mut Painter, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }
}
