use textswitch_engine::coords::{CornerRadii, Rect, Vec2};
use textswitch_engine::paint::Color;
use textswitch_engine::scene::shapes::TextCmd;
use textswitch_engine::scene::{Border, DrawList, Shadow, TextAlign};
use textswitch_engine::text::{FontId, FontSystem};

use crate::constraints::LayoutCtx;

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` and hands out increasing z values, so
/// whatever is painted later lands on top.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    /// Physical-to-logical pixel ratio for this frame.
    pub scale: f32,
    z: i32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem, scale: f32) -> Self {
        Self { draw_list, font_system, scale, z: 0 }
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Measures `text` at the painter's scale.
    pub fn measure_text(
        &self,
        text: &str,
        font: FontId,
        size: f32,
        max_width: Option<f32>,
    ) -> Vec2 {
        self.font_system.measure_text_scaled(text, font, size, max_width, self.scale)
    }

    /// Returns a [`LayoutCtx`] borrowing this painter's font system.
    #[inline]
    pub fn layout_ctx(&self) -> LayoutCtx<'_> {
        LayoutCtx { fonts: self.font_system, scale: self.scale }
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Rounded rectangle with optional border.
    ///
    /// Pass `radius = 0.0` for sharp corners. Pass `border = None` for no stroke.
    pub fn fill_rounded_rect(
        &mut self,
        rect: Rect,
        radius: f32,
        color: Color,
        border: Option<Border>,
    ) {
        let z = self.next_z();
        self.draw_list.push_rounded_rect(z, rect, CornerRadii::all(radius), color, border);
    }

    /// Drop shadow of a rounded rect at `rect`.
    pub fn shadow(&mut self, rect: Rect, radius: f32, shadow: &Shadow) {
        let z = self.next_z();
        self.draw_list.push_shadow(z, rect, CornerRadii::all(radius), shadow);
    }

    /// One line of text placed inside `bounds` by `align`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        bounds: Rect,
        align: TextAlign,
    ) {
        let text = text.into();
        let measured = self.measure_text(&text, font, size, None);
        let z = self.next_z();
        self.draw_list
            .push_text(z, TextCmd::placed(text, font, size, color, bounds, align, measured));
    }

    #[inline]
    fn next_z(&mut self) -> i32 {
        let z = self.z;
        self.z += 1;
        z
    }
}
