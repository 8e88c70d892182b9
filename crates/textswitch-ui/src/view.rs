//! Child visual elements owned by composite widgets.
//!
//! Frames are local: relative to the owning widget's top-left corner. The
//! owner passes its own origin as `offset` when painting.

use textswitch_engine::coords::{Rect, Vec2};
use textswitch_engine::paint::Color;
use textswitch_engine::scene::{Border, Shadow};
use textswitch_engine::text::FontId;

pub use textswitch_engine::scene::TextAlign;

use crate::painter::Painter;

// ── View ──────────────────────────────────────────────────────────────────

/// A filled, optionally rounded, bordered and shadowed rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub frame: Rect,
    pub background: Color,
    pub border: Option<Border>,
    pub corner_radius: f32,
    pub shadow: Option<Shadow>,
    /// Decorative children of a control are non-interactive: touches belong
    /// to the control.
    pub interactive: bool,
}

impl View {
    pub fn new() -> Self {
        Self {
            frame: Rect::default(),
            background: Color::transparent(),
            border: None,
            corner_radius: 0.0,
            shadow: None,
            interactive: true,
        }
    }

    pub fn background(mut self, v: Color) -> Self { self.background = v; self }
    pub fn border(mut self, width: f32, color: Color) -> Self { self.border = Some(Border::new(width, color)); self }
    pub fn corner_radius(mut self, v: f32) -> Self { self.corner_radius = v; self }
    pub fn shadow(mut self, v: Shadow) -> Self { self.shadow = Some(v); self }
    pub fn interactive(mut self, v: bool) -> Self { self.interactive = v; self }

    /// Recolors the border, keeping its width. No-op without a border.
    pub fn set_border_color(&mut self, color: Color) {
        if let Some(border) = &mut self.border {
            border.color = color;
        }
    }

    pub fn paint(&self, painter: &mut Painter, offset: Vec2) {
        let rect = self.frame.translate(offset);
        if let Some(shadow) = &self.shadow {
            painter.shadow(rect, self.corner_radius, shadow);
        }
        painter.fill_rounded_rect(rect, self.corner_radius, self.background, self.border.clone());
    }
}

impl Default for View { fn default() -> Self { Self::new() } }

// ── Label ─────────────────────────────────────────────────────────────────

/// A single run of text placed inside a frame.
///
/// Text is only emitted when a font is set; the label still tracks its text
/// and color without one.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub frame: Rect,
    pub text: String,
    pub color: Color,
    pub font: Option<FontId>,
    pub font_size: f32,
    pub align: TextAlign,
    pub interactive: bool,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            frame: Rect::default(),
            text: text.into(),
            color: Color::black(),
            font: None,
            font_size: 17.0,
            align: TextAlign::default(),
            interactive: true,
        }
    }

    pub fn color(mut self, v: Color) -> Self { self.color = v; self }
    pub fn font(mut self, v: Option<FontId>) -> Self { self.font = v; self }
    pub fn font_size(mut self, v: f32) -> Self { self.font_size = v; self }
    pub fn align(mut self, v: TextAlign) -> Self { self.align = v; self }
    pub fn interactive(mut self, v: bool) -> Self { self.interactive = v; self }

    pub fn paint(&self, painter: &mut Painter, offset: Vec2) {
        let Some(font) = self.font else { return };
        if self.text.is_empty() {
            return;
        }
        let bounds = self.frame.translate(offset);
        painter.text(self.text.clone(), font, self.font_size, self.color, bounds, self.align);
    }
}

#[cfg(test)]
mod tests {
    use textswitch_engine::scene::DrawList;
    use textswitch_engine::text::FontSystem;

    use super::*;

    #[test]
    fn label_without_font_paints_nothing() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut label = Label::new("On");
        label.frame = Rect::new(2.0, 0.0, 85.0, 35.0);

        let mut painter = Painter::new(&mut list, &fonts, 1.0);
        label.paint(&mut painter, Vec2::new(100.0, 0.0));
        assert!(list.is_empty());
    }

    #[test]
    fn view_paints_shadow_below_its_body() {
        let mut list = DrawList::new();
        let fonts = FontSystem::new();
        let mut view = View::new()
            .background(Color::white())
            .corner_radius(17.5)
            .shadow(Shadow::new(Color::black(), Vec2::new(1.0, 1.0), 2.0, 0.75));
        view.frame = Rect::new(2.0, 0.0, 35.0, 35.0);

        let mut painter = Painter::new(&mut list, &fonts, 1.0);
        view.paint(&mut painter, Vec2::new(100.0, 10.0));

        let items = list.items();
        assert_eq!(items.len(), 2);
        assert!(items[0].key < items[1].key);
        let body = items[1].cmd.as_rounded_rect().unwrap();
        assert_eq!(body.rect, Rect::new(102.0, 10.0, 35.0, 35.0));
    }

    #[test]
    fn set_border_color_keeps_width() {
        let mut view = View::new().border(1.0, Color::light_gray());
        view.set_border_color(Color::green());
        assert_eq!(view.border, Some(Border::new(1.0, Color::green())));
    }

    #[test]
    fn set_border_color_without_border_is_noop() {
        let mut view = View::new();
        view.set_border_color(Color::green());
        assert!(view.border.is_none());
    }
}
