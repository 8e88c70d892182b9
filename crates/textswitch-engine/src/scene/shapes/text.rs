use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontId;

/// Horizontal placement of a text run inside its bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl TextAlign {
    /// Top-left of a run of size `measured` placed in `bounds`: vertically
    /// centered, horizontally by `self`.
    pub fn place(self, bounds: Rect, measured: Vec2) -> Vec2 {
        let x = match self {
            TextAlign::Left => bounds.origin.x,
            TextAlign::Center => bounds.origin.x + (bounds.size.x - measured.x) * 0.5,
            TextAlign::Right => bounds.origin.x + bounds.size.x - measured.x,
        };
        Vec2::new(x, bounds.origin.y + (bounds.size.y - measured.y) * 0.5)
    }
}

/// A single line of text placed inside a box.
///
/// `origin` is already resolved from `bounds`, `align` and the measured run;
/// renderers that clip text use `bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    pub origin: Vec2,
    pub bounds: Rect,
    pub align: TextAlign,
}

impl TextCmd {
    pub fn placed(
        text: String,
        font: FontId,
        size: f32,
        color: Color,
        bounds: Rect,
        align: TextAlign,
        measured: Vec2,
    ) -> Self {
        let origin = align.place(bounds, measured);
        Self { text, font, size, color, origin, bounds, align }
    }
}

impl DrawList {
    /// Records a text draw command. Empty text is skipped.
    pub fn push_text(&mut self, z: i32, cmd: TextCmd) {
        if cmd.text.is_empty() {
            return;
        }
        self.push(z, DrawCmd::Text(cmd));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(text: &str, align: TextAlign) -> TextCmd {
        TextCmd::placed(
            text.to_string(),
            FontId(0),
            12.0,
            Color::white(),
            Rect::new(2.0, 0.0, 85.0, 35.0),
            align,
            Vec2::new(15.0, 15.0),
        )
    }

    #[test]
    fn centered_run_sits_in_the_middle() {
        assert_eq!(cmd("On", TextAlign::Center).origin, Vec2::new(37.0, 10.0));
    }

    #[test]
    fn left_and_right_hug_the_edges() {
        assert_eq!(cmd("On", TextAlign::Left).origin.x, 2.0);
        assert_eq!(cmd("On", TextAlign::Right).origin.x, 72.0);
    }

    #[test]
    fn empty_text_is_not_recorded() {
        let mut list = DrawList::new();
        list.push_text(0, cmd("", TextAlign::Center));
        assert!(list.is_empty());

        list.push_text(0, cmd("Off", TextAlign::Center));
        let DrawCmd::Text(text) = &list.items()[0].cmd else { panic!("expected text") };
        assert_eq!(text.bounds, Rect::new(2.0, 0.0, 85.0, 35.0));
    }
}
