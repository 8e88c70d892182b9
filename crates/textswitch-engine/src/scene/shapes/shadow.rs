use crate::coords::{CornerRadii, Rect};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Shadow;

/// Shadow draw payload.
///
/// `rect` is the casting shape already moved by the shadow offset; renderers
/// blur it by `blur_radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowCmd {
    pub rect: Rect,
    pub radii: CornerRadii,
    pub color: Color,
    pub blur_radius: f32,
}

impl DrawList {
    /// Records the shadow cast by a rounded rect at `rect`.
    ///
    /// Fully transparent shadows are skipped.
    pub fn push_shadow(&mut self, z: i32, rect: Rect, radii: CornerRadii, shadow: &Shadow) {
        let color = shadow.color.with_opacity(shadow.opacity);
        if color.a <= 0.0 {
            return;
        }
        self.push(z, DrawCmd::Shadow(ShadowCmd {
            rect: rect.translate(shadow.offset),
            radii,
            color,
            blur_radius: shadow.blur_radius.max(0.0),
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn shadow_is_offset_and_faded() {
        let mut list = DrawList::new();
        let shadow = Shadow::new(Color::black(), Vec2::new(1.0, 1.0), 2.0, 0.75);
        list.push_shadow(0, Rect::new(2.0, 0.0, 35.0, 35.0), CornerRadii::all(17.5), &shadow);

        let DrawCmd::Shadow(cmd) = &list.items()[0].cmd else { panic!("expected shadow") };
        assert_eq!(cmd.rect, Rect::new(3.0, 1.0, 35.0, 35.0));
        assert_eq!(cmd.color.a, 0.75);
        assert_eq!(cmd.blur_radius, 2.0);
    }

    #[test]
    fn transparent_shadow_is_skipped() {
        let mut list = DrawList::new();
        let shadow = Shadow::new(Color::black(), Vec2::ZERO, 2.0, 0.0);
        list.push_shadow(0, Rect::new(0.0, 0.0, 10.0, 10.0), CornerRadii::all(0.0), &shadow);
        assert!(list.is_empty());
    }
}
