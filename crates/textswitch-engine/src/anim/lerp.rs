use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Linear interpolation between two values of the same type.
///
/// Continuous values yield `self` at `t = 0` and `to` at `t = 1`; values that
/// cannot be blended (text) take `to` for every `t`. Implementations must not
/// clamp `t`.
pub trait Lerp: Sized {
    fn lerp(&self, to: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        self * (1.0 - t) + to * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Vec2::new(self.x.lerp(&to.x, t), self.y.lerp(&to.y, t))
    }
}

impl Lerp for Rect {
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Rect::from_origin_size(self.origin.lerp(&to.origin, t), self.size.lerp(&to.size, t))
    }
}

impl Lerp for Color {
    /// Interpolates premultiplied channels.
    #[inline]
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Color::from_premul(
            self.r.lerp(&to.r, t),
            self.g.lerp(&to.g, t),
            self.b.lerp(&to.b, t),
            self.a.lerp(&to.a, t),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f32_endpoints_and_midpoint() {
        assert_eq!(2.0f32.lerp(&83.0, 0.0), 2.0);
        assert_eq!(2.0f32.lerp(&83.0, 1.0), 83.0);
        assert_eq!(0.0f32.lerp(&10.0, 0.5), 5.0);
    }

    #[test]
    fn rect_moves_origin_and_size() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 20.0, 30.0, 10.0);
        assert_eq!(a.lerp(&b, 0.5), Rect::new(5.0, 10.0, 20.0, 10.0));
    }

    #[test]
    fn color_blends_premultiplied() {
        let mid = Color::white().lerp(&Color::green(), 0.5);
        assert_eq!(mid, Color::from_premul(0.5, 1.0, 0.5, 1.0));
    }
}
