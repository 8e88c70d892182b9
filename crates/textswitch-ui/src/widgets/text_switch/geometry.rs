use textswitch_engine::coords::{Rect, Vec2};

/// Child frames of a switch, in the switch's local coordinates.
///
/// A pure function of `(size, is_on, margin)`: computing it twice with the
/// same inputs yields the same frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwitchGeometry {
    pub trail: Rect,
    pub thumb: Rect,
    pub label: Rect,
    pub trail_radius: f32,
    pub thumb_radius: f32,
}

impl SwitchGeometry {
    pub fn compute(size: Vec2, is_on: bool, margin: f32) -> Self {
        let (w, h) = (size.x, size.y);

        // Thumb: a square as tall as the control.
        let thumb_size = Vec2::new(h, h);
        let thumb = Rect::from_origin_size(
            Vec2::new(thumb_x(w, thumb_size.x, is_on, margin), h * 0.5 - thumb_size.y * 0.5),
            thumb_size,
        );

        let trail_size = size;
        let trail = Rect::from_origin_size(Vec2::new(w - trail_size.x, 0.0), trail_size);

        // Label fills whatever the thumb leaves of the trail.
        let label_size = Vec2::new((trail_size.x - thumb_size.x).max(0.0), trail_size.y);
        let label = Rect::from_origin_size(
            Vec2::new(label_x(w, label_size.x, is_on, margin), h * 0.5 - label_size.y * 0.5),
            label_size,
        );

        Self {
            trail,
            thumb,
            label,
            trail_radius: trail.size.y * 0.5,
            thumb_radius: thumb.size.y * 0.5,
        }
    }
}

/// Left edge of the thumb: against the right edge when on, the left when off.
#[inline]
pub fn thumb_x(width: f32, thumb_width: f32, is_on: bool, margin: f32) -> f32 {
    if is_on { width - thumb_width - margin } else { margin }
}

/// Left edge of the label, mirroring the thumb.
#[inline]
pub fn label_x(width: f32, label_width: f32, is_on: bool, margin: f32) -> f32 {
    if is_on { margin } else { width - label_width - margin }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Vec2 = Vec2::new(120.0, 35.0);

    #[test]
    fn thumb_is_square_of_height() {
        let g = SwitchGeometry::compute(SIZE, false, 2.0);
        assert_eq!(g.thumb.size, Vec2::new(35.0, 35.0));
        assert_eq!(g.thumb.origin.y, 0.0);
    }

    #[test]
    fn thumb_x_on_and_off() {
        assert_eq!(SwitchGeometry::compute(SIZE, true, 2.0).thumb.origin.x, 83.0);
        assert_eq!(SwitchGeometry::compute(SIZE, false, 2.0).thumb.origin.x, 2.0);
    }

    #[test]
    fn label_mirrors_thumb() {
        let on = SwitchGeometry::compute(SIZE, true, 2.0);
        let off = SwitchGeometry::compute(SIZE, false, 2.0);
        assert_eq!(on.label, Rect::new(2.0, 0.0, 85.0, 35.0));
        assert_eq!(off.label, Rect::new(33.0, 0.0, 85.0, 35.0));
    }

    #[test]
    fn trail_fills_bounds() {
        let g = SwitchGeometry::compute(SIZE, true, 2.0);
        assert_eq!(g.trail, Rect::new(0.0, 0.0, 120.0, 35.0));
    }

    #[test]
    fn radii_are_half_heights() {
        let g = SwitchGeometry::compute(Vec2::new(200.0, 50.0), false, 2.0);
        assert_eq!(g.trail_radius, 25.0);
        assert_eq!(g.thumb_radius, 25.0);
    }

    #[test]
    fn compute_is_idempotent() {
        for &on in &[true, false] {
            for size in [SIZE, Vec2::new(64.0, 20.0), Vec2::new(300.0, 80.0)] {
                assert_eq!(
                    SwitchGeometry::compute(size, on, 2.0),
                    SwitchGeometry::compute(size, on, 2.0),
                );
            }
        }
    }

    #[test]
    fn narrow_bounds_do_not_produce_negative_label() {
        let g = SwitchGeometry::compute(Vec2::new(20.0, 35.0), false, 2.0);
        assert_eq!(g.label.size.x, 0.0);
    }
}
