pub(crate) mod rounded_rect;
pub(crate) mod shadow;
pub(crate) mod text;

pub use rounded_rect::RoundedRectCmd;
pub use shadow::ShadowCmd;
pub use text::{TextAlign, TextCmd};

use crate::coords::Vec2;
use crate::paint::Color;

/// Stroke drawn along the outer edge of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Drop shadow cast by a shape.
///
/// `blur_radius` is the Gaussian spread in logical pixels; `opacity`
/// multiplies `color` when the shadow is recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub offset: Vec2,
    pub blur_radius: f32,
    pub opacity: f32,
}

impl Shadow {
    #[inline]
    pub fn new(color: Color, offset: Vec2, blur_radius: f32, opacity: f32) -> Self {
        Self { color, offset, blur_radius, opacity }
    }
}
