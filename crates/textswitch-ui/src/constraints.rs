use textswitch_engine::coords::Vec2;
use textswitch_engine::text::FontSystem;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from the host during measure.
///
/// A widget may return any size in `[min, max]`; [`Constraints::constrain`]
/// enforces that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: widget must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: widget can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::ZERO, max }
    }

    /// No constraint: widget can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::ZERO, max: Vec2::splat(f32::INFINITY) }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        size.max(self.min).min(self.max)
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Resources made available to [`Widget::measure`](crate::widget::Widget::measure).
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
    /// Physical-to-logical pixel ratio used for text measurement.
    pub scale: f32,
}

impl LayoutCtx<'_> {
    /// Measures `text` at this context's scale.
    #[inline]
    pub fn measure_text(
        &self,
        text: &str,
        font: textswitch_engine::text::FontId,
        size: f32,
        max_width: Option<f32>,
    ) -> Vec2 {
        self.fonts.measure_text_scaled(text, font, size, max_width, self.scale)
    }
}
