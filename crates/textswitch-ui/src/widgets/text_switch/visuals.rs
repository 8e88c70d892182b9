use textswitch_engine::anim::Lerp;
use textswitch_engine::paint::Color;

use super::geometry::SwitchGeometry;
use super::style::SwitchDefaults;

// ── StatePair ─────────────────────────────────────────────────────────────

/// One value per switch state, looked up by `is_on`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StatePair<T> {
    pub on: T,
    pub off: T,
}

impl<T> StatePair<T> {
    #[inline]
    pub const fn new(on: T, off: T) -> Self {
        Self { on, off }
    }

    #[inline]
    pub fn get(&self, is_on: bool) -> &T {
        if is_on { &self.on } else { &self.off }
    }

    #[inline]
    pub fn get_mut(&mut self, is_on: bool) -> &mut T {
        if is_on { &mut self.on } else { &mut self.off }
    }
}

// ── Overrides ─────────────────────────────────────────────────────────────

/// Per-instance text and color overrides. `None` falls back to the style's
/// [`SwitchDefaults`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub text: StatePair<Option<String>>,
    /// Trail background and border.
    pub trail_color: StatePair<Option<Color>>,
    pub text_color: StatePair<Option<Color>>,
    pub thumb_color: Option<Color>,
}

impl Overrides {
    pub fn text(&self, is_on: bool, defaults: &SwitchDefaults) -> String {
        self.text
            .get(is_on)
            .clone()
            .unwrap_or_else(|| defaults.text.get(is_on).clone())
    }

    pub fn trail_background(&self, is_on: bool, defaults: &SwitchDefaults) -> Color {
        self.trail_color.get(is_on).unwrap_or(*defaults.trail_background.get(is_on))
    }

    pub fn trail_border(&self, is_on: bool, defaults: &SwitchDefaults) -> Color {
        self.trail_color.get(is_on).unwrap_or(*defaults.trail_border.get(is_on))
    }

    pub fn text_color(&self, is_on: bool, defaults: &SwitchDefaults) -> Color {
        self.text_color.get(is_on).unwrap_or(*defaults.text_color.get(is_on))
    }

    pub fn thumb_color(&self, defaults: &SwitchDefaults) -> Color {
        self.thumb_color.unwrap_or(defaults.thumb)
    }
}

// ── StateVisuals ──────────────────────────────────────────────────────────

/// Everything a state change assigns, as one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct StateVisuals {
    pub thumb_x: f32,
    pub trail_background: Color,
    pub trail_border: Color,
    pub text_color: Color,
    pub text: String,
    pub label_x: f32,
}

impl StateVisuals {
    /// Target visuals for `is_on`, given the laid-out geometry for that state.
    pub fn resolve(
        is_on: bool,
        geometry: &SwitchGeometry,
        overrides: &Overrides,
        defaults: &SwitchDefaults,
    ) -> Self {
        Self {
            thumb_x: geometry.thumb.origin.x,
            trail_background: overrides.trail_background(is_on, defaults),
            trail_border: overrides.trail_border(is_on, defaults),
            text_color: overrides.text_color(is_on, defaults),
            text: overrides.text(is_on, defaults),
            label_x: geometry.label.origin.x,
        }
    }
}

impl Lerp for StateVisuals {
    /// Positions and colors interpolate; the text is not interpolable and
    /// shows the target for the whole transition.
    fn lerp(&self, to: &Self, t: f32) -> Self {
        Self {
            thumb_x: self.thumb_x.lerp(&to.thumb_x, t),
            trail_background: self.trail_background.lerp(&to.trail_background, t),
            trail_border: self.trail_border.lerp(&to.trail_border, t),
            text_color: self.text_color.lerp(&to.text_color, t),
            text: to.text.clone(),
            label_x: self.label_x.lerp(&to.label_x, t),
        }
    }
}
