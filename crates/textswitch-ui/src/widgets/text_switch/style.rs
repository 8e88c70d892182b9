use textswitch_engine::anim::Easing;
use textswitch_engine::coords::Vec2;
use textswitch_engine::paint::Color;
use textswitch_engine::scene::Shadow;
use textswitch_engine::text::FontId;

use super::visuals::StatePair;

/// Built-in values used when no per-instance override is set.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchDefaults {
    pub text: StatePair<String>,
    pub trail_background: StatePair<Color>,
    pub trail_border: StatePair<Color>,
    pub text_color: StatePair<Color>,
    pub thumb: Color,
}

impl Default for SwitchDefaults {
    fn default() -> Self {
        Self {
            text: StatePair::new("On".to_string(), "Off".to_string()),
            trail_background: StatePair::new(Color::green(), Color::white()),
            trail_border: StatePair::new(Color::green(), Color::light_gray()),
            text_color: StatePair::new(Color::white(), Color::light_gray()),
            thumb: Color::white(),
        }
    }
}

/// Per-instance configuration of a [`TextSwitch`](super::TextSwitch).
///
/// Changing the style re-creates the switch's children.
///
/// ```rust,ignore
/// SwitchStyle::default()
///     .font(body_font)
///     .font_size(14.0)
///     .animation_duration(0.3)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStyle {
    /// Size of a switch built by [`TextSwitch::new`](super::TextSwitch::new).
    pub default_size: Vec2,
    /// Inset between the thumb/label and the switch's edges.
    pub margin: f32,
    pub font: Option<FontId>,
    pub font_size: f32,
    /// Seconds a touch-originated transition takes.
    pub animation_duration: f32,
    pub easing: Easing,
    pub trail_border_width: f32,
    pub thumb_shadow: Option<Shadow>,
    pub defaults: SwitchDefaults,
}

impl Default for SwitchStyle {
    fn default() -> Self {
        Self {
            default_size: Vec2::new(120.0, 35.0),
            margin: 2.0,
            font: None,
            font_size: 12.0,
            animation_duration: 0.2,
            easing: Easing::EaseInOut,
            trail_border_width: 1.0,
            thumb_shadow: Some(Shadow::new(Color::black(), Vec2::new(1.0, 1.0), 2.0, 0.75)),
            defaults: SwitchDefaults::default(),
        }
    }
}

impl SwitchStyle {
    pub fn default_size(mut self, v: Vec2) -> Self { self.default_size = v; self }
    pub fn margin(mut self, v: f32) -> Self { self.margin = v; self }
    pub fn font(mut self, v: FontId) -> Self { self.font = Some(v); self }
    pub fn font_size(mut self, v: f32) -> Self { self.font_size = v; self }
    pub fn animation_duration(mut self, v: f32) -> Self { self.animation_duration = v; self }
    pub fn easing(mut self, v: Easing) -> Self { self.easing = v; self }
    pub fn trail_border_width(mut self, v: f32) -> Self { self.trail_border_width = v; self }
    pub fn thumb_shadow(mut self, v: Option<Shadow>) -> Self { self.thumb_shadow = v; self }
    pub fn defaults(mut self, v: SwitchDefaults) -> Self { self.defaults = v; self }
}
