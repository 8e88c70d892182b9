//! An on/off switch with a sliding thumb and a state-dependent text label.
//!
//! The switch owns three children, back to front: the trail (pill-shaped
//! background), the label and the thumb. Their frames follow from the
//! switch's size and state ([`SwitchGeometry`]); their colors and text follow
//! from the state, the per-instance [`Overrides`] and the style's
//! [`SwitchDefaults`] ([`StateVisuals`]).
//!
//! Every assignment of the state runs one transaction: the target visuals are
//! assigned as a batch, animated when the change came from a touch, and the
//! listener is told about it.

mod geometry;
mod listener;
mod style;
mod visuals;


use std::rc::{Rc, Weak};

use textswitch_engine::anim::Transition;
use textswitch_engine::coords::{Rect, Vec2};
use textswitch_engine::paint::Color;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::view::{Label, TextAlign, View};
use crate::widget::Widget;

pub use geometry::{label_x, thumb_x, SwitchGeometry};
pub use listener::StateChangeListener;
pub use style::{SwitchDefaults, SwitchStyle};
pub use visuals::{Overrides, StatePair, StateVisuals};

/// The switch's child elements. Created together, dropped together.
#[derive(Debug, Clone)]
struct Children {
    trail: View,
    thumb: View,
    label: Label,
}

impl Children {
    fn apply(&mut self, v: &StateVisuals) {
        self.thumb.frame.origin.x = v.thumb_x;

        self.trail.background = v.trail_background;
        self.trail.set_border_color(v.trail_border);

        self.label.color = v.text_color;
        self.label.text.clone_from(&v.text);
        self.label.frame.origin.x = v.label_x;
    }

    fn visuals(&self) -> StateVisuals {
        StateVisuals {
            thumb_x: self.thumb.frame.origin.x,
            trail_background: self.trail.background,
            trail_border: self.trail.border.as_ref().map_or(self.trail.background, |b| b.color),
            text_color: self.label.color,
            text: self.label.text.clone(),
            label_x: self.label.frame.origin.x,
        }
    }
}

/// A toggle switch showing "On"/"Off" (or custom text) next to a sliding thumb.
///
/// # Example
/// ```rust,ignore
/// let mut switch = TextSwitch::new()
///     .text_when_on("Do it!")
///     .text_when_off("Don't do it!")
///     .trail_color_when_on(Color::from_srgb_u8(126, 223, 179, 255))
///     .trail_color_when_off(Color::from_srgb_u8(255, 154, 155, 255));
///
/// let listener = Rc::new(|on: bool, by_touch: bool| log::info!("switch: {on} ({by_touch})"));
/// switch.set_listener(&listener);
/// ```
pub struct TextSwitch {
    /// Rectangle in the parent's coordinates; children are laid out in a
    /// local space whose origin is this rect's top-left.
    frame: Rect,
    /// Size reported by `measure`. The host may lay the switch out smaller
    /// for a frame; this is what it grows back to.
    preferred_size: Vec2,
    /// Built by `new`: `with_style` resizes to the style's `default_size`.
    sized_by_style: bool,
    is_on: bool,
    /// Set only between a touch and the end of the transaction it causes.
    has_touched: bool,
    enabled: bool,
    overrides: Overrides,
    style: SwitchStyle,
    listener: Option<Weak<dyn StateChangeListener>>,
    /// `None` until the construction pass has created the children.
    children: Option<Children>,
    transition: Option<Transition<StateVisuals>>,
}

impl TextSwitch {
    /// A switch of the style's default size (120×35).
    pub fn new() -> Self {
        let mut switch = Self::with_size(SwitchStyle::default().default_size);
        switch.sized_by_style = true;
        switch
    }

    pub fn with_size(size: Vec2) -> Self {
        Self::with_frame(Rect::from_size(size))
    }

    pub fn with_frame(frame: Rect) -> Self {
        let mut switch = Self {
            frame,
            preferred_size: frame.size,
            sized_by_style: false,
            is_on: false,
            has_touched: false,
            enabled: true,
            overrides: Overrides::default(),
            style: SwitchStyle::default(),
            listener: None,
            children: None,
            transition: None,
        };
        switch.initialize();
        switch
    }

    /// Replaces the style and re-creates the children with it. A switch built
    /// by [`new`](Self::new) also takes the style's `default_size`.
    pub fn with_style(mut self, style: SwitchStyle) -> Self {
        self.style = style;
        if self.sized_by_style {
            self.preferred_size = self.style.default_size;
            self.frame.size = self.style.default_size;
        }
        self.initialize();
        self
    }

    // ── builder-style overrides ───────────────────────────────────────────

    pub fn on(mut self, v: bool) -> Self { self.set_on(v); self }
    pub fn text_when_on(mut self, v: impl Into<String>) -> Self { self.set_text_when_on(Some(v.into())); self }
    pub fn text_when_off(mut self, v: impl Into<String>) -> Self { self.set_text_when_off(Some(v.into())); self }
    pub fn trail_color_when_on(mut self, v: Color) -> Self { self.set_trail_color_when_on(Some(v)); self }
    pub fn trail_color_when_off(mut self, v: Color) -> Self { self.set_trail_color_when_off(Some(v)); self }
    pub fn thumb_color(mut self, v: Color) -> Self { self.set_thumb_color(Some(v)); self }
    pub fn text_color_when_on(mut self, v: Color) -> Self { self.set_text_color_when_on(Some(v)); self }
    pub fn text_color_when_off(mut self, v: Color) -> Self { self.set_text_color_when_off(Some(v)); self }

    // ── construction ──────────────────────────────────────────────────────

    fn initialize(&mut self) {
        self.children = None;
        self.transition = None;

        let trail = self.create_trail();
        let label = self.create_label();
        let thumb = self.create_thumb();
        self.children = Some(Children { trail, thumb, label });

        self.layout_subviews();
        self.refresh_visuals();
    }

    fn create_trail(&self) -> View {
        let d = &self.style.defaults;
        View::new()
            .background(*d.trail_background.get(false))
            .border(self.style.trail_border_width, *d.trail_border.get(false))
            .corner_radius(self.frame.size.y * 0.5)
            .interactive(false)
    }

    fn create_thumb(&self) -> View {
        let mut thumb = View::new()
            .background(self.style.defaults.thumb)
            .corner_radius(self.frame.size.y * 0.5)
            .interactive(false);
        thumb.shadow = self.style.thumb_shadow.clone();
        thumb
    }

    fn create_label(&self) -> Label {
        let d = &self.style.defaults;
        Label::new(self.overrides.text(false, d))
            .color(*d.text_color.get(false))
            .font(self.style.font)
            .font_size(self.style.font_size)
            .align(TextAlign::Center)
            .interactive(false)
    }

    // ── layout ────────────────────────────────────────────────────────────

    /// Recomputes every child frame from the current size and state.
    ///
    /// Does nothing before the children exist. A running transition is
    /// dropped: its positions belong to the old geometry.
    pub fn layout_subviews(&mut self) {
        let Some(children) = self.children.as_mut() else {
            return;
        };

        let g = SwitchGeometry::compute(self.frame.size, self.is_on, self.style.margin);
        children.trail.frame = g.trail;
        children.trail.corner_radius = g.trail_radius;
        children.thumb.frame = g.thumb;
        children.thumb.corner_radius = g.thumb_radius;
        children.label.frame = g.label;

        self.transition = None;
        log::trace!("text switch layout: size={:?} on={} thumb={:?}", self.frame.size, self.is_on, g.thumb);
    }

    #[inline]
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Moves and/or resizes the switch. Children are re-laid out only when
    /// the size changed.
    pub fn set_frame(&mut self, frame: Rect) {
        let resized = frame.size != self.frame.size;
        self.frame = frame;
        if resized {
            self.layout_subviews();
        }
    }

    /// The size the switch asks for when measured.
    #[inline]
    pub fn preferred_size(&self) -> Vec2 {
        self.preferred_size
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.children.is_some()
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }

    /// Assigns the state and runs a state-change transaction.
    ///
    /// Every call runs the transaction and notifies the listener, even when
    /// `on` equals the current state.
    pub fn set_on(&mut self, on: bool) {
        self.is_on = on;
        self.change_state(self.has_touched);
        self.has_touched = false;
    }

    fn change_state(&mut self, animated: bool) {
        let by_touch = self.has_touched;
        let target = self.target_visuals();

        if let Some(children) = self.children.as_mut() {
            let before = children.visuals();
            children.apply(&target);

            self.transition = if animated {
                Some(Transition::supersede(
                    self.transition.as_ref(),
                    before,
                    target,
                    self.style.animation_duration,
                    self.style.easing,
                ))
            } else {
                None
            };
        }

        log::debug!("text switch {} (touch: {by_touch}, animated: {animated})", if self.is_on { "on" } else { "off" });
        self.notify_listener(by_touch);
    }

    /// Visuals the current state resolves to, positions included.
    fn target_visuals(&self) -> StateVisuals {
        let g = SwitchGeometry::compute(self.frame.size, self.is_on, self.style.margin);
        StateVisuals::resolve(self.is_on, &g, &self.overrides, &self.style.defaults)
    }

    /// Applies the current state's visuals without a transaction: no
    /// animation, no notification.
    fn refresh_visuals(&mut self) {
        let target = self.target_visuals();
        let thumb = self.overrides.thumb_color(&self.style.defaults);
        if let Some(children) = self.children.as_mut() {
            children.apply(&target);
            children.thumb.background = thumb;
        }
    }

    // ── touch ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabled switches ignore touches; `set_on` still works.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// A touch began on the switch: flips the state with an animated
    /// transaction and consumes the touch.
    pub fn touch_begin(&mut self) -> EventResult {
        if !self.enabled {
            return EventResult::Ignored;
        }
        self.has_touched = true;
        self.set_on(!self.is_on);
        EventResult::Consumed
    }

    // ── listener ──────────────────────────────────────────────────────────

    /// Attaches `listener` without taking ownership and notifies it once with
    /// the current state.
    pub fn set_listener<L: StateChangeListener + 'static>(&mut self, listener: &Rc<L>) {
        let weak: Weak<L> = Rc::downgrade(listener);
        self.set_listener_weak(weak);
    }

    /// Like [`set_listener`](Self::set_listener) for an already type-erased handle.
    pub fn set_listener_weak(&mut self, listener: Weak<dyn StateChangeListener>) {
        self.listener = Some(listener);
        self.notify_listener(false);
    }

    pub fn remove_listener(&mut self) {
        self.listener = None;
    }

    fn notify_listener(&self, by_touch: bool) {
        if let Some(listener) = self.listener.as_ref().and_then(Weak::upgrade) {
            listener.changed_state(self.is_on, by_touch);
        }
    }

    // ── overrides ─────────────────────────────────────────────────────────

    #[inline]
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    pub fn set_text_when_on(&mut self, text: Option<String>) {
        self.overrides.text.on = text;
        self.overrides_changed();
    }

    pub fn set_text_when_off(&mut self, text: Option<String>) {
        self.overrides.text.off = text;
        self.overrides_changed();
    }

    pub fn set_trail_color_when_on(&mut self, color: Option<Color>) {
        self.overrides.trail_color.on = color;
        self.overrides_changed();
    }

    pub fn set_trail_color_when_off(&mut self, color: Option<Color>) {
        self.overrides.trail_color.off = color;
        self.overrides_changed();
    }

    pub fn set_thumb_color(&mut self, color: Option<Color>) {
        self.overrides.thumb_color = color;
        self.overrides_changed();
    }

    pub fn set_text_color_when_on(&mut self, color: Option<Color>) {
        self.overrides.text_color.on = color;
        self.overrides_changed();
    }

    pub fn set_text_color_when_off(&mut self, color: Option<Color>) {
        self.overrides.text_color.off = color;
        self.overrides_changed();
    }

    fn overrides_changed(&mut self) {
        self.layout_subviews();
        self.refresh_visuals();
    }

    // ── inspection ────────────────────────────────────────────────────────

    #[inline]
    pub fn style(&self) -> &SwitchStyle {
        &self.style
    }

    pub fn trail(&self) -> Option<&View> {
        self.children.as_ref().map(|c| &c.trail)
    }

    pub fn thumb(&self) -> Option<&View> {
        self.children.as_ref().map(|c| &c.thumb)
    }

    pub fn label(&self) -> Option<&Label> {
        self.children.as_ref().map(|c| &c.label)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// What is on screen right now: the running transition's value, or the
    /// assigned visuals when nothing animates.
    pub fn presented_visuals(&self) -> Option<StateVisuals> {
        match &self.transition {
            Some(t) => Some(t.value()),
            None => self.children.as_ref().map(Children::visuals),
        }
    }
}

impl Default for TextSwitch { fn default() -> Self { Self::new() } }

impl Widget for TextSwitch {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(self.preferred_size)
    }

    fn layout(&mut self, rect: Rect) {
        self.set_frame(rect);
    }

    fn advance(&mut self, dt: f32) {
        if let Some(t) = self.transition.as_mut() {
            if !t.advance(dt) {
                self.transition = None;
            }
        }
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        let Some(children) = &self.children else { return };

        let presented;
        let children = match &self.transition {
            Some(t) => {
                let mut c = children.clone();
                c.apply(&t.value());
                presented = c;
                &presented
            }
            None => children,
        };

        let offset = rect.origin;
        children.trail.paint(painter, offset);
        children.label.paint(painter, offset);
        children.thumb.paint(painter, offset);
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        if !self.enabled || !rect.contains(event.pos()) {
            return EventResult::Ignored;
        }
        match event {
            UiEvent::TouchBegin { .. } => self.touch_begin(),
            // The switch owns the whole gesture once it began inside it.
            UiEvent::TouchEnd { .. } => EventResult::Consumed,
        }
    }
}
