use textswitch_engine::coords::{Rect, Vec2};
use textswitch_engine::scene::DrawList;
use textswitch_engine::text::{FontId, FontLoadError, FontSystem};
use textswitch_engine::time::FrameClock;

use crate::constraints::{Constraints, LayoutCtx};
use crate::event::UiEvent;
use crate::painter::Painter;
use crate::widget::Widget;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of pointer input for one UI frame.
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    /// Current pointer position in logical pixels.
    pub mouse_pos: Vec2,
    /// `true` for exactly one frame when the primary button goes down.
    pub touch_began: bool,
    /// `true` for exactly one frame when the primary button goes up.
    pub touch_ended: bool,
}

impl UiInput {
    /// Input for a frame in which the pointer went down at `pos`.
    pub fn touch_at(pos: Vec2) -> Self {
        Self { mouse_pos: pos, touch_began: true, touch_ended: false }
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem`, the `DrawList` populated each frame and the
/// `FrameClock` that advances animations. The root widget is retained by the
/// caller and borrowed for each frame; it is centered in the viewport at its
/// measured size.
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let font = ui.load_font(include_bytes!("my_font.ttf"))?;
/// let mut switch = TextSwitch::new().with_style(SwitchStyle::default().font(font));
///
/// // In your frame callback:
/// let draw_list = ui.frame(&mut switch, viewport, &input);
/// ```
pub struct UiScene {
    pub font_system: FontSystem,
    /// Draw list populated by the most recent frame.
    pub draw_list: DrawList,
    /// Physical-to-logical pixel ratio passed to text measurement.
    pub scale: f32,
    clock: FrameClock,
}

impl UiScene {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            draw_list: DrawList::new(),
            scale: 1.0,
            clock: FrameClock::new(),
        }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Runs one frame, advancing animations by the wall-clock time since the
    /// previous frame.
    #[must_use]
    pub fn frame<W: Widget + ?Sized>(
        &mut self,
        root: &mut W,
        viewport: Vec2,
        input: &UiInput,
    ) -> &mut DrawList {
        let dt = self.clock.tick().dt;
        self.frame_with_dt(root, viewport, input, dt)
    }

    /// Like [`frame`](Self::frame) with an explicit time step, for hosts with
    /// their own clock and for deterministic replays.
    #[must_use]
    pub fn frame_with_dt<W: Widget + ?Sized>(
        &mut self,
        root: &mut W,
        viewport: Vec2,
        input: &UiInput,
        dt: f32,
    ) -> &mut DrawList {
        self.draw_list.clear();

        // ── animate ───────────────────────────────────────────────────────
        root.advance(dt);

        // ── measure + layout ──────────────────────────────────────────────
        let size = {
            let ctx = LayoutCtx { fonts: &self.font_system, scale: self.scale };
            root.measure(Constraints::loose(viewport), &ctx)
        };
        let rect = Rect::from_origin_size((viewport - size) * 0.5, size);
        root.layout(rect);

        // ── events ────────────────────────────────────────────────────────
        if input.touch_began {
            let result = root.on_event(&UiEvent::TouchBegin { pos: input.mouse_pos }, rect);
            log::trace!("touch begin at {:?}: {:?}", input.mouse_pos, result);
        }
        if input.touch_ended {
            let result = root.on_event(&UiEvent::TouchEnd { pos: input.mouse_pos }, rect);
            log::trace!("touch end at {:?}: {:?}", input.mouse_pos, result);
        }

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list, &self.font_system, self.scale);
            root.paint(&mut painter, rect);
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use textswitch_engine::paint::Color;
    use textswitch_engine::scene::DrawCmd;

    use super::*;
    use crate::widgets::text_switch::{StateChangeListener, TextSwitch};

    const VIEWPORT: Vec2 = Vec2::new(320.0, 480.0);

    #[derive(Default)]
    struct RecordingListener {
        calls: RefCell<Vec<(bool, bool)>>,
    }

    impl StateChangeListener for RecordingListener {
        fn changed_state(&self, new_state: bool, by_touch: bool) {
            self.calls.borrow_mut().push((new_state, by_touch));
        }
    }

    fn thumb_x(list: &DrawList) -> f32 {
        // Trail first, thumb last: the thumb is the final rounded rect.
        list.items()
            .iter()
            .filter_map(|i| i.cmd.as_rounded_rect())
            .last()
            .map(|c| c.rect.origin.x)
            .unwrap()
    }

    // ── placement ─────────────────────────────────────────────────────────

    #[test]
    fn root_is_centered_at_measured_size() {
        let mut ui = UiScene::new();
        let mut switch = TextSwitch::new();
        let _ = ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::default(), 0.0);
        assert_eq!(switch.frame(), Rect::new(100.0, 222.5, 120.0, 35.0));
    }

    #[test]
    fn paints_trail_label_then_thumb_back_to_front() {
        let mut ui = UiScene::new();
        let mut switch = TextSwitch::new();
        let list = ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::default(), 0.0);

        let kinds: Vec<&str> = list
            .iter_in_paint_order()
            .map(|i| match i.cmd {
                DrawCmd::RoundedRect(_) => "rect",
                DrawCmd::Shadow(_) => "shadow",
                DrawCmd::Text(_) => "text",
            })
            .collect();
        // No font configured, so the label emits nothing.
        assert_eq!(kinds, vec!["rect", "shadow", "rect"]);
    }

    #[test]
    fn painted_geometry_is_in_parent_space() {
        let mut ui = UiScene::new();
        let mut switch = TextSwitch::new();
        let list = ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::default(), 0.0);
        // Off: thumb at margin 2 inside a switch whose left edge is at 100.
        assert_eq!(thumb_x(list), 102.0);
    }

    #[test]
    fn switch_regains_its_size_after_a_narrow_viewport() {
        let mut ui = UiScene::new();
        let mut switch = TextSwitch::new();

        let _ = ui.frame_with_dt(&mut switch, Vec2::new(60.0, 480.0), &UiInput::default(), 0.0);
        assert_eq!(switch.frame().size, Vec2::new(60.0, 35.0));

        let _ = ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::default(), 0.0);
        assert_eq!(switch.frame(), Rect::new(100.0, 222.5, 120.0, 35.0));
        assert_eq!(thumb_x(&ui.draw_list), 102.0);
    }

    // ── touch ─────────────────────────────────────────────────────────────

    #[test]
    fn touch_inside_flips_and_reports_touch() {
        let mut ui = UiScene::new();
        let mut switch = TextSwitch::new();
        let listener = Rc::new(RecordingListener::default());
        switch.set_listener(&listener);

        let _ = ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::default(), 0.0);
        let _ = ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::touch_at(Vec2::new(160.0, 240.0)), 0.0);

        assert!(switch.is_on());
        assert_eq!(*listener.calls.borrow(), vec![(false, false), (true, true)]);
    }

    #[test]
    fn touch_outside_is_ignored() {
        let mut ui = UiScene::new();
        let mut switch = TextSwitch::new();
        let _ = ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::default(), 0.0);
        let _ = ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::touch_at(Vec2::new(5.0, 5.0)), 0.0);
        assert!(!switch.is_on());
    }

    // ── animation ─────────────────────────────────────────────────────────

    #[test]
    fn touch_animates_thumb_across_frames() {
        let mut ui = UiScene::new();
        let mut switch = TextSwitch::new();
        let _ = ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::default(), 0.0);

        let start = thumb_x(ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::touch_at(Vec2::new(160.0, 240.0)), 0.0));
        assert_eq!(start, 102.0);

        let mid = thumb_x(ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::default(), 0.1));
        assert!(mid > 102.0 && mid < 183.0, "mid-flight x = {mid}");

        let end = thumb_x(ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::default(), 0.1));
        assert_eq!(end, 183.0);
        assert!(!switch.is_animating());
    }

    #[test]
    fn programmatic_change_paints_final_state_immediately() {
        let mut ui = UiScene::new();
        let mut switch = TextSwitch::new().trail_color_when_on(Color::from_srgb_u8(126, 223, 179, 255));
        let _ = ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::default(), 0.0);

        switch.set_on(true);
        let list = ui.frame_with_dt(&mut switch, VIEWPORT, &UiInput::default(), 0.0);
        let trail = list.items()[0].cmd.as_rounded_rect().unwrap();
        assert_eq!(trail.color, Color::from_srgb_u8(126, 223, 179, 255));
        assert_eq!(thumb_x(list), 183.0);
    }
}
