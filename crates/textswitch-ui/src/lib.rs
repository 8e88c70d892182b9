//! TextSwitch UI: a retained widget layer on top of `textswitch-engine`, and
//! the [`TextSwitch`](widgets::text_switch::TextSwitch) on/off control.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use textswitch_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let mut switch = TextSwitch::new()
//!     .text_when_on("Do it!")
//!     .text_when_off("Don't do it!")
//!     .trail_color_when_on(Color::from_srgb_u8(126, 223, 179, 255));
//!
//! let listener = Rc::new(|on: bool, by_touch: bool| println!("on={on} touch={by_touch}"));
//! switch.set_listener(&listener);
//!
//! // In your frame callback:
//! let draw_list = scene.frame(&mut switch, viewport, &input);
//! ```

pub mod constraints;
pub mod event;
pub mod painter;
pub mod scene;
pub mod view;
pub mod widget;
pub mod widgets;

/// Everything needed to embed and drive a switch.
pub mod prelude {
    pub use crate::constraints::{Constraints, LayoutCtx};
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::scene::{UiInput, UiScene};
    pub use crate::view::{Label, TextAlign, View};
    pub use crate::widget::Widget;
    pub use crate::widgets::text_switch::{
        Overrides, StateChangeListener, StatePair, StateVisuals, SwitchDefaults, SwitchGeometry,
        SwitchStyle, TextSwitch,
    };

    pub use textswitch_engine::anim::{Easing, Lerp, Transition};
    pub use textswitch_engine::coords::{CornerRadii, Rect, Vec2};
    pub use textswitch_engine::paint::Color;
    pub use textswitch_engine::scene::{Border, Shadow};
    pub use textswitch_engine::text::FontId;
}
