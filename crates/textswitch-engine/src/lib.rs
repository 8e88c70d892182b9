//! TextSwitch engine crate.
//!
//! Owns the renderer-agnostic pieces the widget layer builds on: geometry,
//! colors, the draw stream, font measurement, frame timing and animation.

pub mod anim;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;
