//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to a runtime.
//! Call `tick()` once per frame to obtain the `FrameTime` used to advance animations.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
