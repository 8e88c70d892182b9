//! Animation primitives.
//!
//! A [`Transition`] moves any [`Lerp`] value from a start to a target over a
//! fixed duration, shaped by an [`Easing`] curve. Transitions never look at the
//! wall clock: the owner feeds them frame deltas (see `time::FrameClock`), so
//! they stay deterministic under test.

mod easing;
mod lerp;
mod transition;

pub use easing::Easing;
pub use lerp::Lerp;
pub use transition::Transition;
