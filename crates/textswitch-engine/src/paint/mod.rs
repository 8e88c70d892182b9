//! Paint model shared between UI and the draw stream.
//!
//! Scope: color representation (linear premultiplied alpha).
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
