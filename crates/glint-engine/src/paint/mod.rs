//! Color model shared by brushes and devices.
//!
//! Scope:
//! - color representation (straight RGBA, `f32` channels)
//! - color stops and gradient sampling
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, Gradient, SpreadMode};
