//! Frame timing for update loops.
//!
//! One [`FrameClock`] per loop; call `tick()` once per update cycle.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
