//! Glint engine crate.
//!
//! Composes RGB devices into one lighting surface and drives the update cycle
//! that colors every LED:
//!
//! ```text
//!   Trigger ──► Surface::update()
//!                  │
//!                  ├─ group.update_effects()        (registry locked)
//!                  ├─ render groups by z-index       (registry locked)
//!                  │     brush.render ► update_effects ► finalize ► LED colors
//!                  ├─ exception notifications
//!                  └─ device.update(flush_leds)     (registry unlocked)
//! ```

pub mod brush;
pub mod coords;
pub mod device;
pub mod error;
pub mod group;
pub mod logging;
pub mod paint;
pub mod surface;
pub mod time;
pub mod trigger;

pub use error::ConfigError;
