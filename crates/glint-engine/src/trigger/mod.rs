//! Update triggers: what calls [`Surface::update`](crate::surface::Surface::update) and when.
//!
//! - [`ManualTrigger`]: one cycle per explicit call
//! - [`TimerTrigger`]: fixed-rate background thread

mod config;
mod manual;
mod timer;

pub use config::TriggerConfig;
pub use manual::ManualTrigger;
pub use timer::TimerTrigger;
