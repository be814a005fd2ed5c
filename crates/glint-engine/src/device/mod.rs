//! Device and LED contracts.
//!
//! This module is responsible for:
//! - the [`Device`] trait the surface consumes
//! - [`Led`] state (relative geometry, current color, dirty flag)
//! - [`VirtualDevice`], an in-memory device for tests and demos

mod contract;
mod led;
mod virtual_device;

pub use contract::{Device, DeviceInfo, DeviceKind};
pub use led::{Led, LedId, Placement};
pub use virtual_device::{LedSink, VirtualDevice};
