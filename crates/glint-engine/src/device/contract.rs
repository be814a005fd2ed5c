use std::fmt;
use std::sync::Arc;

use crate::coords::{Point, Rect, Size};

use super::Led;

/// Broad category of a device, used for logging and layout decisions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum DeviceKind {
    Keyboard,
    Mouse,
    Mousepad,
    Headset,
    HeadsetStand,
    Speaker,
    LedStrip,
    LedController,
    Cooler,
    #[default]
    Unknown,
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeviceKind::Keyboard => "keyboard",
            DeviceKind::Mouse => "mouse",
            DeviceKind::Mousepad => "mousepad",
            DeviceKind::Headset => "headset",
            DeviceKind::HeadsetStand => "headset stand",
            DeviceKind::Speaker => "speaker",
            DeviceKind::LedStrip => "led strip",
            DeviceKind::LedController => "led controller",
            DeviceKind::Cooler => "cooler",
            DeviceKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Static description of a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub name: String,
    pub kind: DeviceKind,
}

impl DeviceInfo {
    pub fn new(name: impl Into<String>, kind: DeviceKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// Device contract consumed by the surface.
///
/// Providers (vendor SDK bindings, network bridges, in-memory fakes) implement
/// this; the surface only reads placement and LEDs and calls [`Device::update`].
pub trait Device: Send + Sync {
    fn info(&self) -> &DeviceInfo;

    /// Top-left corner of the device on the surface.
    fn location(&self) -> Point;

    /// Moves the device. Callers should refresh the surface rectangle afterwards.
    fn set_location(&self, location: Point);

    fn size(&self) -> Size;

    /// LEDs in device order. The slice must not change while the device is attached.
    fn leds(&self) -> &[Arc<Led>];

    /// Pushes LED colors to hardware.
    ///
    /// With `flush_leds` every LED is written; otherwise the device decides which
    /// LEDs are dirty. Failures stay inside the device.
    fn update(&self, flush_leds: bool);

    /// Placement rectangle in surface space.
    fn rect(&self) -> Rect {
        Rect::from_location_size(self.location(), self.size())
    }
}
