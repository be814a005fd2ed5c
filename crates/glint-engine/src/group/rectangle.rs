use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, Weak};

use crate::brush::SharedBrush;
use crate::coords::Rect;
use crate::device::Led;
use crate::surface::Surface;

use super::props::GroupProps;
use super::{LedGroup, ZIndex};

/// Group of every surface LED covered by a rectangle.
///
/// Membership is resolved against the surface on each [`LedGroup::leds`] call:
/// an LED belongs to the group when the rectangle covers at least
/// `min_overlay` of its area. Zero-area LEDs belong when their location lies
/// inside the rectangle.
pub struct RectangleLedGroup {
    props: GroupProps,
    surface: Weak<Surface>,
    rect: RwLock<Rect>,
    min_overlay: f32,
}

impl RectangleLedGroup {
    pub const DEFAULT_MIN_OVERLAY: f32 = 0.5;

    pub fn new(name: impl Into<String>, surface: &Arc<Surface>, rect: Rect) -> Self {
        Self {
            props: GroupProps::new(name),
            surface: Arc::downgrade(surface),
            rect: RwLock::new(rect),
            min_overlay: Self::DEFAULT_MIN_OVERLAY,
        }
    }

    /// Required covered fraction of an LED's area, clamped to [0, 1].
    pub fn with_min_overlay(mut self, min_overlay: f32) -> Self {
        self.min_overlay = min_overlay.clamp(0.0, 1.0);
        self
    }

    pub fn with_brush(self, brush: SharedBrush) -> Self {
        self.props.set_brush(Some(brush));
        self
    }

    pub fn with_z_index(self, z: impl Into<ZIndex>) -> Self {
        self.props.set_z_index(z.into());
        self
    }

    pub fn rect(&self) -> Rect {
        *self.rect.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_rect(&self, rect: Rect) {
        *self.rect.write().unwrap_or_else(PoisonError::into_inner) = rect;
    }

    pub fn set_brush(&self, brush: Option<SharedBrush>) {
        self.props.set_brush(brush);
    }

    pub fn set_z_index(&self, z: impl Into<ZIndex>) {
        self.props.set_z_index(z.into());
    }

    pub fn is_attached(&self) -> bool {
        self.props.is_attached()
    }

    fn covers(&self, area: Rect, led: &Led) -> bool {
        let led_rect = led.absolute_rect();
        let led_area = led_rect.size.area();
        if led_area <= 0.0 {
            return area.contains(led_rect.location);
        }
        let covered = area.intersect(led_rect).map_or(0.0, |i| i.size.area());
        covered > 0.0 && covered >= led_area * self.min_overlay
    }
}

impl LedGroup for RectangleLedGroup {
    fn name(&self) -> &str {
        self.props.name()
    }

    fn leds(&self) -> Vec<Arc<Led>> {
        let Some(surface) = self.surface.upgrade() else {
            return Vec::new();
        };
        let area = self.rect();
        surface
            .leds()
            .into_iter()
            .filter(|led| self.covers(area, led))
            .collect()
    }

    fn brush(&self) -> Option<SharedBrush> {
        self.props.brush()
    }

    fn z_index(&self) -> ZIndex {
        self.props.z_index()
    }

    fn on_attach(&self) {
        self.props.set_attached(true);
    }

    fn on_detach(&self) {
        self.props.set_attached(false);
    }
}

impl fmt::Debug for RectangleLedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RectangleLedGroup")
            .field("name", &self.props.name())
            .field("rect", &self.rect())
            .field("min_overlay", &self.min_overlay)
            .field("z_index", &self.props.z_index())
            .field("attached", &self.props.is_attached())
            .finish()
    }
}
