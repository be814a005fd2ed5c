use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::coords::{Point, Rect};
use crate::paint::Color;

/// Identifier of an LED, unique within its device.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct LedId(pub u32);

/// Surface location of a device, shared with each of its LEDs.
///
/// Moving a device updates the placement once; every LED observes the new
/// location on its next [`Led::absolute_rect`] call.
#[derive(Debug, Default)]
pub struct Placement {
    location: RwLock<Point>,
}

impl Placement {
    pub fn new(location: Point) -> Self {
        Self {
            location: RwLock::new(location),
        }
    }

    pub fn location(&self) -> Point {
        *self.location.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_location(&self, location: Point) {
        *self.location.write().unwrap_or_else(PoisonError::into_inner) = location;
    }
}

#[derive(Debug, Default)]
struct LedState {
    color: Color,
    dirty: bool,
}

/// Smallest independently colorable unit of a device.
///
/// Invariants:
/// - `rect` is relative to the owning device's origin
/// - the color only changes through [`Led::set_color`], which marks the LED dirty
///   when the value actually differs
#[derive(Debug)]
pub struct Led {
    id: LedId,
    rect: Rect,
    placement: Arc<Placement>,
    state: Mutex<LedState>,
}

impl Led {
    pub fn new(id: LedId, rect: Rect, placement: Arc<Placement>) -> Self {
        Self {
            id,
            rect,
            placement,
            state: Mutex::new(LedState::default()),
        }
    }

    #[inline]
    pub fn id(&self) -> LedId {
        self.id
    }

    /// Rectangle relative to the owning device.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Rectangle in surface space.
    pub fn absolute_rect(&self) -> Rect {
        self.rect.translate(self.placement.location())
    }

    pub fn color(&self) -> Color {
        self.lock().color
    }

    /// Sets the current color. Returns true if the LED became dirty.
    pub fn set_color(&self, color: Color) -> bool {
        let mut state = self.lock();
        if state.color == color {
            return false;
        }
        state.color = color;
        state.dirty = true;
        true
    }

    pub fn is_dirty(&self) -> bool {
        self.lock().dirty
    }

    /// Forces the LED to be pushed on the next non-flushing device update.
    pub fn mark_dirty(&self) {
        self.lock().dirty = true;
    }

    /// Clears the dirty flag, returning its previous value.
    pub fn take_dirty(&self) -> bool {
        std::mem::take(&mut self.lock().dirty)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn led_at(device: Point) -> Led {
        Led::new(LedId(0), Rect::new(2.0, 3.0, 1.0, 1.0), Arc::new(Placement::new(device)))
    }

    #[test]
    fn absolute_rect_follows_placement() {
        let placement = Arc::new(Placement::new(Point::new(10.0, 20.0)));
        let led = Led::new(LedId(1), Rect::new(2.0, 3.0, 1.0, 1.0), placement.clone());
        assert_eq!(led.absolute_rect(), Rect::new(12.0, 23.0, 1.0, 1.0));

        placement.set_location(Point::new(0.0, 0.0));
        assert_eq!(led.absolute_rect(), Rect::new(2.0, 3.0, 1.0, 1.0));
    }

    #[test]
    fn set_color_marks_dirty_only_on_change() {
        let led = led_at(Point::zero());
        assert!(!led.is_dirty());

        assert!(led.set_color(Color::white()));
        assert!(led.take_dirty());
        assert!(!led.is_dirty());

        assert!(!led.set_color(Color::white()));
        assert!(!led.is_dirty());
    }

    #[test]
    fn mark_dirty_forces_push() {
        let led = led_at(Point::zero());
        led.mark_dirty();
        assert!(led.take_dirty());
    }
}
