use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::brush::SharedBrush;
use crate::device::Led;

use super::props::GroupProps;
use super::{LedGroup, ZIndex};

/// Group with an explicit, editable member list.
pub struct ListLedGroup {
    props: GroupProps,
    leds: RwLock<Vec<Arc<Led>>>,
}

impl ListLedGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            props: GroupProps::new(name),
            leds: RwLock::new(Vec::new()),
        }
    }

    pub fn with_leds<I>(self, leds: I) -> Self
    where
        I: IntoIterator<Item = Arc<Led>>,
    {
        self.add_all(leds);
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

    /// Adds an LED. Returns false if it is already a member.
    pub fn add(&self, led: Arc<Led>) -> bool {
        let mut leds = self.leds.write().unwrap_or_else(PoisonError::into_inner);
        if leds.iter().any(|l| Arc::ptr_eq(l, &led)) {
            return false;
        }
        leds.push(led);
        true
    }

    /// Adds every LED that is not already a member. Returns how many were added.
    pub fn add_all<I>(&self, leds: I) -> usize
    where
        I: IntoIterator<Item = Arc<Led>>,
    {
        leds.into_iter().filter(|led| self.add(led.clone())).count()
    }

    /// Removes an LED. Returns false if it was not a member.
    pub fn remove(&self, led: &Arc<Led>) -> bool {
        let mut leds = self.leds.write().unwrap_or_else(PoisonError::into_inner);
        match leds.iter().position(|l| Arc::ptr_eq(l, led)) {
            Some(i) => {
                leds.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, led: &Arc<Led>) -> bool {
        self.leds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|l| Arc::ptr_eq(l, led))
    }

    pub fn clear(&self) {
        self.leds.write().unwrap_or_else(PoisonError::into_inner).clear();
    }

    pub fn len(&self) -> usize {
        self.leds.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn set_brush(&self, brush: Option<SharedBrush>) {
        self.props.set_brush(brush);
    }

    pub fn set_z_index(&self, z: impl Into<ZIndex>) {
        self.props.set_z_index(z.into());
    }

    /// True while the group is registered with a surface.
    pub fn is_attached(&self) -> bool {
        self.props.is_attached()
    }
}

impl LedGroup for ListLedGroup {
    fn name(&self) -> &str {
        self.props.name()
    }

    fn leds(&self) -> Vec<Arc<Led>> {
        self.leds.read().unwrap_or_else(PoisonError::into_inner).clone()
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

impl fmt::Debug for ListLedGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListLedGroup")
            .field("name", &self.props.name())
            .field("leds", &self.len())
            .field("z_index", &self.props.z_index())
            .field("has_brush", &self.props.brush().is_some())
            .field("attached", &self.props.is_attached())
            .finish()
    }
}
