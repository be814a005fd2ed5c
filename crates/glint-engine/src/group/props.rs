use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{PoisonError, RwLock};

use crate::brush::SharedBrush;

use super::ZIndex;

/// Brush, z-index and attachment state shared by the standard groups.
#[derive(Default)]
pub(crate) struct GroupProps {
    name: String,
    brush: RwLock<Option<SharedBrush>>,
    z_index: AtomicI32,
    attached: AtomicBool,
}

impl GroupProps {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn brush(&self) -> Option<SharedBrush> {
        self.brush.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub(crate) fn set_brush(&self, brush: Option<SharedBrush>) {
        *self.brush.write().unwrap_or_else(PoisonError::into_inner) = brush;
    }

    pub(crate) fn z_index(&self) -> ZIndex {
        ZIndex(self.z_index.load(Ordering::Acquire))
    }

    pub(crate) fn set_z_index(&self, z: ZIndex) {
        self.z_index.store(z.0, Ordering::Release);
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.attached.load(Ordering::Acquire)
    }

    pub(crate) fn set_attached(&self, attached: bool) {
        self.attached.store(attached, Ordering::Release);
    }
}
