use std::sync::Arc;

use crate::brush::SharedBrush;
use crate::device::Led;

use super::ZIndex;

/// A named, orderable set of LEDs bound to one brush.
///
/// Groups do not own their LEDs. [`leds`](LedGroup::leds) is re-queried every
/// update, so membership may change between cycles; the surface snapshots it
/// once per render pass.
///
/// All methods take `&self`: a group is shared between the surface registry and
/// its creator, so mutable state lives behind interior mutability.
pub trait LedGroup: Send + Sync {
    /// Label used in logs and render errors.
    fn name(&self) -> &str {
        "unnamed group"
    }

    /// Current members.
    fn leds(&self) -> Vec<Arc<Led>>;

    /// Current brush. `None` renders nothing.
    fn brush(&self) -> Option<SharedBrush>;

    fn z_index(&self) -> ZIndex;

    /// Advances group-level animation. Called once per update, before rendering.
    fn update_effects(&self) {}

    /// Called once when the group enters a surface registry.
    fn on_attach(&self) {}

    /// Called once when the group leaves a surface registry.
    fn on_detach(&self) {}
}
