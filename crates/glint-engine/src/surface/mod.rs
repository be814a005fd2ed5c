//! The surface compositor.
//!
//! Responsibilities:
//! - own the device set and the derived surface rectangle
//! - keep the group registry (attach order, identity dedup) behind one lock
//! - run the update cycle: effects, z-ordered render, device flush
//! - isolate per-group failures and report them to observers

mod compositor;
mod error;
mod observer;
mod registry;
mod render;

pub use compositor::Surface;
pub use error::{RenderError, RenderPhase};
pub use observer::{SurfaceObserver, UpdateArgs, UpdateReport};
