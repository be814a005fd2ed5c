use std::fmt;

use thiserror::Error;

use crate::brush::BrushError;
use crate::group::ZIndex;

/// Brush phase a render failure came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RenderPhase {
    Render,
    UpdateEffects,
    Finalize,
}

impl fmt::Display for RenderPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderPhase::Render => f.write_str("render"),
            RenderPhase::UpdateEffects => f.write_str("update_effects"),
            RenderPhase::Finalize => f.write_str("finalize"),
        }
    }
}

/// Failure of one group's render pass.
///
/// Reported through [`SurfaceObserver::exception`](super::SurfaceObserver::exception);
/// never returned from [`Surface::update`](super::Surface::update).
#[derive(Error, Debug)]
#[error("group `{group}` ({z_index}) failed during {phase}: {source}")]
pub struct RenderError {
    pub group: String,
    pub z_index: ZIndex,
    pub phase: RenderPhase,
    #[source]
    pub source: BrushError,
}
