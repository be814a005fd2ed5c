use super::RenderError;

/// Details of one update cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct UpdateArgs {
    /// Monotonic cycle number, starting at 1.
    pub cycle: u64,
    pub flush_leds: bool,
}

/// Outcome of one update cycle.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct UpdateReport {
    pub cycle: u64,
    /// Groups whose colors were written.
    pub rendered: usize,
    /// Groups without a brush or with a disabled brush.
    pub skipped: usize,
    /// Groups whose render pass failed.
    pub failed: usize,
    /// Devices asked to flush.
    pub devices: usize,
}

/// Receives surface notifications.
///
/// Callbacks run on the thread calling [`Surface::update`](super::Surface::update),
/// with no surface lock held; attaching or detaching groups from a callback is allowed.
pub trait SurfaceObserver: Send + Sync {
    /// Before a cycle starts.
    fn updating(&self, args: &UpdateArgs) {
        let _ = args;
    }

    /// After every device has been updated.
    fn updated(&self, args: &UpdateArgs, report: &UpdateReport) {
        let _ = (args, report);
    }

    /// Once per failed group render.
    fn exception(&self, error: &RenderError) {
        let _ = error;
    }
}
