use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::surface::{Surface, UpdateReport};

/// Updates the surface only when asked.
///
/// Useful for event-driven setups (redraw on input) and for tests.
#[derive(Debug)]
pub struct ManualTrigger {
    surface: Arc<Surface>,
    flush_leds: bool,
    ticks: AtomicU64,
}

impl ManualTrigger {
    pub fn new(surface: Arc<Surface>) -> Self {
        Self {
            surface,
            flush_leds: false,
            ticks: AtomicU64::new(0),
        }
    }

    pub fn with_flush(mut self, flush_leds: bool) -> Self {
        self.flush_leds = flush_leds;
        self
    }

    /// Runs one update cycle.
    pub fn trigger(&self) -> UpdateReport {
        self.ticks.fetch_add(1, Ordering::AcqRel);
        self.surface.update(self.flush_leds)
    }

    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_trigger_runs_one_cycle() {
        let trigger = ManualTrigger::new(Arc::new(Surface::new()));
        assert_eq!(trigger.trigger().cycle, 1);
        assert_eq!(trigger.trigger().cycle, 2);
        assert_eq!(trigger.ticks(), 2);
    }
}
