use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::error::ConfigError;
use crate::surface::Surface;
use crate::time::{FrameClock, FrameTime};

use super::TriggerConfig;

#[derive(Default)]
struct TimerShared {
    running: AtomicBool,
    ticks: AtomicU64,
    last_frame: Mutex<Option<FrameTime>>,
}

/// Updates the surface at a fixed rate on a background thread.
///
/// The thread starts on [`start`](TimerTrigger::start) and is joined by
/// [`stop`](TimerTrigger::stop) or on drop.
pub struct TimerTrigger {
    surface: Arc<Surface>,
    config: TriggerConfig,
    shared: Arc<TimerShared>,
    handle: Option<JoinHandle<()>>,
}

impl TimerTrigger {
    pub fn new(surface: Arc<Surface>, config: TriggerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            surface,
            config,
            shared: Arc::new(TimerShared::default()),
            handle: None,
        })
    }

    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// True while the update thread is alive. Turns false on its own if the
    /// thread dies, e.g. from a panicking brush.
    pub fn is_running(&self) -> bool {
        self.handle.is_some() && self.shared.running.load(Ordering::Acquire)
    }

    /// Completed update cycles since creation.
    pub fn ticks(&self) -> u64 {
        self.shared.ticks.load(Ordering::Acquire)
    }

    /// Timing of the most recent cycle.
    pub fn last_frame(&self) -> Option<FrameTime> {
        *self.shared.last_frame.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Spawns the update thread. Does nothing if it is already running; a thread
    /// that died is joined and replaced.
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }
        self.join_thread();

        self.shared.running.store(true, Ordering::Release);

        let surface = self.surface.clone();
        let shared = self.shared.clone();
        let interval = self.config.interval();
        let flush_leds = self.config.flush_leds;

        let spawned = thread::Builder::new()
            .name("glint-update".into())
            .spawn(move || run(&surface, &shared, interval, flush_leds))
            .context("failed to spawn surface update thread");

        match spawned {
            Ok(handle) => {
                log::info!(
                    "update trigger started at {:.1} Hz (flush: {})",
                    self.config.update_rate,
                    flush_leds
                );
                self.handle = Some(handle);
                Ok(())
            }
            Err(err) => {
                self.shared.running.store(false, Ordering::Release);
                Err(err)
            }
        }
    }

    /// Stops and joins the update thread. The in-flight cycle completes first.
    pub fn stop(&mut self) {
        let Some(handle) = &self.handle else {
            return;
        };

        self.shared.running.store(false, Ordering::Release);
        handle.thread().unpark();
        self.join_thread();

        log::info!("update trigger stopped after {} cycles", self.ticks());
    }

    fn join_thread(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("surface update thread panicked");
            }
        }
    }
}

/// Clears the running flag when the update thread exits, including by unwinding.
struct RunningGuard<'a>(&'a AtomicBool);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
        if thread::panicking() {
            log::error!("surface update thread is unwinding; updates stopped");
        }
    }
}

fn run(surface: &Surface, shared: &TimerShared, interval: Duration, flush_leds: bool) {
    let _guard = RunningGuard(&shared.running);
    let mut clock = FrameClock::new();

    while shared.running.load(Ordering::Acquire) {
        let started = Instant::now();

        surface.update(flush_leds);

        let frame = clock.tick();
        *shared.last_frame.lock().unwrap_or_else(PoisonError::into_inner) = Some(frame);
        shared.ticks.fetch_add(1, Ordering::AcqRel);

        // park_timeout may wake early; keep waiting until the deadline or stop
        let deadline = started + interval;
        loop {
            let now = Instant::now();
            if now >= deadline || !shared.running.load(Ordering::Acquire) {
                break;
            }
            thread::park_timeout(deadline - now);
        }
    }
}

impl Drop for TimerTrigger {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for TimerTrigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerTrigger")
            .field("config", &self.config)
            .field("running", &self.is_running())
            .field("ticks", &self.ticks())
            .finish()
    }
}
