use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use glint_engine::brush::{
    shared, BrushSettings, CalculationMode, LinearGradientBrush, RainbowBrush, SolidColorBrush,
};
use glint_engine::coords::{Point, Rect, Size};
use glint_engine::device::{Device, DeviceInfo, DeviceKind, LedId, LedSink, VirtualDevice};
use glint_engine::group::{ListLedGroup, RectangleLedGroup};
use glint_engine::logging::{init_logging, LoggingConfig};
use glint_engine::paint::{Color, ColorStop, SpreadMode};
use glint_engine::surface::{RenderError, Surface, SurfaceObserver, UpdateArgs, UpdateReport};
use glint_engine::trigger::{TimerTrigger, TriggerConfig};
use glint_engine::ConfigError;

const ENV_RUN_SECONDS: &str = "GLINT_RUN_SECONDS";
const DEFAULT_RUN_SECONDS: f64 = 5.0;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut config = TriggerConfig::default();
    config.apply_env().context("invalid update trigger configuration")?;
    let run_for = run_duration()?;

    let surface = Arc::new(Surface::new());
    let monitor = Arc::new(Monitor::default());
    surface.add_observer(monitor.clone());

    let devices = build_devices(&surface);
    build_groups(&surface, &devices);

    log::info!(
        "surface {:?}: {} devices, {} leds, {} groups",
        surface.surface_rect(),
        surface.devices().len(),
        surface.leds().len(),
        surface.groups().len()
    );

    let mut trigger = TimerTrigger::new(surface.clone(), config).context("invalid update trigger configuration")?;
    trigger.start()?;
    thread::sleep(run_for);
    trigger.stop();

    if let Some(frame) = trigger.last_frame() {
        log::info!("last frame #{} dt {:.1} ms", frame.frame_index, frame.dt * 1000.0);
    }
    log::info!(
        "ran {} cycles in {:.1}s, {} render failures",
        trigger.ticks(),
        run_for.as_secs_f64(),
        monitor.failures.load(Ordering::Acquire)
    );

    Ok(())
}

fn run_duration() -> Result<Duration> {
    let seconds = match std::env::var(ENV_RUN_SECONDS) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite() && *s >= 0.0)
            .ok_or(ConfigError::InvalidValue {
                key: ENV_RUN_SECONDS,
                value: raw.clone(),
            })?,
        Err(_) => DEFAULT_RUN_SECONDS,
    };
    Ok(Duration::from_secs_f64(seconds))
}

// ── devices ───────────────────────────────────────────────────────────────

struct Devices {
    keyboard: Arc<VirtualDevice>,
    mouse: Arc<VirtualDevice>,
    strip: Arc<VirtualDevice>,
}

fn logging_sink() -> LedSink {
    Box::new(|info: &DeviceInfo, leds: &[(LedId, Color)]| {
        log::debug!("{} `{}` <- {} leds", info.kind, info.name, leds.len());
        if let Some((id, color)) = leds.first() {
            log::trace!("  first: led {} = {:?}", id.0, color.to_rgb_u8());
        }
    })
}

fn build_devices(surface: &Surface) -> Devices {
    let keyboard = Arc::new(
        VirtualDevice::grid(
            DeviceInfo::new("studio keyboard", DeviceKind::Keyboard),
            14,
            5,
            Size::new(10.0, 10.0),
        )
        .with_sink(logging_sink()),
    );

    let mouse = Arc::new(
        VirtualDevice::new(
            DeviceInfo::new("studio mouse", DeviceKind::Mouse),
            Size::new(20.0, 30.0),
            [
                Rect::new(2.0, 2.0, 6.0, 8.0),
                Rect::new(12.0, 2.0, 6.0, 8.0),
                Rect::new(7.0, 20.0, 6.0, 6.0),
            ],
        )
        .at(Point::new(150.0, 10.0))
        .with_sink(logging_sink()),
    );

    let strip = Arc::new(
        VirtualDevice::grid(
            DeviceInfo::new("desk strip", DeviceKind::LedStrip),
            34,
            1,
            Size::new(5.0, 4.0),
        )
        .at(Point::new(0.0, 60.0))
        .with_sink(logging_sink()),
    );

    for device in [&keyboard, &mouse, &strip] {
        surface.attach_device(device.clone());
    }

    Devices { keyboard, mouse, strip }
}

// ── groups ────────────────────────────────────────────────────────────────

fn build_groups(surface: &Arc<Surface>, devices: &Devices) {
    let backdrop = LinearGradientBrush::new(
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        vec![
            ColorStop::new(0.0, Color::from_rgb_u8(0x10, 0x20, 0x80)),
            ColorStop::new(0.5, Color::from_rgb_u8(0x60, 0x10, 0x90)),
            ColorStop::new(1.0, Color::from_rgb_u8(0x00, 0x70, 0x70)),
        ],
        SpreadMode::Pad,
    )
    .with_settings(BrushSettings {
        mode: CalculationMode::Absolute,
        brightness: 0.6,
        ..BrushSettings::default()
    });
    surface.attach_group(Arc::new(
        RectangleLedGroup::new("backdrop", surface, surface.surface_rect())
            .with_brush(shared(backdrop))
            .with_z_index(0),
    ));

    // Function row plus the desk strip sweep one shared rainbow.
    let function_row = devices.keyboard.leds().iter().take(14).cloned();
    let strip_leds = devices.strip.leds().iter().cloned();
    surface.attach_group(Arc::new(
        ListLedGroup::new("rainbow")
            .with_leds(function_row.chain(strip_leds))
            .with_brush(shared(RainbowBrush::new(3.0)))
            .with_z_index(1),
    ));

    surface.attach_group(Arc::new(
        ListLedGroup::new("mouse accent")
            .with_leds(devices.mouse.leds().iter().cloned())
            .with_brush(shared(SolidColorBrush::new(Color::from_rgb_u8(0xff, 0x8c, 0x00))))
            .with_z_index(2),
    ));
}

// ── monitoring ────────────────────────────────────────────────────────────

/// Logs render failures and a periodic heartbeat.
#[derive(Default)]
struct Monitor {
    failures: AtomicU64,
}

impl Monitor {
    const HEARTBEAT_EVERY: u64 = 60;
}

impl SurfaceObserver for Monitor {
    fn updated(&self, args: &UpdateArgs, report: &UpdateReport) {
        if args.cycle % Self::HEARTBEAT_EVERY == 0 {
            log::info!(
                "cycle {}: {} rendered, {} skipped, {} failed",
                report.cycle,
                report.rendered,
                report.skipped,
                report.failed
            );
        }
    }

    fn exception(&self, error: &RenderError) {
        self.failures.fetch_add(1, Ordering::AcqRel);
        log::error!("{error}");
    }
}
