use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::coords::{Point, Rect, Size};
use crate::paint::Color;

use super::{Device, DeviceInfo, Led, LedId, Placement};

/// Receives the LEDs a device pushes during one update.
pub type LedSink = Box<dyn Fn(&DeviceInfo, &[(LedId, Color)]) + Send + Sync>;

/// In-memory device.
///
/// Stands in for hardware in tests, demos and layout tooling. `update` collects
/// the LEDs to push (all on flush, otherwise only dirty ones), hands them to the
/// optional sink and marks them clean.
pub struct VirtualDevice {
    info: DeviceInfo,
    placement: Arc<Placement>,
    size: Size,
    leds: Vec<Arc<Led>>,
    sink: Option<LedSink>,

    update_count: AtomicU64,
    last_flush: AtomicBool,
    last_pushed: AtomicUsize,
}

impl VirtualDevice {
    /// Creates a device with one LED per rectangle (device-relative), ids in order.
    pub fn new<I>(info: DeviceInfo, size: Size, led_rects: I) -> Self
    where
        I: IntoIterator<Item = Rect>,
    {
        let placement = Arc::new(Placement::default());
        let leds = led_rects
            .into_iter()
            .enumerate()
            .map(|(i, rect)| Arc::new(Led::new(LedId(i as u32), rect, placement.clone())))
            .collect();

        Self {
            info,
            placement,
            size,
            leds,
            sink: None,
            update_count: AtomicU64::new(0),
            last_flush: AtomicBool::new(false),
            last_pushed: AtomicUsize::new(0),
        }
    }

    /// Creates a `columns` x `rows` grid of `led_size` LEDs, row-major ids.
    pub fn grid(info: DeviceInfo, columns: u32, rows: u32, led_size: Size) -> Self {
        let size = Size::new(
            columns as f32 * led_size.width,
            rows as f32 * led_size.height,
        );
        let rects = (0..rows).flat_map(move |row| {
            (0..columns).map(move |col| {
                Rect::from_location_size(
                    Point::new(col as f32 * led_size.width, row as f32 * led_size.height),
                    led_size,
                )
            })
        });
        Self::new(info, size, rects)
    }

    /// Places the device on the surface.
    pub fn at(self, location: Point) -> Self {
        self.placement.set_location(location);
        self
    }

    pub fn with_sink(mut self, sink: LedSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn led(&self, id: LedId) -> Option<&Arc<Led>> {
        self.leds.get(id.0 as usize)
    }

    /// Number of completed `update` calls.
    pub fn update_count(&self) -> u64 {
        self.update_count.load(Ordering::Acquire)
    }

    /// Flush flag of the most recent `update` call.
    pub fn last_flush(&self) -> bool {
        self.last_flush.load(Ordering::Acquire)
    }

    /// Number of LEDs pushed by the most recent `update` call.
    pub fn last_pushed(&self) -> usize {
        self.last_pushed.load(Ordering::Acquire)
    }
}

impl Device for VirtualDevice {
    fn info(&self) -> &DeviceInfo {
        &self.info
    }

    fn location(&self) -> Point {
        self.placement.location()
    }

    fn set_location(&self, location: Point) {
        self.placement.set_location(location);
    }

    fn size(&self) -> Size {
        self.size
    }

    fn leds(&self) -> &[Arc<Led>] {
        &self.leds
    }

    fn update(&self, flush_leds: bool) {
        let pushed: Vec<(LedId, Color)> = self
            .leds
            .iter()
            // take_dirty runs for every LED so a flush also clears stale flags
            .filter(|led| led.take_dirty() || flush_leds)
            .map(|led| (led.id(), led.color()))
            .collect();

        if let Some(sink) = &self.sink {
            if !pushed.is_empty() {
                sink(&self.info, &pushed);
            }
        }

        log::trace!(
            "{} `{}` pushed {} of {} leds (flush: {})",
            self.info.kind,
            self.info.name,
            pushed.len(),
            self.leds.len(),
            flush_leds
        );

        self.last_pushed.store(pushed.len(), Ordering::Release);
        self.last_flush.store(flush_leds, Ordering::Release);
        self.update_count.fetch_add(1, Ordering::AcqRel);
    }
}

impl fmt::Debug for VirtualDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualDevice")
            .field("info", &self.info)
            .field("location", &self.placement.location())
            .field("size", &self.size)
            .field("leds", &self.leds.len())
            .field("update_count", &self.update_count())
            .finish_non_exhaustive()
    }
}
