use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use crate::coords::Rect;
use crate::device::{Device, Led};
use crate::group::LedGroup;

use super::registry::{identity, GroupRegistry};
use super::render::{render_group, GroupOutcome};
use super::{RenderError, SurfaceObserver, UpdateArgs, UpdateReport};

#[derive(Default)]
struct DeviceSet {
    devices: Vec<Arc<dyn Device>>,
    rect: Rect,
}

impl DeviceSet {
    fn recompute_rect(&mut self) {
        self.rect = Rect::union_all(self.devices.iter().map(|d| d.rect()));
    }
}

/// One logical lighting surface composed of devices and LED groups.
///
/// Locking:
/// - `groups` guards attach, detach and the effects+render span of [`update`](Surface::update)
/// - `devices` guards the device list together with the surface rectangle
/// - observers are snapshotted before notifying, so callbacks run lock-free
/// - when both are held, `groups` is taken first (group `leds()` may read the devices)
///
/// The surface is an ordinary value: create as many as needed, share through `Arc`.
pub struct Surface {
    devices: RwLock<DeviceSet>,
    groups: Mutex<GroupRegistry>,
    observers: RwLock<Vec<Arc<dyn SurfaceObserver>>>,
    cycle: AtomicU64,
}

impl Default for Surface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface {
    pub fn new() -> Self {
        Self {
            devices: RwLock::new(DeviceSet::default()),
            groups: Mutex::new(GroupRegistry::default()),
            observers: RwLock::new(Vec::new()),
            cycle: AtomicU64::new(0),
        }
    }

    // ── observers ─────────────────────────────────────────────────────────

    pub fn add_observer(&self, observer: Arc<dyn SurfaceObserver>) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(observer);
    }

    /// Removes a previously added observer. Returns false if it was not registered.
    pub fn remove_observer<O: SurfaceObserver + ?Sized>(&self, observer: &Arc<O>) -> bool {
        let id = identity(observer);
        let mut observers = self.observers.write().unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|o| identity(o) != id);
        observers.len() != before
    }

    fn observers(&self) -> Vec<Arc<dyn SurfaceObserver>> {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    // ── devices ───────────────────────────────────────────────────────────

    /// Adds a device and recomputes the surface rectangle.
    ///
    /// Returns false if the device is already attached. A concurrent
    /// [`update`](Surface::update) sees the change from its next cycle.
    pub fn attach_device(&self, device: Arc<dyn Device>) -> bool {
        let mut set = self.devices.write().unwrap_or_else(PoisonError::into_inner);
        let id = identity(&device);
        if set.devices.iter().any(|d| identity(d) == id) {
            return false;
        }

        log::debug!(
            "attaching {} `{}` ({} leds) at {:?}",
            device.info().kind,
            device.info().name,
            device.leds().len(),
            device.location()
        );
        set.devices.push(device);
        set.recompute_rect();
        true
    }

    /// Removes a device and recomputes the surface rectangle.
    ///
    /// Returns false if the device is not attached.
    pub fn detach_device<D: Device + ?Sized>(&self, device: &Arc<D>) -> bool {
        let mut set = self.devices.write().unwrap_or_else(PoisonError::into_inner);
        let id = identity(device);
        let Some(index) = set.devices.iter().position(|d| identity(d) == id) else {
            return false;
        };

        let removed = set.devices.remove(index);
        log::debug!("detached {} `{}`", removed.info().kind, removed.info().name);
        set.recompute_rect();
        true
    }

    /// Recomputes the surface rectangle after devices moved.
    pub fn refresh_surface_rect(&self) -> Rect {
        let mut set = self.devices.write().unwrap_or_else(PoisonError::into_inner);
        set.recompute_rect();
        set.rect
    }

    /// Attached devices, in attach order.
    pub fn devices(&self) -> Vec<Arc<dyn Device>> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .devices
            .clone()
    }

    /// Bounding box of all device placements.
    pub fn surface_rect(&self) -> Rect {
        self.devices.read().unwrap_or_else(PoisonError::into_inner).rect
    }

    /// Every LED of every attached device, device by device.
    pub fn leds(&self) -> Vec<Arc<Led>> {
        let set = self.devices.read().unwrap_or_else(PoisonError::into_inner);
        set.devices
            .iter()
            .flat_map(|d| d.leds().iter().cloned())
            .collect()
    }

    // ── groups ────────────────────────────────────────────────────────────

    /// Registers a group and calls its attach hook.
    ///
    /// Attach and detach hooks run while the group registry is locked; they must
    /// not attach or detach groups on the same surface.
    ///
    /// Returns false (and does nothing) if the group is already registered.
    pub fn attach_group(&self, group: Arc<dyn LedGroup>) -> bool {
        let mut groups = self.lock_groups();
        if !groups.insert(group.clone()) {
            return false;
        }
        group.on_attach();
        log::debug!("attached group `{}` ({})", group.name(), group.z_index());
        true
    }

    /// Unregisters a group and calls its detach hook.
    ///
    /// Returns false (and does nothing) if the group is not registered.
    pub fn detach_group<G: LedGroup + ?Sized>(&self, group: &Arc<G>) -> bool {
        let mut groups = self.lock_groups();
        let Some(removed) = groups.remove(identity(group)) else {
            return false;
        };
        removed.on_detach();
        log::debug!("detached group `{}`", removed.name());
        true
    }

    pub fn contains_group<G: LedGroup + ?Sized>(&self, group: &Arc<G>) -> bool {
        self.lock_groups().contains(identity(group))
    }

    /// Registered groups, in attach order.
    pub fn groups(&self) -> Vec<Arc<dyn LedGroup>> {
        self.lock_groups().iter().cloned().collect()
    }

    fn lock_groups(&self) -> MutexGuard<'_, GroupRegistry> {
        self.groups.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── update ────────────────────────────────────────────────────────────

    /// Runs one update cycle.
    ///
    /// Phases, in order:
    /// 1. `updating` notification
    /// 2. under the group lock: every group's `update_effects`, then every group
    ///    rendered in ascending z-order (ties in attach order)
    /// 3. one `exception` notification per failed group, after the lock is released
    /// 4. every device's `update(flush_leds)`, outside the group lock
    /// 5. `updated`
    ///
    /// A failing group never aborts the cycle.
    pub fn update(&self, flush_leds: bool) -> UpdateReport {
        let args = UpdateArgs {
            cycle: self.cycle.fetch_add(1, Ordering::AcqRel) + 1,
            flush_leds,
        };
        let observers = self.observers();
        for observer in &observers {
            observer.updating(&args);
        }

        let surface_rect = self.surface_rect();
        let mut report = UpdateReport {
            cycle: args.cycle,
            ..UpdateReport::default()
        };
        let mut failures: Vec<RenderError> = Vec::new();

        {
            let groups = self.lock_groups();

            for group in groups.iter() {
                group.update_effects();
            }

            for group in groups.paint_order() {
                match render_group(group.as_ref(), surface_rect) {
                    Ok(GroupOutcome::Rendered(_)) => report.rendered += 1,
                    Ok(GroupOutcome::Skipped) => report.skipped += 1,
                    Err(err) => {
                        log::warn!("{err}");
                        report.failed += 1;
                        failures.push(err);
                    }
                }
            }
        }

        for err in &failures {
            for observer in &observers {
                observer.exception(err);
            }
        }

        let devices = self.devices();
        for device in &devices {
            device.update(flush_leds);
        }
        report.devices = devices.len();

        for observer in &observers {
            observer.updated(&args, &report);
        }

        log::trace!(
            "cycle {} done: {} rendered, {} skipped, {} failed, {} devices",
            report.cycle,
            report.rendered,
            report.skipped,
            report.failed,
            report.devices
        );

        report
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never hold the device lock while taking the group lock: `update` nests them the other way.
        let (rect, devices) = {
            let set = self.devices.read().unwrap_or_else(PoisonError::into_inner);
            (set.rect, set.devices.len())
        };
        let groups = self.lock_groups().len();
        f.debug_struct("Surface")
            .field("rect", &rect)
            .field("devices", &devices)
            .field("groups", &groups)
            .field("cycle", &self.cycle.load(Ordering::Acquire))
            .finish()
    }
}
