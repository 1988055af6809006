//! # petkit-adapter-simulator
//!
//! In-process [`Coordinator`] implementation backed by a simulated device
//! fleet instead of the PetKit cloud.
//!
//! ## How it works
//!
//! The simulator holds the "latest snapshot" cache the real coordinator
//! would maintain, seeded with a canned household fleet. An optional
//! background task advances a deterministic simulation step on a fixed
//! interval (food drains, the waste bin fills up) and stamps the refresh
//! time, so the sensor layer can be exercised end to end without any
//! network.
//!
//! ## Dependency rule
//!
//! Depends on `petkit-app` (the port) and `petkit-domain` only.

mod fleet;

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;

use petkit_app::ports::Coordinator;
use petkit_domain::device::Device;
use petkit_domain::error::PetkitError;
use petkit_domain::id::DeviceId;
use petkit_domain::time::{now, Timestamp};

type DeviceMap = BTreeMap<DeviceId, Arc<Device>>;

/// A [`Coordinator`] over simulated devices.
pub struct SimulatedCoordinator {
    devices: Arc<RwLock<DeviceMap>>,
    last_refresh: Arc<RwLock<Option<Timestamp>>>,
    tick_handle: Option<JoinHandle<()>>,
}

impl SimulatedCoordinator {
    /// Create a coordinator seeded with the default household fleet.
    ///
    /// # Errors
    ///
    /// Returns [`PetkitError::Validation`] if a fleet device fails
    /// validation (cannot happen with the built-in fleet).
    pub fn new() -> Result<Self, PetkitError> {
        Self::seed(fleet::default_fleet())
    }

    /// Create a coordinator seeded with the given devices.
    ///
    /// # Errors
    ///
    /// Returns [`PetkitError::Validation`] if any device fails validation.
    pub fn seed(devices: Vec<Device>) -> Result<Self, PetkitError> {
        let mut map = DeviceMap::new();
        for device in devices {
            device.validate()?;
            map.insert(device.id(), Arc::new(device));
        }
        Ok(Self {
            devices: Arc::new(RwLock::new(map)),
            last_refresh: Arc::new(RwLock::new(None)),
            tick_handle: None,
        })
    }

    /// Replace one device's snapshot, as a cloud refresh would.
    ///
    /// # Errors
    ///
    /// Returns [`PetkitError::Validation`] if the snapshot fails
    /// validation.
    pub fn replace(&self, device: Device) -> Result<(), PetkitError> {
        device.validate()?;
        self.devices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(device.id(), Arc::new(device));
        Ok(())
    }

    /// Drop a device from the cache, as an account removal would.
    pub fn remove(&self, id: DeviceId) {
        self.devices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }

    /// Start the background simulation loop.
    ///
    /// Each tick advances every snapshot by one deterministic step and
    /// stamps the refresh time. Calling this twice replaces the previous
    /// loop.
    pub fn start_background(&mut self, interval: Duration) {
        self.stop();

        let devices = Arc::clone(&self.devices);
        let last_refresh = Arc::clone(&self.last_refresh);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            let mut step: u64 = 0;
            loop {
                ticker.tick().await;
                step += 1;
                {
                    let mut map = devices.write().unwrap_or_else(PoisonError::into_inner);
                    let next: DeviceMap = map
                        .values()
                        .map(|device| {
                            let advanced = fleet::advance(device, step);
                            (advanced.id(), Arc::new(advanced))
                        })
                        .collect();
                    *map = next;
                }
                *last_refresh
                    .write()
                    .unwrap_or_else(PoisonError::into_inner) = Some(now());
                tracing::debug!(step, "simulated fleet refreshed");
            }
        });
        self.tick_handle = Some(handle);

        tracing::info!(?interval, "simulation loop started");
    }

    /// Abort the background simulation loop, if one is running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            handle.abort();
            tracing::debug!("simulation loop stopped");
        }
    }
}

impl Coordinator for SimulatedCoordinator {
    fn device_list(&self) -> Vec<Arc<Device>> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect()
    }

    fn device(&self, id: DeviceId) -> Option<Arc<Device>> {
        self.devices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    fn last_refresh(&self) -> Option<Timestamp> {
        *self
            .last_refresh
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
