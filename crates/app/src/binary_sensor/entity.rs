//! Sensor entity wrapper — one device bound to one descriptor.

use std::sync::Arc;

use petkit_domain::device::Device;
use petkit_domain::entity::{BinarySensorClass, EntityCategory, EntityState};
use petkit_domain::error::{NotFoundError, PetkitError};
use petkit_domain::id::DeviceId;

use crate::ports::Coordinator;

use super::descriptor::BinarySensorDesc;

/// A registered binary sensor: a stateless view over one device's latest
/// snapshot through one descriptor.
///
/// The wrapper holds no cached value. Every read goes back to the
/// coordinator for the current snapshot and re-runs the probe, so
/// freshness is entirely the coordinator's concern.
pub struct PetkitBinarySensor<C> {
    coordinator: Arc<C>,
    device_id: DeviceId,
    desc: &'static BinarySensorDesc,
    unique_id: String,
}

impl<C: Coordinator> PetkitBinarySensor<C> {
    pub(crate) fn new(
        coordinator: Arc<C>,
        device: &Device,
        desc: &'static BinarySensorDesc,
    ) -> Self {
        let device_id = device.id();
        Self {
            coordinator,
            device_id,
            desc,
            unique_id: format!("{device_id}_{}", desc.key),
        }
    }

    /// Stable identity: device id concatenated with the descriptor key.
    ///
    /// Unique across the process as long as device ids are unique and
    /// descriptor keys are unique within their category table.
    #[must_use]
    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    /// Id of the bound device.
    #[must_use]
    pub fn device_id(&self) -> DeviceId {
        self.device_id
    }

    /// Translation label of the bound descriptor.
    #[must_use]
    pub fn translation_key(&self) -> &'static str {
        self.desc.translation_key
    }

    /// Classification tag of the bound descriptor.
    #[must_use]
    pub fn device_class(&self) -> Option<BinarySensorClass> {
        self.desc.device_class
    }

    /// UI grouping tag of the bound descriptor.
    #[must_use]
    pub fn entity_category(&self) -> Option<EntityCategory> {
        self.desc.entity_category
    }

    /// Whether the host should group this sensor under diagnostics.
    #[must_use]
    pub fn is_diagnostic(&self) -> bool {
        self.desc.entity_category == Some(EntityCategory::Diagnostic)
    }

    /// Current probe result against the live snapshot.
    ///
    /// `None` when the value is unknown or the device is no longer
    /// tracked; use [`state`](Self::state) to tell the two apart.
    #[must_use]
    pub fn is_on(&self) -> Option<bool> {
        let device = self.coordinator.device(self.device_id)?;
        self.desc.evaluate(&device)
    }

    /// Current entity state, distinguishing a missing device
    /// (`Unavailable`) from an unknown value (`Unknown`).
    #[must_use]
    pub fn state(&self) -> EntityState {
        match self.coordinator.device(self.device_id) {
            Some(device) => EntityState::from_is_on(self.desc.evaluate(&device)),
            None => EntityState::Unavailable,
        }
    }

    /// Latest snapshot of the bound device.
    ///
    /// # Errors
    ///
    /// Returns [`PetkitError::NotFound`] when the coordinator no longer
    /// tracks the device.
    pub fn device(&self) -> Result<Arc<Device>, PetkitError> {
        self.coordinator
            .device(self.device_id)
            .ok_or_else(|| NotFoundError { id: self.device_id }.into())
    }
}
