//! Binary sensor platform — descriptor-driven entity derivation.
//!
//! For every device the coordinator knows, the category's descriptor
//! table is filtered down to the descriptors applicable to that device's
//! concrete model, and one [`PetkitBinarySensor`] is emitted per
//! surviving (device, descriptor) pair. The host snapshots the returned
//! list once; devices appearing later need a rediscovery pass, which is
//! the coordinator's concern, not ours.

mod descriptor;
mod entity;
mod mapping;

pub use descriptor::{BinarySensorDesc, ValueFn};
pub use entity::PetkitBinarySensor;
pub use mapping::descriptors_for;

use std::sync::Arc;

use crate::ports::Coordinator;

/// Derive the full binary sensor entity list for the host to register.
///
/// Output order is deterministic: devices in coordinator order (ascending
/// id), descriptors in table order. Re-running against an unchanged
/// device list yields an identical list.
pub fn setup<C: Coordinator>(coordinator: &Arc<C>) -> Vec<PetkitBinarySensor<C>> {
    let mut entities = Vec::new();
    for device in coordinator.device_list() {
        for desc in descriptors_for(device.category())
            .iter()
            .filter(|desc| desc.is_supported(&device))
        {
            entities.push(PetkitBinarySensor::new(
                Arc::clone(coordinator),
                &device,
                desc,
            ));
        }
    }
    tracing::info!(count = entities.len(), "binary sensors derived");
    entities
}
