//! Air purifier snapshot (K3).
//!
//! Purifiers are part of the device fleet but expose no binary sensors;
//! they exist in the model so the bridge can enumerate a full account
//! without choking on them.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

/// Snapshot of one air purifier as last reported by the cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purifier {
    pub id: DeviceId,
    pub name: String,
    /// Vendor model code (lowercase, e.g. `"k3"`).
    pub device_type: String,
}
