//! Water fountain snapshot — smart drinking fountains (W5, CTW3).
//!
//! Fountains report a flat snapshot; the cloud does not nest their flags
//! under a `state` block the way feeders and litter boxes do.

use serde::{Deserialize, Serialize};

use crate::id::DeviceId;

/// Snapshot of one water fountain as last reported by the cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterFountain {
    pub id: DeviceId,
    pub name: String,
    /// Vendor model code (lowercase, e.g. `"ctw3"`).
    pub device_type: String,
    /// Raised when the water level is low; doubles as the low-battery
    /// signal on battery-backed models.
    #[serde(default)]
    pub lack_warning: Option<bool>,
}
