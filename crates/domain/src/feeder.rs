//! Feeder snapshot — smart food dispensers.
//!
//! Covers the single-hopper models (D3, D4, D4H, Fresh Element Mini) as
//! well as the dual-hopper D4S/D4SH, which report per-hopper food levels
//! (`food1`/`food2`) instead of the single `food` flag.

use serde::{Deserialize, Serialize};

use crate::device::CloudProduct;
use crate::id::DeviceId;

/// Snapshot of one feeder as last reported by the cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feeder {
    pub id: DeviceId,
    pub name: String,
    /// Vendor model code (lowercase, e.g. `"d4s"`).
    pub device_type: String,
    #[serde(default)]
    pub state: FeederState,
    #[serde(default)]
    pub cloud_product: Option<CloudProduct>,
}

/// Nested state block of a feeder snapshot.
///
/// Every field is optional: the cloud omits fields the concrete model
/// does not have (e.g. no camera on a D3, no `food1`/`food2` outside the
/// dual-hopper models).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeederState {
    pub camera_status: Option<bool>,
    pub feeding: Option<bool>,
    pub battery_power: Option<bool>,
    pub eating: Option<bool>,
    /// Remaining food indicator for single-hopper models (`0` = empty).
    pub food: Option<i32>,
    /// Remaining food in hopper 1 (dual-hopper models only).
    pub food1: Option<i32>,
    /// Remaining food in hopper 2 (dual-hopper models only).
    pub food2: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::model;

    #[test]
    fn should_deserialize_full_snapshot_from_camel_case_json() {
        let json = r#"{
            "id": 482913,
            "name": "Kitchen feeder",
            "deviceType": "d4s",
            "state": {
                "cameraStatus": true,
                "feeding": false,
                "batteryPower": true,
                "food1": 0,
                "food2": 5
            },
            "cloudProduct": {"subscribe": true}
        }"#;

        let feeder: Feeder = serde_json::from_str(json).unwrap();
        assert_eq!(feeder.id, DeviceId::new(482_913));
        assert_eq!(feeder.device_type, model::D4S);
        assert_eq!(feeder.state.camera_status, Some(true));
        assert_eq!(feeder.state.food1, Some(0));
        assert_eq!(feeder.state.food2, Some(5));
        assert_eq!(feeder.state.food, None);
    }

    #[test]
    fn should_default_absent_state_fields_to_none() {
        let json = r#"{"id": 1, "name": "Feeder", "deviceType": "d4", "state": {}}"#;
        let feeder: Feeder = serde_json::from_str(json).unwrap();
        assert_eq!(feeder.state.eating, None);
        assert_eq!(feeder.state.food, None);
        assert!(feeder.cloud_product.is_none());
    }

    #[test]
    fn should_default_absent_state_block_to_empty_state() {
        let json = r#"{"id": 1, "name": "Feeder", "deviceType": "d3"}"#;
        let feeder: Feeder = serde_json::from_str(json).unwrap();
        assert_eq!(feeder.state, FeederState::default());
    }
}
