//! Litter box snapshot — self-cleaning litter boxes (T3/T4/T5 family).

use serde::{Deserialize, Serialize};

use crate::device::CloudProduct;
use crate::id::DeviceId;

/// Snapshot of one litter box as last reported by the cloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Litter {
    pub id: DeviceId,
    pub name: String,
    /// Vendor model code (lowercase, e.g. `"t4"`).
    pub device_type: String,
    #[serde(default)]
    pub state: LitterState,
    #[serde(default)]
    pub cloud_product: Option<CloudProduct>,
}

/// Nested state block of a litter box snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LitterState {
    pub camera: Option<bool>,
    pub liquid_empty: Option<bool>,
    pub liquid_lack: Option<bool>,
    pub sand_lack: Option<bool>,
    pub low_power: Option<bool>,
    pub power: Option<bool>,
    pub box_full: Option<bool>,
    /// Whether the waste bin is seated in the unit.
    pub box_state: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deserialize_snapshot_from_camel_case_json() {
        let json = r#"{
            "id": 91002,
            "name": "Bathroom litter box",
            "deviceType": "t4",
            "state": {
                "boxFull": false,
                "boxState": true,
                "sandLack": true,
                "lowPower": false
            }
        }"#;

        let litter: Litter = serde_json::from_str(json).unwrap();
        assert_eq!(litter.state.box_full, Some(false));
        assert_eq!(litter.state.box_state, Some(true));
        assert_eq!(litter.state.sand_lack, Some(true));
        assert_eq!(litter.state.camera, None);
    }

    #[test]
    fn should_default_absent_state_fields_to_none() {
        let json = r#"{"id": 1, "name": "Litter", "deviceType": "t3", "state": {}}"#;
        let litter: Litter = serde_json::from_str(json).unwrap();
        assert_eq!(litter.state, LitterState::default());
    }
}
