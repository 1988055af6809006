//! Classification tags attached to binary sensor entities.

use serde::{Deserialize, Serialize};

/// The type of condition a binary sensor reports, used by hosts to pick
/// icons and on/off wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinarySensorClass {
    /// On means the battery is low.
    Battery,
    /// On means something occupies the monitored spot.
    Occupancy,
    /// On means mains power is present.
    Power,
    /// On means a condition needs attention.
    Problem,
    /// On means the device is actively doing its job.
    Running,
}

impl std::fmt::Display for BinarySensorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Battery => f.write_str("battery"),
            Self::Occupancy => f.write_str("occupancy"),
            Self::Power => f.write_str("power"),
            Self::Problem => f.write_str("problem"),
            Self::Running => f.write_str("running"),
        }
    }
}

/// Classification of a non-primary entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    /// An entity that changes device configuration.
    Config,
    /// An entity exposing diagnostics of a device, not its primary
    /// function (battery presence, subscription status, …).
    Diagnostic,
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config => f.write_str("config"),
            Self::Diagnostic => f.write_str("diagnostic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_class_as_lowercase_string() {
        let json = serde_json::to_string(&BinarySensorClass::Problem).unwrap();
        assert_eq!(json, "\"problem\"");
    }

    #[test]
    fn should_display_class_as_lowercase() {
        assert_eq!(BinarySensorClass::Running.to_string(), "running");
        assert_eq!(BinarySensorClass::Occupancy.to_string(), "occupancy");
    }

    #[test]
    fn should_serialize_category_as_lowercase_string() {
        let json = serde_json::to_string(&EntityCategory::Diagnostic).unwrap();
        assert_eq!(json, "\"diagnostic\"");
    }

    #[test]
    fn should_roundtrip_category_through_serde_json() {
        let parsed: EntityCategory = serde_json::from_str("\"diagnostic\"").unwrap();
        assert_eq!(parsed, EntityCategory::Diagnostic);
    }
}
