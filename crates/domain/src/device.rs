//! Device — the sum of every concrete snapshot kind the cloud can report.
//!
//! The category set is closed: descriptor lookup dispatches on
//! [`DeviceCategory`], never on runtime type inspection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PetkitError, ValidationError};
use crate::feeder::Feeder;
use crate::id::DeviceId;
use crate::litter::Litter;
use crate::purifier::Purifier;
use crate::water_fountain::WaterFountain;

/// Vendor model codes, lowercase as the cloud reports them.
///
/// Used by descriptor applicability filters to include or exclude
/// concrete models within a category.
pub mod model {
    pub const D3: &str = "d3";
    pub const D4: &str = "d4";
    pub const D4H: &str = "d4h";
    /// Dual-hopper feeder.
    pub const D4S: &str = "d4s";
    /// Dual-hopper feeder with camera.
    pub const D4SH: &str = "d4sh";
    pub const FEEDER_MINI: &str = "feedermini";

    pub const T3: &str = "t3";
    pub const T4: &str = "t4";
    pub const T5: &str = "t5";

    pub const W5: &str = "w5";
    pub const CTW3: &str = "ctw3";

    pub const K3: &str = "k3";
}

/// Closed set of device kinds used to select applicable descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceCategory {
    Feeder,
    Litter,
    WaterFountain,
    Purifier,
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feeder => f.write_str("feeder"),
            Self::Litter => f.write_str("litter"),
            Self::WaterFountain => f.write_str("water_fountain"),
            Self::Purifier => f.write_str("purifier"),
        }
    }
}

/// Vendor-account metadata attached to camera-capable devices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CloudProduct {
    /// Whether a Care+ cloud subscription is active for this device.
    pub subscribe: Option<bool>,
}

/// One device snapshot of any category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Device {
    Feeder(Feeder),
    Litter(Litter),
    WaterFountain(WaterFountain),
    Purifier(Purifier),
}

impl Device {
    /// Cloud-assigned device id.
    #[must_use]
    pub fn id(&self) -> DeviceId {
        match self {
            Self::Feeder(d) => d.id,
            Self::Litter(d) => d.id,
            Self::WaterFountain(d) => d.id,
            Self::Purifier(d) => d.id,
        }
    }

    /// User-facing device name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Feeder(d) => &d.name,
            Self::Litter(d) => &d.name,
            Self::WaterFountain(d) => &d.name,
            Self::Purifier(d) => &d.name,
        }
    }

    /// Vendor model code (lowercase), used for allow/deny filtering.
    #[must_use]
    pub fn device_type(&self) -> &str {
        match self {
            Self::Feeder(d) => &d.device_type,
            Self::Litter(d) => &d.device_type,
            Self::WaterFountain(d) => &d.device_type,
            Self::Purifier(d) => &d.device_type,
        }
    }

    /// Category tag used for descriptor-table lookup.
    #[must_use]
    pub fn category(&self) -> DeviceCategory {
        match self {
            Self::Feeder(_) => DeviceCategory::Feeder,
            Self::Litter(_) => DeviceCategory::Litter,
            Self::WaterFountain(_) => DeviceCategory::WaterFountain,
            Self::Purifier(_) => DeviceCategory::Purifier,
        }
    }

    /// Project onto the feeder snapshot, if this is a feeder.
    #[must_use]
    pub fn as_feeder(&self) -> Option<&Feeder> {
        match self {
            Self::Feeder(d) => Some(d),
            _ => None,
        }
    }

    /// Project onto the litter box snapshot, if this is a litter box.
    #[must_use]
    pub fn as_litter(&self) -> Option<&Litter> {
        match self {
            Self::Litter(d) => Some(d),
            _ => None,
        }
    }

    /// Project onto the fountain snapshot, if this is a water fountain.
    #[must_use]
    pub fn as_water_fountain(&self) -> Option<&WaterFountain> {
        match self {
            Self::WaterFountain(d) => Some(d),
            _ => None,
        }
    }

    /// The Care+ subscription block, on categories that carry one.
    #[must_use]
    pub fn cloud_product(&self) -> Option<&CloudProduct> {
        match self {
            Self::Feeder(d) => d.cloud_product.as_ref(),
            Self::Litter(d) => d.cloud_product.as_ref(),
            Self::WaterFountain(_) | Self::Purifier(_) => None,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PetkitError::Validation`] when the name or model code is
    /// empty.
    pub fn validate(&self) -> Result<(), PetkitError> {
        if self.name().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.device_type().is_empty() {
            return Err(ValidationError::EmptyDeviceType.into());
        }
        Ok(())
    }
}

impl From<Feeder> for Device {
    fn from(feeder: Feeder) -> Self {
        Self::Feeder(feeder)
    }
}

impl From<Litter> for Device {
    fn from(litter: Litter) -> Self {
        Self::Litter(litter)
    }
}

impl From<WaterFountain> for Device {
    fn from(fountain: WaterFountain) -> Self {
        Self::WaterFountain(fountain)
    }
}

impl From<Purifier> for Device {
    fn from(purifier: Purifier) -> Self {
        Self::Purifier(purifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feeder::FeederState;

    fn feeder(device_type: &str) -> Device {
        Device::Feeder(Feeder {
            id: DeviceId::new(10),
            name: "Kitchen feeder".to_string(),
            device_type: device_type.to_string(),
            state: FeederState::default(),
            cloud_product: Some(CloudProduct {
                subscribe: Some(false),
            }),
        })
    }

    #[test]
    fn should_report_feeder_category_for_feeder_snapshot() {
        assert_eq!(feeder(model::D4).category(), DeviceCategory::Feeder);
    }

    #[test]
    fn should_expose_common_fields_through_accessors() {
        let device = feeder(model::D4S);
        assert_eq!(device.id(), DeviceId::new(10));
        assert_eq!(device.name(), "Kitchen feeder");
        assert_eq!(device.device_type(), model::D4S);
    }

    #[test]
    fn should_project_onto_matching_variant_only() {
        let device = feeder(model::D4);
        assert!(device.as_feeder().is_some());
        assert!(device.as_litter().is_none());
        assert!(device.as_water_fountain().is_none());
    }

    #[test]
    fn should_expose_cloud_product_on_feeder() {
        let device = feeder(model::D4SH);
        assert_eq!(
            device.cloud_product().and_then(|cp| cp.subscribe),
            Some(false)
        );
    }

    #[test]
    fn should_not_expose_cloud_product_on_purifier() {
        let device = Device::Purifier(Purifier {
            id: DeviceId::new(3),
            name: "Purifier".to_string(),
            device_type: model::K3.to_string(),
        });
        assert!(device.cloud_product().is_none());
    }

    #[test]
    fn should_validate_well_formed_device() {
        assert!(feeder(model::D4).validate().is_ok());
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let device = Device::Purifier(Purifier {
            id: DeviceId::new(3),
            name: String::new(),
            device_type: model::K3.to_string(),
        });
        assert!(matches!(
            device.validate(),
            Err(PetkitError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_return_validation_error_when_device_type_is_empty() {
        let device = Device::Purifier(Purifier {
            id: DeviceId::new(3),
            name: "Purifier".to_string(),
            device_type: String::new(),
        });
        assert!(matches!(
            device.validate(),
            Err(PetkitError::Validation(ValidationError::EmptyDeviceType))
        ));
    }

    #[test]
    fn should_display_category_as_snake_case() {
        assert_eq!(DeviceCategory::WaterFountain.to_string(), "water_fountain");
    }
}
