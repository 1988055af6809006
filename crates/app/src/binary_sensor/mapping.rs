//! Per-category descriptor tables.
//!
//! Pure lookup from device category to its ordered descriptor list. The
//! tables are process-wide immutable data; order only fixes the entity
//! enumeration order the host sees, it carries no other meaning.

use petkit_domain::device::{model, DeviceCategory};
use petkit_domain::entity::BinarySensorClass;

use super::descriptor::BinarySensorDesc;

/// Models that report per-hopper food levels instead of the single
/// `food` flag.
const DUAL_HOPPER: &[&str] = &[model::D4S, model::D4SH];

static FEEDER: &[BinarySensorDesc] = &[
    BinarySensorDesc::new("Camera status", "camera_status", |device| {
        device.as_feeder()?.state.camera_status
    }),
    BinarySensorDesc::new("Feeding", "feeding", |device| {
        device.as_feeder()?.state.feeding
    })
    .class(BinarySensorClass::Running),
    BinarySensorDesc::new("Battery installed", "battery_installed", |device| {
        device.as_feeder()?.state.battery_power
    })
    .diagnostic(),
    BinarySensorDesc::new(
        "Care plus subscription",
        "care_plus_subscription",
        |device| device.cloud_product()?.subscribe,
    )
    .diagnostic(),
    BinarySensorDesc::new("Eating", "eating", |device| {
        device.as_feeder()?.state.eating
    })
    .class(BinarySensorClass::Occupancy),
    BinarySensorDesc::new("Food level", "food_level", |device| {
        Some(device.as_feeder()?.state.food? == 0)
    })
    .class(BinarySensorClass::Problem)
    .ignore(DUAL_HOPPER),
    BinarySensorDesc::new("Food level 1", "food_level_1", |device| {
        Some(device.as_feeder()?.state.food1? == 0)
    })
    .class(BinarySensorClass::Problem)
    .only_for(DUAL_HOPPER),
    BinarySensorDesc::new("Food level 2", "food_level_2", |device| {
        Some(device.as_feeder()?.state.food2? == 0)
    })
    .class(BinarySensorClass::Problem)
    .only_for(DUAL_HOPPER),
];

static LITTER: &[BinarySensorDesc] = &[
    BinarySensorDesc::new("Camera status", "camera_status", |device| {
        device.as_litter()?.state.camera
    }),
    BinarySensorDesc::new(
        "Care plus subscription",
        "care_plus_subscription",
        |device| device.cloud_product()?.subscribe,
    )
    .diagnostic(),
    BinarySensorDesc::new("Liquid empty", "liquid_empty", |device| {
        device.as_litter()?.state.liquid_empty
    })
    .class(BinarySensorClass::Problem),
    BinarySensorDesc::new("Liquid lack", "liquid_lack", |device| {
        device.as_litter()?.state.liquid_lack
    })
    .class(BinarySensorClass::Problem),
    BinarySensorDesc::new("Sand lack", "sand_lack", |device| {
        device.as_litter()?.state.sand_lack
    })
    .class(BinarySensorClass::Problem),
    BinarySensorDesc::new("Low power", "low_power", |device| {
        device.as_litter()?.state.low_power
    }),
    BinarySensorDesc::new("Power", "power", |device| device.as_litter()?.state.power)
        .class(BinarySensorClass::Power),
    BinarySensorDesc::new("Waste bin", "waste_bin", |device| {
        device.as_litter()?.state.box_full
    })
    .class(BinarySensorClass::Problem),
    // box_state reports "bin seated"; the sensor reports "bin missing".
    BinarySensorDesc::new("Waste bin presence", "waste_bin_presence", |device| {
        Some(!device.as_litter()?.state.box_state?)
    })
    .class(BinarySensorClass::Problem),
];

static WATER_FOUNTAIN: &[BinarySensorDesc] = &[
    BinarySensorDesc::new("Lack warning", "lack_warning", |device| {
        device.as_water_fountain()?.lack_warning
    })
    .class(BinarySensorClass::Problem),
    // Fountains expose no separate battery flag; the lack warning is the
    // closest signal the cloud reports.
    BinarySensorDesc::new("Battery", "low_battery", |device| {
        device.as_water_fountain()?.lack_warning
    })
    .class(BinarySensorClass::Battery),
];

/// The ordered descriptor list for one device category.
///
/// Categories without binary sensors map to the empty slice — devices of
/// those categories simply yield no entities.
#[must_use]
pub fn descriptors_for(category: DeviceCategory) -> &'static [BinarySensorDesc] {
    match category {
        DeviceCategory::Feeder => FEEDER,
        DeviceCategory::Litter => LITTER,
        DeviceCategory::WaterFountain => WATER_FOUNTAIN,
        DeviceCategory::Purifier => &[],
    }
}
