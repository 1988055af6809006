//! Canned device fleet and the deterministic simulation step.
//!
//! The fleet mirrors a plausible household account: two feeders (one
//! dual-hopper), a litter box, a fountain, and a purifier the sensor
//! layer has nothing to say about.

use petkit_domain::device::{model, CloudProduct, Device};
use petkit_domain::feeder::{Feeder, FeederState};
use petkit_domain::id::DeviceId;
use petkit_domain::litter::{Litter, LitterState};
use petkit_domain::purifier::Purifier;
use petkit_domain::water_fountain::WaterFountain;

/// Hopper refill level used when the simulation cycles an empty hopper.
const HOPPER_FULL: i32 = 6;

/// The default simulated account.
pub(crate) fn default_fleet() -> Vec<Device> {
    vec![
        Device::Feeder(Feeder {
            id: DeviceId::new(101),
            name: "Kitchen feeder".to_string(),
            device_type: model::D4S.to_string(),
            state: FeederState {
                camera_status: Some(true),
                feeding: Some(false),
                battery_power: Some(true),
                eating: Some(false),
                food: None,
                food1: Some(HOPPER_FULL),
                food2: Some(2),
            },
            cloud_product: Some(CloudProduct {
                subscribe: Some(true),
            }),
        }),
        Device::Feeder(Feeder {
            id: DeviceId::new(102),
            name: "Hallway feeder".to_string(),
            device_type: model::D4.to_string(),
            state: FeederState {
                camera_status: None,
                feeding: Some(false),
                battery_power: Some(false),
                eating: Some(false),
                food: Some(1),
                food1: None,
                food2: None,
            },
            cloud_product: None,
        }),
        Device::Litter(Litter {
            id: DeviceId::new(201),
            name: "Bathroom litter box".to_string(),
            device_type: model::T4.to_string(),
            state: LitterState {
                camera: None,
                liquid_empty: Some(false),
                liquid_lack: Some(false),
                sand_lack: Some(false),
                low_power: Some(false),
                power: Some(true),
                box_full: Some(false),
                box_state: Some(true),
            },
            cloud_product: Some(CloudProduct {
                subscribe: Some(false),
            }),
        }),
        Device::WaterFountain(WaterFountain {
            id: DeviceId::new(301),
            name: "Hallway fountain".to_string(),
            device_type: model::CTW3.to_string(),
            lack_warning: Some(false),
        }),
        Device::Purifier(Purifier {
            id: DeviceId::new(401),
            name: "Living room purifier".to_string(),
            device_type: model::K3.to_string(),
        }),
    ]
}

/// Produce the next snapshot of a device, `step` ticks into the
/// simulation. Deterministic: the same (device, step) always yields the
/// same snapshot.
pub(crate) fn advance(device: &Device, step: u64) -> Device {
    match device {
        Device::Feeder(feeder) => {
            let mut next = feeder.clone();
            // A feeding burst every fourth tick; pets eat right after.
            next.state.feeding = Some(step % 4 == 0);
            next.state.eating = Some(step % 4 == 1);
            next.state.food = next.state.food.map(|food| drain(food, step));
            next.state.food1 = next.state.food1.map(|food| drain(food, step));
            next.state.food2 = next.state.food2.map(|food| drain(food, step));
            Device::Feeder(next)
        }
        Device::Litter(litter) => {
            let mut next = litter.clone();
            // The bin slowly fills; every eighth tick someone empties it.
            next.state.box_full = Some(step % 8 >= 5);
            next.state.box_state = Some(step % 8 != 5);
            next.state.sand_lack = Some(step % 16 >= 12);
            Device::Litter(next)
        }
        Device::WaterFountain(fountain) => {
            let mut next = fountain.clone();
            next.lack_warning = Some(step % 10 >= 7);
            Device::WaterFountain(next)
        }
        Device::Purifier(_) => device.clone(),
    }
}

fn drain(level: i32, step: u64) -> i32 {
    if step % 4 == 0 {
        if level > 0 { level - 1 } else { HOPPER_FULL }
    } else {
        level
    }
}
