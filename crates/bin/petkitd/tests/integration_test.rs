//! End-to-end tests for the full pipeline: simulated coordinator →
//! entity derivation → live state reads.
//!
//! No daemon loop is involved — the tests drive the same components
//! `main` wires together, directly.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use petkit_adapter_simulator::SimulatedCoordinator;
use petkit_app::binary_sensor;
use petkit_app::ports::Coordinator;
use petkit_domain::device::{model, Device};
use petkit_domain::entity::EntityState;
use petkit_domain::feeder::{Feeder, FeederState};
use petkit_domain::id::DeviceId;

fn coordinator() -> Arc<SimulatedCoordinator> {
    Arc::new(SimulatedCoordinator::new().expect("default fleet should validate"))
}

fn dual_hopper_feeder(id: u64, food1: i32, food2: i32) -> Device {
    Device::Feeder(Feeder {
        id: DeviceId::new(id),
        name: "Kitchen feeder".to_string(),
        device_type: model::D4S.to_string(),
        state: FeederState {
            food1: Some(food1),
            food2: Some(food2),
            ..FeederState::default()
        },
        cloud_product: None,
    })
}

#[test]
fn should_derive_the_full_sensor_list_for_the_default_fleet() {
    let coordinator = coordinator();
    let entities = binary_sensor::setup(&coordinator);

    // Dual-hopper feeder: 7, single-hopper feeder: 6, litter box: 9,
    // fountain: 2, purifier: 0.
    assert_eq!(entities.len(), 24);

    let ids: HashSet<&str> = entities.iter().map(|e| e.unique_id()).collect();
    assert_eq!(ids.len(), entities.len());
}

#[test]
fn should_derive_an_identical_list_on_rerun() {
    let coordinator = coordinator();
    let first: Vec<String> = binary_sensor::setup(&coordinator)
        .iter()
        .map(|e| e.unique_id().to_string())
        .collect();
    let second: Vec<String> = binary_sensor::setup(&coordinator)
        .iter()
        .map(|e| e.unique_id().to_string())
        .collect();
    assert_eq!(first, second);
}

#[test]
fn should_read_live_states_through_the_coordinator() {
    let coordinator = coordinator();
    let entities = binary_sensor::setup(&coordinator);

    let by_id = |unique_id: &str| {
        entities
            .iter()
            .find(|e| e.unique_id() == unique_id)
            .unwrap_or_else(|| panic!("missing sensor {unique_id}"))
    };

    // The fleet seeds the d4s feeder with both hoppers stocked.
    assert_eq!(by_id("101_Food level 1").state(), EntityState::Off);
    // The litter box bin is seated, so "presence" (a problem) is off.
    assert_eq!(by_id("201_Waste bin presence").state(), EntityState::Off);
    // The single-hopper feeder has no camera: unknown, not off.
    assert_eq!(by_id("102_Camera status").state(), EntityState::Unknown);
    // Care+ is active on the kitchen feeder.
    assert_eq!(by_id("101_Care plus subscription").state(), EntityState::On);
}

#[test]
fn should_reflect_snapshot_swaps_without_rederiving() {
    let coordinator = coordinator();
    let entities = binary_sensor::setup(&coordinator);
    let hopper1 = entities
        .iter()
        .find(|e| e.unique_id() == "101_Food level 1")
        .unwrap();

    assert_eq!(hopper1.state(), EntityState::Off);

    coordinator
        .replace(dual_hopper_feeder(101, 0, 5))
        .unwrap();
    assert_eq!(hopper1.state(), EntityState::On);
}

#[test]
fn should_turn_unavailable_when_a_device_leaves_the_account() {
    let coordinator = coordinator();
    let entities = binary_sensor::setup(&coordinator);
    let fountain_sensors: Vec<_> = entities
        .iter()
        .filter(|e| e.device_id() == DeviceId::new(301))
        .collect();
    assert_eq!(fountain_sensors.len(), 2);

    coordinator.remove(DeviceId::new(301));
    for sensor in fountain_sensors {
        assert_eq!(sensor.state(), EntityState::Unavailable);
        assert_eq!(sensor.is_on(), None);
    }
}

#[test]
fn should_derive_zero_sensors_for_a_purifier_only_account() {
    let coordinator = Arc::new(
        SimulatedCoordinator::seed(vec![Device::Purifier(petkit_domain::purifier::Purifier {
            id: DeviceId::new(1),
            name: "Purifier".to_string(),
            device_type: model::K3.to_string(),
        })])
        .unwrap(),
    );
    assert!(binary_sensor::setup(&coordinator).is_empty());
}

#[tokio::test]
async fn should_keep_sensors_readable_while_the_simulation_runs() {
    let mut coordinator = SimulatedCoordinator::new().unwrap();
    coordinator.start_background(Duration::from_millis(5));
    let coordinator = Arc::new(coordinator);

    let entities = binary_sensor::setup(&coordinator);

    for _ in 0..20 {
        tokio::time::sleep(Duration::from_millis(5)).await;
        for entity in &entities {
            // Devices never leave the simulated account, so every read
            // lands on a live snapshot.
            assert!(entity.state().is_available());
        }
    }
    assert!(coordinator.last_refresh().is_some());
}
