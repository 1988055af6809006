//! # petkitd — PetKit bridge demo daemon
//!
//! Composition root that wires the simulated coordinator to the
//! binary-sensor layer.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars)
//! - Initialize tracing
//! - Start the simulated coordinator and its background refresh loop
//! - Derive the binary sensor list once (the host registry snapshot)
//! - Poll every sensor on a fixed cadence and log state transitions
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use config::Config;
use petkit_adapter_simulator::SimulatedCoordinator;
use petkit_app::binary_sensor;
use petkit_app::ports::Coordinator;
use petkit_domain::entity::EntityState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    let mut coordinator = SimulatedCoordinator::new()?;
    coordinator.start_background(Duration::from_secs(u64::from(config.simulator.tick_secs)));
    let coordinator = Arc::new(coordinator);

    let entities = binary_sensor::setup(&coordinator);
    for entity in &entities {
        tracing::debug!(unique_id = entity.unique_id(), "registered");
    }

    let mut previous: Vec<EntityState> = vec![EntityState::Unknown; entities.len()];
    let mut ticker = tokio::time::interval(Duration::from_secs(u64::from(
        config.simulator.poll_secs,
    )));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                for (entity, prev) in entities.iter().zip(previous.iter_mut()) {
                    let state = entity.state();
                    if state != *prev {
                        tracing::info!(
                            unique_id = entity.unique_id(),
                            from = %prev,
                            to = %state,
                            refreshed_at = ?coordinator.last_refresh(),
                            "sensor state changed"
                        );
                        *prev = state;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                break;
            }
        }
    }

    Ok(())
}
