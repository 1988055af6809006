//! # petkit-app
//!
//! Application layer of the PetKit bridge.
//!
//! ## Responsibilities
//! - Define the [`Coordinator`](ports::Coordinator) **port** — the boundary
//!   behind which polling, retries, and snapshot freshness live
//! - Hold the per-category **descriptor tables**: which boolean probes
//!   exist for feeders, litter boxes, and water fountains
//! - **Derive** one [`PetkitBinarySensor`](binary_sensor::PetkitBinarySensor)
//!   per (device, applicable descriptor) pair for the host to register
//!
//! ## Dependency rule
//! Depends on `petkit-domain` only. Everything with IO (the real cloud
//! coordinator, the simulator) lives in adapter crates and plugs into the
//! port defined here.

pub mod binary_sensor;
pub mod ports;
