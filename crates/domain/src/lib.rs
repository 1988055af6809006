//! # petkit-domain
//!
//! Pure domain model for the PetKit bridge.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **device snapshots** the cloud reports (feeders, litter
//!   boxes, water fountains, air purifiers) and the [`Device`](device::Device)
//!   sum type over them
//! - Define the **entity vocabulary** exposed to the host platform:
//!   [`EntityState`](entity::EntityState), device classes, entity categories
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Snapshots are read-only views of what the cloud last reported — nothing
//! in this crate mutates a snapshot after construction.

pub mod error;
pub mod id;
pub mod time;

pub mod device;
pub mod entity;
pub mod feeder;
pub mod litter;
pub mod purifier;
pub mod water_fountain;
