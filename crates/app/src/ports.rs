//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here so the derivation logic and the adapter
//! crates can depend on them without creating circular dependencies.

pub mod coordinator;

pub use coordinator::Coordinator;
