//! Coordinator port — read-only access to the latest cloud snapshots.
//!
//! The coordinator is the collaborator that talks to the PetKit cloud:
//! it polls, retries, backs off, and caches the most recent snapshot of
//! every device on the account. This core only ever *reads* that cache.
//! Nothing here triggers a refresh, and every method is synchronous —
//! the data is already resident when we are called.

use std::sync::Arc;

use petkit_domain::device::Device;
use petkit_domain::id::DeviceId;
use petkit_domain::time::Timestamp;

/// Read-only view of a coordinator's snapshot cache.
///
/// Implementations must return `device_list` in a stable order across
/// calls (ascending device id); entity derivation relies on it so the
/// host sees the same registration order on every run.
pub trait Coordinator: Send + Sync {
    /// Latest cached snapshots, in ascending device-id order.
    fn device_list(&self) -> Vec<Arc<Device>>;

    /// Latest snapshot for one device, or `None` when the coordinator no
    /// longer tracks it (e.g. it was removed from the account).
    fn device(&self, id: DeviceId) -> Option<Arc<Device>>;

    /// When the cache was last refreshed, if it ever was.
    fn last_refresh(&self) -> Option<Timestamp>;
}
