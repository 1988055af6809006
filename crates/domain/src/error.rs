//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PetkitError`] via `#[from]` — no stringly-typed variants.

use crate::id::DeviceId;

/// Top-level error type crossing crate boundaries.
#[derive(Debug, thiserror::Error)]
pub enum PetkitError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced object does not exist (any more).
    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// A domain invariant violation detected by `validate()`.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A device must carry a non-empty display name.
    #[error("device name must not be empty")]
    EmptyName,

    /// A device must carry the vendor model code it was sold as.
    #[error("device type must not be empty")]
    EmptyDeviceType,
}

/// A lookup failed because the target is gone.
#[derive(Debug, thiserror::Error)]
#[error("device {id} is no longer tracked by the coordinator")]
pub struct NotFoundError {
    /// Id of the missing device.
    pub id: DeviceId,
}
