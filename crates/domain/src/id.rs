//! Typed identifier for cloud devices.
//!
//! PetKit assigns every device a numeric id server-side; the bridge never
//! generates ids of its own. The newtype keeps feeder/litter/fountain ids
//! from being mixed up with other integers floating through the code.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Device`](crate::device::Device), assigned by
/// the PetKit cloud.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DeviceId(u64);

impl DeviceId {
    /// Wrap a raw cloud-assigned id.
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Access the raw numeric id.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DeviceId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<u64> for DeviceId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}
