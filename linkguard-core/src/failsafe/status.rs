//! Telemetry snapshot
//!
//! Diagnostic view of the monitor for OSD or ground-station downlink.
//! Nothing in the decision logic reads it back.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Phase;

/// Failsafe state as seen at one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FailsafeStatus {
    pub phase: Phase,
    /// Ticks of signal loss currently counted
    pub counter: u16,
    /// Ticks on which forced landing was applied
    pub event_count: u32,
    pub landing_threshold: u16,
    pub disarm_threshold: u16,
}

#[cfg(feature = "serde")]
impl FailsafeStatus {
    /// Serialize into `buf` with postcard, returning the used prefix
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], postcard::Error> {
        postcard::to_slice(self, buf)
    }

    /// Deserialize a postcard-encoded snapshot
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}
