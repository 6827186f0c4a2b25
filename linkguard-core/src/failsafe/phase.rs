//! Failsafe phases
//!
//! Phases are never stored as the source of truth. They are recomputed
//! from the counter, the thresholds and the armed flag on every query.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::FailsafeConfig;

/// Failsafe phase derived from the elapsed-loss counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// No signal loss being counted
    #[default]
    Idle,
    /// Loss observed, still inside the guard time
    Accumulating,
    /// Sticks neutral, landing throttle applied
    ForcedLanding,
    /// Disarm issued and re-arm locked out
    ForcedDisarm,
}

impl Phase {
    /// Derive the phase for a counter value
    ///
    /// Past the landing threshold an unarmed aircraft is always in
    /// `ForcedDisarm`; below it nothing is done regardless of arming.
    pub fn derive(counter: u16, armed: bool, config: &FailsafeConfig) -> Self {
        if counter == 0 {
            Phase::Idle
        } else if counter <= config.landing_threshold() {
            Phase::Accumulating
        } else if counter > config.disarm_threshold() || !armed {
            Phase::ForcedDisarm
        } else {
            Phase::ForcedLanding
        }
    }

    /// Check if the signal is currently considered lost
    pub fn is_signal_lost(&self) -> bool {
        !matches!(self, Phase::Idle)
    }

    /// Check if this phase takes corrective action
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::ForcedLanding | Phase::ForcedDisarm)
    }
}

/// A recorded phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PhaseChange {
    pub from: Phase,
    pub to: Phase,
    /// Counter value when the change was observed
    pub counter: u16,
}
