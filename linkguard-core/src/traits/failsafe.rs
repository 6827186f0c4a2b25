//! Failsafe trait

use super::{ArmingControl, RcCommandOutput};
use crate::error::FailsafeError;
use crate::failsafe::FailsafeResponse;

/// Operations the surrounding firmware calls on a failsafe
///
/// Every operation except [`Failsafe::is_idle`] fails with a
/// [`FailsafeError`] until both the RC configuration and the failsafe
/// thresholds have been bound.
pub trait Failsafe {
    /// Clear the elapsed-loss counter
    fn reset(&mut self);

    /// Check if no signal loss is being counted
    fn is_idle(&self) -> bool;

    /// Check if the forced-landing guard time has passed
    fn has_timer_elapsed(&self) -> Result<bool, FailsafeError>;

    /// Check if forced landing applies given the armed state
    fn should_force_landing(&self, armed: bool) -> Result<bool, FailsafeError>;

    /// Check if the forced-disarm time has passed
    fn should_have_caused_landing_by_now(&self) -> Result<bool, FailsafeError>;

    /// Count one more tick of signal loss
    ///
    /// Call exactly once per control-loop tick.
    fn increment_counter(&mut self) -> Result<(), FailsafeError>;

    /// Apply the response for the current counter value
    fn update_state<C, A>(
        &mut self,
        commands: &mut C,
        arming: &mut A,
    ) -> Result<FailsafeResponse, FailsafeError>
    where
        C: RcCommandOutput + ?Sized,
        A: ArmingControl + ?Sized;

    /// Record one decoded channel pulse
    ///
    /// Returns true when this pulse completed a valid set of the four
    /// required channels and the counter was decayed.
    fn check_pulse(&mut self, channel: u8, pulse_us: u16) -> Result<bool, FailsafeError>;
}
