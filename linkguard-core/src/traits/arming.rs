//! Arming subsystem trait

/// Actions the failsafe needs from the arming subsystem
pub trait ArmingControl {
    /// Check if motor output is currently enabled
    fn is_armed(&self) -> bool;

    /// Disable motor output
    ///
    /// Must be a no-op when already disarmed.
    fn disarm(&mut self);

    /// Block any arm request until the pilot cycles the arm switch
    fn lock_out_rearm(&mut self);
}
