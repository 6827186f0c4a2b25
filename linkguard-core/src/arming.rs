//! Arming state with re-arm lockout
//!
//! Reference arming subsystem for the failsafe. Arming follows the pilot's
//! arm switch, but only while `ok_to_arm` is set. The failsafe clears it,
//! and only seeing the switch in the off position sets it again, so a
//! link that comes back with the switch still on cannot re-arm the motors.

use crate::traits::ArmingControl;

/// Arming flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ArmingState {
    armed: bool,
    ok_to_arm: bool,
}

impl Default for ArmingState {
    fn default() -> Self {
        Self::new()
    }
}

impl ArmingState {
    /// Start disarmed and locked out
    ///
    /// The switch has to be seen off once before the first arm.
    pub const fn new() -> Self {
        Self {
            armed: false,
            ok_to_arm: false,
        }
    }

    /// Feed the current arm switch position
    pub fn update_switch(&mut self, switch_on: bool) {
        if switch_on {
            if !self.armed && self.ok_to_arm {
                self.armed = true;
                info!("arming: armed");
            }
        } else {
            if self.armed {
                self.armed = false;
                info!("arming: disarmed by switch");
            }
            self.ok_to_arm = true;
        }
    }

    /// Check if an arm request would currently be refused
    pub fn is_rearm_locked_out(&self) -> bool {
        !self.ok_to_arm
    }
}

impl ArmingControl for ArmingState {
    fn is_armed(&self) -> bool {
        self.armed
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    fn lock_out_rearm(&mut self) {
        self.ok_to_arm = false;
    }
}
