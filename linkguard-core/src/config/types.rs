//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lowest pulse width accepted for throttle and stick commands (µs)
pub const PWM_RANGE_MIN: u16 = 1000;

/// Highest pulse width accepted for throttle and stick commands (µs)
pub const PWM_RANGE_MAX: u16 = 2000;

/// Lowest allowed signal-detect threshold (µs)
pub const DETECT_THRESHOLD_MIN: u16 = 100;

/// Allowed neutral stick range (µs)
pub const MID_RC_MIN: u16 = 1200;
pub const MID_RC_MAX: u16 = 1700;

/// Largest configurable delay, in 0.1 s units
pub const MAX_DELAY: u8 = 200;

/// Monitor ticks per configured delay unit
///
/// Fixed firmware constant; not user configurable.
pub const TICKS_PER_DELAY_UNIT: u16 = 5;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Signal-detect threshold outside 100..=2000 µs
    DetectThresholdOutOfRange,
    /// Landing throttle outside the PWM range
    ThrottleOutOfRange,
    /// Neutral stick value outside 1200..=1700 µs
    MidRcOutOfRange,
    /// Delay or off-delay above 200
    DelayOutOfRange,
}

/// Failsafe thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FailsafeConfig {
    /// Pulse width above which a channel counts as present (µs)
    pub detect_threshold: u16,
    /// Guard time before forced landing, in 0.1 s units
    pub delay: u8,
    /// Additional time before forced disarm, in 0.1 s units
    pub off_delay: u8,
    /// Throttle commanded during forced landing (µs)
    pub throttle: u16,
}

impl Default for FailsafeConfig {
    fn default() -> Self {
        Self {
            detect_threshold: 985,
            delay: 10,
            off_delay: 200,
            throttle: 1200,
        }
    }
}

impl FailsafeConfig {
    /// Counter value the loss must exceed before forced landing
    pub fn landing_threshold(&self) -> u16 {
        TICKS_PER_DELAY_UNIT * self.delay as u16
    }

    /// Counter value the loss must exceed before forced disarm
    pub fn disarm_threshold(&self) -> u16 {
        TICKS_PER_DELAY_UNIT * (self.delay as u16 + self.off_delay as u16)
    }

    /// Check all fields against their allowed ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(DETECT_THRESHOLD_MIN..=PWM_RANGE_MAX).contains(&self.detect_threshold) {
            return Err(ConfigError::DetectThresholdOutOfRange);
        }
        if !(PWM_RANGE_MIN..=PWM_RANGE_MAX).contains(&self.throttle) {
            return Err(ConfigError::ThrottleOutOfRange);
        }
        if self.delay > MAX_DELAY || self.off_delay > MAX_DELAY {
            return Err(ConfigError::DelayOutOfRange);
        }
        Ok(())
    }
}

/// RC receiver settings used by the failsafe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RxConfig {
    /// Neutral stick value for roll, pitch and yaw (µs)
    pub mid_rc: u16,
}

impl Default for RxConfig {
    fn default() -> Self {
        Self { mid_rc: 1500 }
    }
}

impl RxConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MID_RC_MIN..=MID_RC_MAX).contains(&self.mid_rc) {
            return Err(ConfigError::MidRcOutOfRange);
        }
        Ok(())
    }
}
