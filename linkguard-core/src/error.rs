//! Failsafe error types

use crate::config::ConfigError;

/// Errors returned by the failsafe monitor
///
/// Signal loss is never an error; it is reported through the monitor's
/// phase and response. These cover misuse of the monitor itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FailsafeError {
    /// `init` has not bound an RC configuration yet
    RxConfigMissing,
    /// `use_config` has not bound failsafe thresholds yet
    FailsafeConfigMissing,
    /// `init` was called a second time
    AlreadyInitialized,
    /// Supplied configuration failed validation
    InvalidConfig(ConfigError),
}

impl From<ConfigError> for FailsafeError {
    fn from(e: ConfigError) -> Self {
        FailsafeError::InvalidConfig(e)
    }
}
