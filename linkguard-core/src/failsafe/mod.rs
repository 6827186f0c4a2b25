//! RC link-loss failsafe
//!
//! Counts ticks without a confirmed RC signal and escalates from neutral
//! sticks to forced disarm as the count crosses the configured thresholds.

pub mod detector;
pub mod monitor;
pub mod phase;
pub mod status;

pub use detector::{ChannelValidity, REQUIRED_CHANNELS, VALID_SIGNAL_DECAY};
pub use monitor::{FailsafeMonitor, FailsafeResponse, PHASE_HISTORY_LEN};
pub use phase::{Phase, PhaseChange};
pub use status::FailsafeStatus;
