//! Configuration types
//!
//! Tunable thresholds owned by the configuration subsystem. The monitor
//! holds a copy of each and is rebound through `use_config` on a profile
//! switch.

pub mod types;

pub use types::*;
