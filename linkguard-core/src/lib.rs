//! Board-agnostic RC link-loss failsafe for flight-controller firmware
//!
//! This crate contains the failsafe logic that sits between the RC
//! receiver decoder, the stabilization loop and the arming subsystem:
//!
//! - Channel-validity detection on the decoded pulse widths
//! - Elapsed-loss counting with decay on confirmed signal
//! - Staged response (neutral sticks and landing throttle, then disarm)
//! - Re-arm lockout until the pilot cycles the arm switch
//! - Configuration types and collaborator traits
//!
//! # Per-tick call order
//!
//! The monitor is driven once per control cycle from a single execution
//! context. Within a tick the calls must happen in this order:
//!
//! 1. `check_pulse` for every channel the decoder reported
//! 2. `increment_counter`
//! 3. `update_state`
//!
//! [`failsafe::FailsafeMonitor::run_cycle`] performs all three in order.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod arming;
pub mod config;
pub mod error;
pub mod failsafe;
pub mod traits;

pub use error::FailsafeError;
pub use failsafe::{FailsafeMonitor, FailsafeResponse, Phase};
pub use traits::Failsafe;
