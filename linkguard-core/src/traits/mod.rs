//! Collaborator traits
//!
//! These traits define the interface between the failsafe logic and the
//! surrounding firmware: the arming subsystem, the control loop's command
//! values, and the failsafe itself.

pub mod arming;
pub mod failsafe;
pub mod rc;

pub use arming::ArmingControl;
pub use failsafe::Failsafe;
pub use rc::{Axis, RcCommandOutput, STICK_AXES};
