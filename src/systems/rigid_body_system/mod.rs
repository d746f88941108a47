//! Rigid body system - free rotation of the point-mass body
//!
//! Owns the kinematic state, steps it through the RK4 sub-stepper and keeps
//! the derived quantities (angular momentum, angular velocity, energy and
//! the display orientations) in sync after every mutation.

pub mod derived;
mod orientation;
mod system;

pub use orientation::{aligned_frame, body_orientation};
pub use system::{RigidBodySystem, StepReport};
