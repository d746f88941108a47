//! Point-mass body - directions, velocities and masses
//!
//! The body is a set of point-mass pairs held at unit distance from the
//! center. Each pair is represented by a single unit direction `x_i` in the
//! body frame; its motion on the sphere carries the rotation.

mod body;
mod masses;

pub use body::{PointMassState, MASS_COUNT};
pub use masses::{Masses, TOTAL_MASS};
