//! Vector math - 3D vector and quaternion helpers on top of glam
//!
//! The helpers reproduce the renderer's quaternion conventions so the
//! orientations handed to JS line up with what the scene graph expects.

mod ease;
mod quat;
mod vec3;

pub use ease::{ease_quad_out, inv_lerp_clamped};
pub use quat::{axis_angle, rotation_between, slerp};
pub use vec3::{from_array, normalize_or_zero, UP, X1_AXIS, X2_AXIS, X3_AXIS};
