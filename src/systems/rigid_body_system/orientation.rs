use glam::{DQuat, DVec3};

use crate::systems::math::{axis_angle, normalize_or_zero, rotation_between, UP, X1_AXIS, X2_AXIS};

/// Body orientation from the first two directions.
///
/// Aligns the reference first axis onto `x1`, then turns about the result
/// so the (rotated) reference second axis lands on `x2`. Both inputs are
/// expected to be unit vectors.
pub fn body_orientation(x1: DVec3, x2: DVec3) -> DQuat {
    let q = rotation_between(X1_AXIS, x1);
    let second = q * X2_AXIS;
    rotation_between(second, x2) * q
}

/// Frame whose up axis follows `axis`, spun by `angle` about it.
pub fn aligned_frame(axis: DVec3, angle: f64) -> DQuat {
    let dir = normalize_or_zero(axis);
    let align = rotation_between(UP, dir);
    if angle == 0.0 {
        return align;
    }
    axis_angle(dir, angle) * align
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_orientation_carries_reference_axes() {
        let x1 = DVec3::new(1.0, 0.0, 0.0);
        let x2 = DVec3::new(0.0, 0.0, 1.0);
        let q = body_orientation(x1, x2);
        assert!((q * X1_AXIS - x1).length() < 1e-12);
        assert!((q * X2_AXIS - x2).length() < 1e-12);
    }

    #[test]
    fn aligned_frame_points_up_along_axis() {
        let axis = DVec3::new(0.0, 3.0, 4.0);
        let q = aligned_frame(axis, 0.7);
        assert!((q * UP - axis / 5.0).length() < 1e-12);
    }

    #[test]
    fn aligned_frame_of_zero_axis_is_identity() {
        let q = aligned_frame(DVec3::ZERO, 1.2);
        assert!(q.abs_diff_eq(DQuat::IDENTITY, 1e-15));
    }
}
