use glam::DVec3;

/// Reference direction of the first point mass in the body frame
pub const X1_AXIS: DVec3 = DVec3::new(0.0, 0.0, 1.0);
/// Reference direction of the second point mass in the body frame
pub const X2_AXIS: DVec3 = DVec3::new(0.0, 1.0, 0.0);
/// Reference direction of the third point mass in the body frame
pub const X3_AXIS: DVec3 = DVec3::new(1.0, 0.0, 0.0);
/// Display "up" used when aligning frames to a pseudovector
pub const UP: DVec3 = DVec3::new(0.0, 1.0, 0.0);

/// Unit vector in the direction of `v`, or zero when `v` has no length.
///
/// Unlike `DVec3::normalize` this never yields NaN, so direction-dependent
/// frames built on a resting body stay finite.
#[inline]
pub fn normalize_or_zero(v: DVec3) -> DVec3 {
    let len_sq = v.length_squared();
    if len_sq > 0.0 {
        v / len_sq.sqrt()
    } else {
        DVec3::ZERO
    }
}

#[inline]
pub fn from_array(a: [f64; 3]) -> DVec3 {
    DVec3::new(a[0], a[1], a[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_or_zero_handles_degenerate_input() {
        assert_eq!(normalize_or_zero(DVec3::ZERO), DVec3::ZERO);
        let n = normalize_or_zero(DVec3::new(3.0, 0.0, 4.0));
        assert!((n.length() - 1.0).abs() < 1e-15);
        assert!((n.x - 0.6).abs() < 1e-15);
    }

    #[test]
    fn reference_axes_are_orthonormal() {
        assert_eq!(X1_AXIS.dot(X2_AXIS), 0.0);
        assert_eq!(X1_AXIS.dot(X3_AXIS), 0.0);
        assert_eq!(X2_AXIS.dot(X3_AXIS), 0.0);
    }
}
