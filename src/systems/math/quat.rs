use glam::{DQuat, DVec3};

/// Shortest-arc rotation taking unit vector `from` onto unit vector `to`.
///
/// Matches the renderer's convention: for (numerically) opposite vectors the
/// half-turn axis is `(-from.y, from.x, 0)` when `|from.x| > |from.z|`, and
/// `(0, -from.z, from.y)` otherwise. A zero `to` gives the identity.
pub fn rotation_between(from: DVec3, to: DVec3) -> DQuat {
    let r = from.dot(to) + 1.0;

    let q = if r < f64::EPSILON {
        if from.x.abs() > from.z.abs() {
            DQuat::from_xyzw(-from.y, from.x, 0.0, 0.0)
        } else {
            DQuat::from_xyzw(0.0, -from.z, from.y, 0.0)
        }
    } else {
        let c = from.cross(to);
        DQuat::from_xyzw(c.x, c.y, c.z, r)
    };

    q.normalize()
}

/// Rotation of `angle` radians about `axis`; identity for a zero axis.
pub fn axis_angle(axis: DVec3, angle: f64) -> DQuat {
    let len_sq = axis.length_squared();
    if len_sq == 0.0 || !angle.is_finite() {
        return DQuat::IDENTITY;
    }
    DQuat::from_axis_angle(axis / len_sq.sqrt(), angle)
}

/// Spherical interpolation, `t` clamped to `[0, 1]`.
#[inline]
pub fn slerp(a: DQuat, b: DQuat, t: f64) -> DQuat {
    a.slerp(b, t.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-12
    }

    #[test]
    fn rotation_between_maps_from_onto_to() {
        let from = DVec3::Z;
        let to = DVec3::new(1.0, 1.0, 0.0).normalize();
        let q = rotation_between(from, to);
        assert!(approx(q * from, to));
        assert!((q.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotation_between_opposite_vectors_is_a_half_turn() {
        let q = rotation_between(DVec3::Z, -DVec3::Z);
        assert!(approx(q * DVec3::Z, -DVec3::Z));

        let q = rotation_between(DVec3::X, -DVec3::X);
        assert!(approx(q * DVec3::X, -DVec3::X));
    }

    #[test]
    fn rotation_to_zero_vector_is_identity() {
        let q = rotation_between(DVec3::Y, DVec3::ZERO);
        assert!(q.abs_diff_eq(DQuat::IDENTITY, 1e-15));
    }

    #[test]
    fn axis_angle_normalizes_and_guards_zero_axis() {
        let q = axis_angle(DVec3::new(0.0, 0.0, 5.0), FRAC_PI_2);
        assert!(approx(q * DVec3::X, DVec3::Y));
        assert_eq!(axis_angle(DVec3::ZERO, 1.0), DQuat::IDENTITY);
    }

    #[test]
    fn slerp_clamps_parameter() {
        let a = DQuat::IDENTITY;
        let b = axis_angle(DVec3::Y, 1.0);
        assert!(slerp(a, b, 2.0).abs_diff_eq(b, 1e-12));
        assert!(slerp(a, b, -1.0).abs_diff_eq(a, 1e-12));
    }
}
