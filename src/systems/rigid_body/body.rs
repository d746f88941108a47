use glam::DVec3;

/// Number of point-mass directions tracked by the body
pub const MASS_COUNT: usize = 3;

/// Kinematic state of the body: unit directions to each point mass and
/// their time derivatives, all in the body frame.
///
/// The directions are not a rigid triad; they are integrated freely and
/// only renormalized when the body orientation is rebuilt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMassState {
    pub x: [DVec3; MASS_COUNT],
    pub v: [DVec3; MASS_COUNT],
}

impl Default for PointMassState {
    fn default() -> Self {
        Self {
            x: [DVec3::Z, DVec3::Y, DVec3::X],
            v: [DVec3::ZERO; MASS_COUNT],
        }
    }
}

impl PointMassState {
    pub fn new(x: [DVec3; MASS_COUNT], v: [DVec3; MASS_COUNT]) -> Self {
        Self { x, v }
    }

    /// Acceleration of direction `i`.
    ///
    /// The centripetal term keeps `x_i` on the unit sphere; the coupling to
    /// every other mass `j` is `-2 m_j (v_i . v_j) / (m_i + m_j) x_j`.
    /// Pairs with no combined mass contribute nothing.
    pub fn acceleration(&self, masses: &[f64; MASS_COUNT], i: usize) -> DVec3 {
        let xi = self.x[i];
        let vi = self.v[i];
        let mut a = xi * -vi.length_squared();

        for j in 0..MASS_COUNT {
            if j == i {
                continue;
            }
            let pair_mass = masses[i] + masses[j];
            if pair_mass == 0.0 {
                continue;
            }
            a += self.x[j] * ((-2.0 * masses[j] * vi.dot(self.v[j])) / pair_mass);
        }

        a
    }

    pub fn accelerations(&self, masses: &[f64; MASS_COUNT]) -> [DVec3; MASS_COUNT] {
        [
            self.acceleration(masses, 0),
            self.acceleration(masses, 1),
            self.acceleration(masses, 2),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_body_has_no_acceleration() {
        let state = PointMassState::default();
        let masses = [4.0 / 3.0; MASS_COUNT];
        for a in state.accelerations(&masses) {
            assert_eq!(a, DVec3::ZERO);
        }
    }

    #[test]
    fn massless_pair_is_skipped() {
        let state = PointMassState::new(
            [DVec3::Z, DVec3::Y, DVec3::X],
            [DVec3::X, DVec3::Z, DVec3::Y],
        );
        let a = state.acceleration(&[0.0, 4.0, 0.0], 2);
        assert!(a.is_finite());
        // only the centripetal term and the coupling to m2 remain
        let expected = DVec3::X * -1.0 + DVec3::Y * (-2.0 * 4.0 * DVec3::Y.dot(DVec3::Z) / 4.0);
        assert_eq!(a, expected);
    }

    #[test]
    fn coupling_uses_pair_mass() {
        // v1 and v2 parallel so the coupling term is active
        let state = PointMassState::new(
            [DVec3::Z, DVec3::Y, DVec3::X],
            [DVec3::X, DVec3::X, DVec3::ZERO],
        );
        let masses = [1.0, 3.0, 0.0];
        let a1 = state.acceleration(&masses, 0);
        let expected = DVec3::Z * -1.0 + DVec3::Y * (-2.0 * 3.0 / 4.0);
        assert!((a1 - expected).length() < 1e-15);
    }
}
