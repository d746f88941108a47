use serde::Serialize;

/// Sum of the three masses, held fixed while ratios change
pub const TOTAL_MASS: f64 = 4.0;

/// The three point-mass weights.
///
/// A two-mass body is the `m3 == 0` case.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Masses {
    pub m1: f64,
    pub m2: f64,
    pub m3: f64,
}

impl Masses {
    /// Masses from ratios relative to `m1`: `r = m2 / m1`, `q = m3 / m1`.
    ///
    /// Ratios are not validated; the controls keep them non-negative.
    pub fn from_ratios(r: f64, q: f64) -> Self {
        let m1 = TOTAL_MASS / (1.0 + r + q);
        Self {
            m1,
            m2: r * m1,
            m3: q * m1,
        }
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 3] {
        [self.m1, self.m2, self.m3]
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.m1 + self.m2 + self.m3
    }

    /// Moment analogues: each is the sum of the *other* masses.
    #[inline]
    pub fn principal_moments(&self) -> [f64; 3] {
        [
            self.m2 + self.m3,
            self.m1 + self.m3,
            self.m1 + self.m2,
        ]
    }
}

impl Default for Masses {
    fn default() -> Self {
        Self::from_ratios(1.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratios_keep_total_mass() {
        for &(r, q) in &[(0.0, 0.0), (0.5, 0.0), (1.0, 1.0), (0.3, 0.7), (2.0, 0.25), (10.0, 3.0)] {
            let m = Masses::from_ratios(r, q);
            assert!((m.total() - TOTAL_MASS).abs() < 1e-12, "total for r={r} q={q}");
            assert!((m.m2 / m.m1 - r).abs() < 1e-12);
            assert!((m.m3 / m.m1 - q).abs() < 1e-12);
        }
    }

    #[test]
    fn default_is_equal_two_mass_body() {
        let m = Masses::default();
        assert_eq!(m.as_array(), [2.0, 2.0, 0.0]);
        assert_eq!(m.principal_moments(), [2.0, 2.0, 4.0]);
    }
}
