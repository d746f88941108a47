use crate::rigid_body::{PointMassState, MASS_COUNT};

/// Classical 4th-order Runge-Kutta over all `(x_i, v_i)` pairs at once.
///
/// Stage states are kept as scratch so a step never allocates.
pub struct Rk4 {
    stages: [PointMassState; 4],
}

impl Rk4 {
    pub fn new() -> Self {
        Self {
            stages: [PointMassState::default(); 4],
        }
    }

    /// Advance `state` by `dt`.
    ///
    /// Each stage is an Euler step from the base state using the derivative
    /// at the previous stage; the stages combine as
    /// `(s1 + 2 s2 + s3 + s4 / 2) / 3 - base / 2`, which is the usual
    /// `(k1 + 2 k2 + 2 k3 + k4) / 6` weighting.
    pub fn step(&mut self, state: &mut PointMassState, masses: &[f64; MASS_COUNT], dt: f64) {
        let dth = dt / 2.0;
        let base = *state;

        let [s1, s2, s3, s4] = &mut self.stages;
        stage(&base, &base, masses, dth, s1);
        stage(&base, s1, masses, dth, s2);
        stage(&base, s2, masses, dt, s3);
        stage(&base, s3, masses, dt, s4);

        for i in 0..MASS_COUNT {
            state.x[i] = (s4.x[i] * 0.5 + s3.x[i] + s2.x[i] * 2.0 + s1.x[i]) * (1.0 / 3.0)
                + base.x[i] * -0.5;
            state.v[i] = (s4.v[i] * 0.5 + s3.v[i] + s2.v[i] * 2.0 + s1.v[i]) * (1.0 / 3.0)
                + base.v[i] * -0.5;
        }
    }
}

impl Default for Rk4 {
    fn default() -> Self {
        Self::new()
    }
}

/// `out = base + derivative(at) * dt`
#[inline]
fn stage(
    base: &PointMassState,
    at: &PointMassState,
    masses: &[f64; MASS_COUNT],
    dt: f64,
    out: &mut PointMassState,
) {
    let acc = at.accelerations(masses);
    for i in 0..MASS_COUNT {
        out.x[i] = base.x[i] + at.v[i] * dt;
        out.v[i] = base.v[i] + acc[i] * dt;
    }
}
