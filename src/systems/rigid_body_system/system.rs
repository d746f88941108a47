use glam::{DQuat, DVec3};

use crate::domain::options::StepOptions;
use crate::integrator::{Rk4, SubSteps};
use crate::rigid_body::{Masses, PointMassState};
use crate::systems::math::{normalize_or_zero, X3_AXIS};

use super::derived::{angular_momentum, angular_velocity, kinetic_energy, precession_rate};
use super::orientation::{aligned_frame, body_orientation};

/// What one `step` call actually integrated
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    /// Sub-steps run, the partial remainder included
    pub substeps: u32,
    /// Length of the last sub-step
    pub last_substep: f64,
    /// Simulated time skipped by the per-call cap
    pub dropped: f64,
}

/// Free rotation of a body made of up to three point-mass pairs.
///
/// Setup order matters: `set_mass_ratio`, then `set_initial_position`, then
/// `set_omega` (velocities are derived from the current directions).
pub struct RigidBodySystem {
    options: StepOptions,
    masses: Masses,
    state: PointMassState,
    integrator: Rk4,
    time: f64,

    angular_momentum: DVec3,
    omega: DVec3,
    /// Angular velocity as last requested through `set_omega`
    omega_0: DVec3,
    /// Precession rate of the J frame about the angular momentum
    omega_j: f64,

    q_rot: DQuat,
    j_rot: DQuat,
    j_world: DQuat,
    omega_rot: DQuat,
}

impl RigidBodySystem {
    pub fn new(options: StepOptions) -> Self {
        let mut system = Self {
            options,
            masses: Masses::default(),
            state: PointMassState::default(),
            integrator: Rk4::new(),
            time: 0.0,
            angular_momentum: DVec3::ZERO,
            omega: DVec3::ZERO,
            omega_0: DVec3::ZERO,
            omega_j: 0.0,
            q_rot: DQuat::IDENTITY,
            j_rot: DQuat::IDENTITY,
            j_world: DQuat::IDENTITY,
            omega_rot: DQuat::IDENTITY,
        };
        system.update_rot();
        system.update_omega();
        system.update_ang_mom();
        system
    }

    pub fn options(&self) -> &StepOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: StepOptions) {
        self.options = options;
    }

    /// Set `m2 / m1 = r` and `m3 / m1 = q` at fixed total mass.
    ///
    /// Velocities are kept; only the angular momentum is recomputed.
    pub fn set_mass_ratio(&mut self, r: f64, q: f64) {
        self.masses = Masses::from_ratios(r, q);
        self.update_ang_mom();
    }

    /// Place the masses from two angles in degrees:
    ///
    /// ```text
    /// x1 = (sin psi, 0, cos psi)
    /// x2 = (-sin chi cos psi, cos chi, sin chi sin psi)
    /// ```
    ///
    /// `x3` follows from the resulting body orientation, so the three
    /// directions start orthonormal.
    pub fn set_initial_position(&mut self, psi: f64, chi: f64) {
        let psi = psi.to_radians();
        let chi = chi.to_radians();
        let (sin_psi, cos_psi) = psi.sin_cos();
        let (sin_chi, cos_chi) = chi.sin_cos();

        self.state.x[0] = DVec3::new(sin_psi, 0.0, cos_psi);
        self.state.x[1] = DVec3::new(-sin_chi * cos_psi, cos_chi, sin_chi * sin_psi);

        self.update_rot();
        self.state.x[2] = self.q_rot * X3_AXIS;
        self.update_omega();
        self.update_ang_mom();
    }

    /// Spin the body with angular velocity `omega` (body frame):
    /// `v_i = omega x x_i`.
    pub fn set_omega(&mut self, omega: DVec3) {
        for i in 0..self.state.x.len() {
            self.state.v[i] = omega.cross(self.state.x[i]);
        }
        self.update_omega();
        self.update_ang_mom();

        self.omega_0 = omega;
        self.omega_j = precession_rate(self.angular_momentum, omega);
        self.omega_rot = aligned_frame(self.omega, 0.0);
    }

    /// Advance the clock by `dt`, integrating in `step_size` sub-steps.
    pub fn step(&mut self, dt: f64) -> StepReport {
        let masses = self.masses.as_array();
        let plan = SubSteps::plan(self.time, dt, &self.options);
        let mut report = StepReport {
            dropped: plan.dropped(),
            ..StepReport::default()
        };
        let target = plan.target();

        for h in plan {
            self.integrator.step(&mut self.state, &masses, h);
            report.substeps += 1;
            report.last_substep = h;
        }
        self.time = target;

        self.update_rot();
        self.update_omega();
        self.update_ang_mom();

        self.j_rot = aligned_frame(self.angular_momentum, self.omega_j * self.time);
        self.omega_rot = aligned_frame(self.omega, self.omega_0.length() * self.time);

        report
    }

    /// Reset the clock without touching the kinematics.
    pub fn zero_time(&mut self) {
        self.time = 0.0;
    }

    // === DERIVED STATE ===

    pub fn time(&self) -> f64 { self.time }

    pub fn x1(&self) -> DVec3 { self.state.x[0] }

    pub fn x2(&self) -> DVec3 { self.state.x[1] }

    pub fn x3(&self) -> DVec3 { self.state.x[2] }

    pub fn state(&self) -> &PointMassState { &self.state }

    pub fn angular_momentum(&self) -> DVec3 { self.angular_momentum }

    pub fn omega(&self) -> DVec3 { self.omega }

    pub fn omega_0(&self) -> DVec3 { self.omega_0 }

    pub fn omega_j(&self) -> f64 { self.omega_j }

    pub fn q_rot(&self) -> DQuat { self.q_rot }

    pub fn j_rot(&self) -> DQuat { self.j_rot }

    pub fn j_world(&self) -> DQuat { self.j_world }

    pub fn omega_rot(&self) -> DQuat { self.omega_rot }

    pub fn i1(&self) -> f64 { self.masses.principal_moments()[0] }

    pub fn i2(&self) -> f64 { self.masses.principal_moments()[1] }

    pub fn i3(&self) -> f64 { self.masses.principal_moments()[2] }

    pub fn energy(&self) -> f64 {
        kinetic_energy(&self.state, &self.masses.as_array())
    }

    pub fn masses(&self) -> Masses { self.masses }

    // === INTERNAL UPDATES ===

    /// Rebuild the body orientation. Renormalizes `x1` and `x2` in place;
    /// this is the only place the directions are pulled back to unit length.
    fn update_rot(&mut self) {
        self.state.x[0] = normalize_or_zero(self.state.x[0]);
        self.state.x[1] = normalize_or_zero(self.state.x[1]);
        self.q_rot = body_orientation(self.state.x[0], self.state.x[1]);
    }

    fn update_omega(&mut self) {
        self.omega = angular_velocity(&self.state);
    }

    /// Recompute `L` and re-align the J frames to it (no precession).
    fn update_ang_mom(&mut self) {
        self.angular_momentum = angular_momentum(&self.state, &self.masses.as_array());
        self.j_rot = aligned_frame(self.angular_momentum, 0.0);
        self.j_world = self.j_rot;
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new(StepOptions::default())
    }
}
