//! Spinner - the simulation the JS host drives once per animation frame
//!
//! SpinnerCore only orchestrates: the physics lives in
//! `systems::rigid_body_system`, this layer adds options handling, logging,
//! perf metrics and the render transfer buffer.

use glam::{DQuat, DVec3};

use crate::domain::frame::Frame;
use crate::domain::options::{InitialConditions, StepOptions};
use crate::rigid_body::Masses;
use crate::rigid_body_system::derived::{ellipsoid_axes, EllipsoidAxes};
use crate::rigid_body_system::RigidBodySystem;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "render/frames.rs"]
mod frames;
mod facade;

pub use facade::{SnapshotLayout, Spinner};
pub use perf_stats::PerfStats;
pub use render_extract::{Snapshot, SNAPSHOT_LEN};

/// The spinner simulation
pub struct SpinnerCore {
    system: RigidBodySystem,
    initial: InitialConditions,

    // State
    frame: u64,

    // Render transfer buffer (flat f64 snapshot for JS)
    snapshot_buffer: Vec<f64>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SpinnerCore {
    /// Create a spinner with default options, restarted to the default
    /// initial conditions
    pub fn new() -> Self {
        init::create_spinner_core(StepOptions::default())
    }

    pub fn with_options(options: StepOptions) -> Self {
        init::create_spinner_core(options)
    }

    pub fn system(&self) -> &RigidBodySystem { &self.system }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn time(&self) -> f64 { self.system.time() }

    pub fn initial_conditions(&self) -> InitialConditions { self.initial }

    // === SETTINGS ===

    pub fn options(&self) -> StepOptions {
        settings::options(self)
    }

    pub fn set_options(&mut self, options: StepOptions) -> Result<(), String> {
        settings::set_options(self, options)
    }

    /// Replace the step options from JSON (`{"stepSize": 8, "maxSteps": 20}`)
    pub fn load_options_json(&mut self, json: &str) -> Result<(), String> {
        settings::load_options_json(self, json)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === COMMANDS ===

    pub fn set_mass_ratio(&mut self, r: f64, q: f64) {
        commands::set_mass_ratio(self, r, q);
    }

    /// Place the masses from two angles in degrees
    pub fn set_initial_position(&mut self, psi: f64, chi: f64) {
        commands::set_initial_position(self, psi, chi);
    }

    pub fn set_omega(&mut self, omega: DVec3) {
        commands::set_omega(self, omega);
    }

    /// Apply mass ratios, position and angular velocity in that order
    pub fn restart(&mut self, initial: InitialConditions) {
        commands::restart(self, initial);
    }

    pub fn restart_json(&mut self, json: &str) -> Result<(), String> {
        commands::restart_json(self, json)
    }

    pub fn zero_time(&mut self) {
        commands::zero_time(self);
    }

    /// Advance the simulation by `dt` host time units (0 = one default sub-step)
    pub fn step(&mut self, dt: f64) {
        step::step(self, dt);
    }

    // === READ-ONLY OUTPUTS ===

    pub fn masses(&self) -> Masses { self.system.masses() }

    pub fn snapshot(&self) -> Snapshot {
        render_extract::snapshot(self)
    }

    pub fn snapshot_json(&self) -> String {
        render_extract::snapshot_json(self)
    }

    /// Refresh the flat snapshot buffer and return a pointer to it
    pub fn extract_snapshot(&mut self) -> *const f64 {
        render_extract::extract_snapshot(self)
    }

    pub fn snapshot_buffer(&self) -> &[f64] {
        &self.snapshot_buffer
    }

    /// Energy/momentum ellipsoids for the current body, `energy_scale` in `[0, 1]`
    pub fn ellipsoid_axes(&self, energy_scale: f64) -> EllipsoidAxes {
        let s = &self.system;
        ellipsoid_axes(
            energy_scale,
            [s.i1(), s.i2(), s.i3()],
            s.angular_momentum(),
            s.omega(),
        )
    }

    /// Orientation of a reference frame
    pub fn frame_orientation(&self, frame: Frame) -> DQuat {
        frames::frame_orientation(self, frame)
    }

    /// Eased blend between two frame orientations, `k` in `[0, 1]`
    pub fn frame_transition(&self, from: Frame, to: Frame, k: f64) -> DQuat {
        frames::frame_transition(self, from, to, k)
    }

    /// Frame transition started at `start` lasting `duration`, sampled at `now`
    pub fn frame_transition_at(&self, from: Frame, to: Frame, start: f64, duration: f64, now: f64) -> DQuat {
        frames::frame_transition_at(self, from, to, start, duration, now)
    }
}

impl Default for SpinnerCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
