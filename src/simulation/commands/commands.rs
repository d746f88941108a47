use glam::DVec3;

use crate::domain::options::InitialConditions;
use crate::systems::math::from_array;

use super::SpinnerCore;

pub(super) fn set_mass_ratio(core: &mut SpinnerCore, r: f64, q: f64) {
    core.system.set_mass_ratio(r, q);
    core.initial.r = r;
    core.initial.q = q;
}

pub(super) fn set_initial_position(core: &mut SpinnerCore, psi: f64, chi: f64) {
    core.system.set_initial_position(psi, chi);
    core.initial.psi = psi;
    core.initial.chi = chi;
}

pub(super) fn set_omega(core: &mut SpinnerCore, omega: DVec3) {
    core.system.set_omega(omega);
    core.initial.omega = omega.to_array();
}

/// Order matters: velocities are derived from the freshly placed directions.
pub(super) fn restart(core: &mut SpinnerCore, initial: InitialConditions) {
    core.system.set_mass_ratio(initial.r, initial.q);
    core.system.set_initial_position(initial.psi, initial.chi);
    core.system.set_omega(from_array(initial.omega));
    core.initial = initial;

    let m = core.system.masses();
    console_log!(
        "restart: r={} q={} psi={} chi={} omega={:?} -> masses ({:.3}, {:.3}, {:.3})",
        initial.r,
        initial.q,
        initial.psi,
        initial.chi,
        initial.omega,
        m.m1,
        m.m2,
        m.m3
    );
}

pub(super) fn restart_json(core: &mut SpinnerCore, json: &str) -> Result<(), String> {
    let initial = InitialConditions::from_json(json).map_err(|e| {
        console_warn!("rejected initial conditions: {}", e);
        e
    })?;
    restart(core, initial);
    Ok(())
}

pub(super) fn zero_time(core: &mut SpinnerCore) {
    core.system.zero_time();
}
