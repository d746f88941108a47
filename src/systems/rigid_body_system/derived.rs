//! Derived quantities - pure functions of the current state

use glam::DVec3;
use serde::Serialize;

use crate::rigid_body::{PointMassState, MASS_COUNT};

/// `L = sum_i m_i (x_i x v_i)`
pub fn angular_momentum(state: &PointMassState, masses: &[f64; MASS_COUNT]) -> DVec3 {
    let mut l = DVec3::ZERO;
    for i in 0..MASS_COUNT {
        l += state.x[i].cross(state.v[i]) * masses[i];
    }
    l
}

/// `E = sum_i m_i |v_i|^2`
pub fn kinetic_energy(state: &PointMassState, masses: &[f64; MASS_COUNT]) -> f64 {
    let mut e = 0.0;
    for i in 0..MASS_COUNT {
        e += masses[i] * state.v[i].length_squared();
    }
    e
}

/// Angular velocity reconstructed from the first two directions:
///
/// ```text
/// z     = x1 x x2
/// dz/dt = x1 x v2 + v1 x x2
/// omega = (x1 x v1 + x2 x v2 + z x dz/dt) / 2
/// ```
///
/// The `z` correction supplies the component along each `x_i` that a single
/// `x_i x v_i` misses; it must stay in this exact form because the
/// directions are not kept orthonormal.
pub fn angular_velocity(state: &PointMassState) -> DVec3 {
    let [x1, x2, _] = state.x;
    let [v1, v2, _] = state.v;

    let z = x1.cross(x2);
    let dz = x1.cross(v2) + v1.cross(x2);

    (x1.cross(v1) + x2.cross(v2) + z.cross(dz)) * 0.5
}

/// Precession rate of the display frame about `L`: `(L . omega) / |L|`.
///
/// Zero when the body carries no angular momentum.
pub fn precession_rate(angular_momentum: DVec3, omega: DVec3) -> f64 {
    let l = angular_momentum.length();
    if l > 0.0 {
        angular_momentum.dot(omega) / l
    } else {
        0.0
    }
}

/// Semi-axes (along the principal axes) of the ellipsoids used to show why
/// spin about the intermediate axis is unstable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EllipsoidAxes {
    /// Energy ellipsoid in angular-momentum space, drawn against the unit
    /// L-sphere
    pub momentum: DVec3,
    /// Energy ellipsoid in angular-velocity space, the one that rolls on the
    /// invariable plane
    pub rolling: DVec3,
}

/// Ellipsoid semi-axes for an energy level picked by `energy_scale`.
///
/// Energies are measured against the separatrix `L^2 / (2 I2)`: scale 0 is
/// the lowest energy the momentum allows (`I2 / I_max`), scale 1 the
/// separatrix itself, where the momentum ellipsoid touches the sphere along
/// the second axis. The scale is clamped to `[0, 1]`.
pub fn ellipsoid_axes(
    energy_scale: f64,
    moments: [f64; 3],
    angular_momentum: DVec3,
    omega: DVec3,
) -> EllipsoidAxes {
    let i2 = moments[1];
    let i_max = moments.iter().copied().fold(0.0, f64::max);
    if i2 <= 0.0 || i_max <= 0.0 {
        return EllipsoidAxes::default();
    }

    let k = if energy_scale.is_nan() { 0.0 } else { energy_scale.clamp(0.0, 1.0) };
    let t_min = i2 / i_max;
    let t = t_min + (1.0 - t_min) * k;

    let z = t / 2.0 / i2;
    let momentum = DVec3::from_array(moments.map(|i| (2.0 * z * i).sqrt()));

    let l_sq = angular_momentum.length_squared();
    let conv = if l_sq > 0.0 { omega.length_squared() / l_sq } else { 0.0 };
    let z = conv * t / 2.0 / i2;
    let rolling = DVec3::from_array(moments.map(|i| if i > 0.0 { (2.0 * z / i).sqrt() } else { 0.0 }));

    EllipsoidAxes { momentum, rolling }
}
