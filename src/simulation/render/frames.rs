use glam::DQuat;

use crate::domain::frame::Frame;
use crate::systems::math::{ease_quad_out, inv_lerp_clamped, slerp};

use super::SpinnerCore;

pub(super) fn frame_orientation(core: &SpinnerCore, frame: Frame) -> DQuat {
    let s = &core.system;
    match frame {
        Frame::World => DQuat::IDENTITY,
        Frame::AngularMomentum => s.j_rot(),
        Frame::Body => s.q_rot(),
        Frame::AngularVelocity => s.omega_rot(),
    }
}

/// Camera hand-off between frames: quad-out eased slerp.
pub(super) fn frame_transition(core: &SpinnerCore, from: Frame, to: Frame, k: f64) -> DQuat {
    let k = if k.is_nan() { 0.0 } else { k.clamp(0.0, 1.0) };
    slerp(
        frame_orientation(core, from),
        frame_orientation(core, to),
        ease_quad_out(k),
    )
}

/// Transition progress taken from host timestamps (ms).
pub(super) fn frame_transition_at(
    core: &SpinnerCore,
    from: Frame,
    to: Frame,
    start: f64,
    duration: f64,
    now: f64,
) -> DQuat {
    frame_transition(core, from, to, inv_lerp_clamped(start, start + duration, now))
}
