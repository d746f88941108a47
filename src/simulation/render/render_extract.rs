use glam::{DQuat, DVec3};
use serde::Serialize;

use super::SpinnerCore;

// Flat snapshot layout (f64 offsets). Quaternions are stored x, y, z, w.
pub const OFFSET_X1: usize = 0;
pub const OFFSET_X2: usize = 3;
pub const OFFSET_X3: usize = 6;
pub const OFFSET_ANGULAR_MOMENTUM: usize = 9;
pub const OFFSET_OMEGA: usize = 12;
pub const OFFSET_Q_ROT: usize = 15;
pub const OFFSET_J_ROT: usize = 19;
pub const OFFSET_J_WORLD: usize = 23;
pub const OFFSET_OMEGA_ROT: usize = 27;
/// I1, I2, I3
pub const OFFSET_MOMENTS: usize = 31;
pub const OFFSET_ENERGY: usize = 34;
pub const OFFSET_TIME: usize = 35;
/// m1, m2, m3
pub const OFFSET_MASSES: usize = 36;
pub const SNAPSHOT_LEN: usize = 39;

/// Read-only copy of everything the renderer consumes
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub time: f64,
    pub x1: DVec3,
    pub x2: DVec3,
    pub x3: DVec3,
    pub angular_momentum: DVec3,
    pub omega: DVec3,
    pub q_rot: DQuat,
    pub j_rot: DQuat,
    pub j_world: DQuat,
    pub omega_rot: DQuat,
    #[serde(rename = "I1")]
    pub i1: f64,
    #[serde(rename = "I2")]
    pub i2: f64,
    #[serde(rename = "I3")]
    pub i3: f64,
    pub energy: f64,
    pub masses: [f64; 3],
}

pub(super) fn snapshot(core: &SpinnerCore) -> Snapshot {
    let s = &core.system;
    Snapshot {
        time: s.time(),
        x1: s.x1(),
        x2: s.x2(),
        x3: s.x3(),
        angular_momentum: s.angular_momentum(),
        omega: s.omega(),
        q_rot: s.q_rot(),
        j_rot: s.j_rot(),
        j_world: s.j_world(),
        omega_rot: s.omega_rot(),
        i1: s.i1(),
        i2: s.i2(),
        i3: s.i3(),
        energy: s.energy(),
        masses: s.masses().as_array(),
    }
}

pub(super) fn snapshot_json(core: &SpinnerCore) -> String {
    serde_json::to_string(&snapshot(core)).unwrap_or_else(|e| {
        console_warn!("snapshot serialization failed: {}", e);
        String::new()
    })
}

pub(super) fn extract_snapshot(core: &mut SpinnerCore) -> *const f64 {
    let snap = snapshot(core);
    let buf = &mut core.snapshot_buffer;
    if buf.len() != SNAPSHOT_LEN {
        buf.resize(SNAPSHOT_LEN, 0.0);
    }

    write_vec(buf, OFFSET_X1, snap.x1);
    write_vec(buf, OFFSET_X2, snap.x2);
    write_vec(buf, OFFSET_X3, snap.x3);
    write_vec(buf, OFFSET_ANGULAR_MOMENTUM, snap.angular_momentum);
    write_vec(buf, OFFSET_OMEGA, snap.omega);
    write_quat(buf, OFFSET_Q_ROT, snap.q_rot);
    write_quat(buf, OFFSET_J_ROT, snap.j_rot);
    write_quat(buf, OFFSET_J_WORLD, snap.j_world);
    write_quat(buf, OFFSET_OMEGA_ROT, snap.omega_rot);
    buf[OFFSET_MOMENTS..OFFSET_MOMENTS + 3].copy_from_slice(&[snap.i1, snap.i2, snap.i3]);
    buf[OFFSET_ENERGY] = snap.energy;
    buf[OFFSET_TIME] = snap.time;
    buf[OFFSET_MASSES..OFFSET_MASSES + 3].copy_from_slice(&snap.masses);

    buf.as_ptr()
}

#[inline]
fn write_vec(buf: &mut [f64], offset: usize, v: DVec3) {
    buf[offset..offset + 3].copy_from_slice(&v.to_array());
}

#[inline]
fn write_quat(buf: &mut [f64], offset: usize, q: DQuat) {
    buf[offset..offset + 4].copy_from_slice(&q.to_array());
}
