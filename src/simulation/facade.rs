use glam::{DQuat, DVec3};
use wasm_bindgen::prelude::*;

use crate::domain::frame::Frame;
use crate::domain::options::StepOptions;

use super::perf_stats::PerfStats;
use super::render_extract as layout;
use super::SpinnerCore;

/// Offsets (in f64 elements) into the snapshot buffer
#[wasm_bindgen]
pub struct SnapshotLayout {
    ptr: u32,
    len_elements: u32,
    len_bytes: u32,
}

#[wasm_bindgen]
impl SnapshotLayout {
    #[wasm_bindgen(getter)]
    pub fn ptr(&self) -> u32 { self.ptr }
    #[wasm_bindgen(getter)]
    pub fn len_elements(&self) -> u32 { self.len_elements }
    #[wasm_bindgen(getter)]
    pub fn len_bytes(&self) -> u32 { self.len_bytes }

    #[wasm_bindgen(getter)]
    pub fn x1(&self) -> u32 { layout::OFFSET_X1 as u32 }
    #[wasm_bindgen(getter)]
    pub fn x2(&self) -> u32 { layout::OFFSET_X2 as u32 }
    #[wasm_bindgen(getter)]
    pub fn x3(&self) -> u32 { layout::OFFSET_X3 as u32 }
    #[wasm_bindgen(getter)]
    pub fn angular_momentum(&self) -> u32 { layout::OFFSET_ANGULAR_MOMENTUM as u32 }
    #[wasm_bindgen(getter)]
    pub fn omega(&self) -> u32 { layout::OFFSET_OMEGA as u32 }

    #[wasm_bindgen(getter)]
    pub fn q_rot(&self) -> u32 { layout::OFFSET_Q_ROT as u32 }
    #[wasm_bindgen(getter)]
    pub fn j_rot(&self) -> u32 { layout::OFFSET_J_ROT as u32 }
    #[wasm_bindgen(getter)]
    pub fn j_world(&self) -> u32 { layout::OFFSET_J_WORLD as u32 }
    #[wasm_bindgen(getter)]
    pub fn omega_rot(&self) -> u32 { layout::OFFSET_OMEGA_ROT as u32 }

    #[wasm_bindgen(getter)]
    pub fn moments(&self) -> u32 { layout::OFFSET_MOMENTS as u32 }
    #[wasm_bindgen(getter)]
    pub fn energy(&self) -> u32 { layout::OFFSET_ENERGY as u32 }
    #[wasm_bindgen(getter)]
    pub fn time(&self) -> u32 { layout::OFFSET_TIME as u32 }
    #[wasm_bindgen(getter)]
    pub fn masses(&self) -> u32 { layout::OFFSET_MASSES as u32 }
}

#[wasm_bindgen]
pub struct Spinner {
    core: SpinnerCore,
}

#[wasm_bindgen]
impl Spinner {
    /// Create a spinner with default step options and initial conditions
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: SpinnerCore::new(),
        }
    }

    #[wasm_bindgen(js_name = newWithOptions)]
    pub fn new_with_options(step_size: f64, max_steps: u32) -> Result<Spinner, JsValue> {
        let options = StepOptions::new(step_size, max_steps).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: SpinnerCore::with_options(options),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f64 { self.core.time() }

    #[wasm_bindgen(getter)]
    pub fn energy(&self) -> f64 { self.core.system().energy() }

    #[wasm_bindgen(getter, js_name = I1)]
    pub fn i1(&self) -> f64 { self.core.system().i1() }

    #[wasm_bindgen(getter, js_name = I2)]
    pub fn i2(&self) -> f64 { self.core.system().i2() }

    #[wasm_bindgen(getter, js_name = I3)]
    pub fn i3(&self) -> f64 { self.core.system().i3() }

    /// Precession rate of the body about the angular momentum
    #[wasm_bindgen(getter)]
    pub fn omega_j(&self) -> f64 { self.core.system().omega_j() }

    /// Angular velocity last passed to `set_omega`
    pub fn omega_0(&self) -> Vec<f64> { self.core.system().omega_0().to_array().to_vec() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn load_options(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_options_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_options_json(&self) -> String {
        self.core.options().to_json()
    }

    // === COMMANDS ===

    /// Set the mass ratios m2/m1 = r and m3/m1 = q
    pub fn set_mass_ratio(&mut self, r: f64, q: f64) {
        self.core.set_mass_ratio(r, q);
    }

    /// Place the masses from two angles in degrees
    pub fn set_initial_position(&mut self, psi: f64, chi: f64) {
        self.core.set_initial_position(psi, chi);
    }

    pub fn set_omega(&mut self, x: f64, y: f64, z: f64) {
        self.core.set_omega(DVec3::new(x, y, z));
    }

    /// Restart from `{"r", "q", "psi", "chi", "omega": [x, y, z]}`
    pub fn restart(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .restart_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_initial_conditions_json(&self) -> String {
        self.core.initial_conditions().to_json()
    }

    pub fn zero_time(&mut self) {
        self.core.zero_time();
    }

    /// Advance by `dt` host time units, typically milliseconds since the last frame
    pub fn step(&mut self, dt: f64) {
        self.core.step(dt);
    }

    // === OUTPUTS ===

    pub fn x1(&self) -> Vec<f64> { self.core.system().x1().to_array().to_vec() }

    pub fn x2(&self) -> Vec<f64> { self.core.system().x2().to_array().to_vec() }

    pub fn x3(&self) -> Vec<f64> { self.core.system().x3().to_array().to_vec() }

    pub fn angular_momentum(&self) -> Vec<f64> {
        self.core.system().angular_momentum().to_array().to_vec()
    }

    pub fn omega(&self) -> Vec<f64> { self.core.system().omega().to_array().to_vec() }

    /// m1, m2, m3
    pub fn masses(&self) -> Vec<f64> { self.core.masses().as_array().to_vec() }

    /// Ellipsoid semi-axes: momentum `x, y, z` then rolling `x, y, z`
    pub fn ellipsoid_axes(&self, energy_scale: f64) -> Vec<f64> {
        let axes = self.core.ellipsoid_axes(energy_scale);
        let mut out = axes.momentum.to_array().to_vec();
        out.extend_from_slice(&axes.rolling.to_array());
        out
    }

    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }

    /// Refresh the snapshot buffer, returns a pointer into wasm memory
    pub fn extract_snapshot(&mut self) -> *const f64 {
        self.core.extract_snapshot()
    }

    pub fn snapshot_len(&self) -> usize {
        layout::SNAPSHOT_LEN
    }

    pub fn snapshot_layout(&self) -> SnapshotLayout {
        SnapshotLayout {
            ptr: self.core.snapshot_buffer().as_ptr() as u32,
            len_elements: layout::SNAPSHOT_LEN as u32,
            len_bytes: (layout::SNAPSHOT_LEN * std::mem::size_of::<f64>()) as u32,
        }
    }

    // === CAMERA FRAMES ===

    /// Orientation of `frame` as `[x, y, z, w]`
    pub fn frame_orientation(&self, frame: Frame) -> Vec<f64> {
        quat_vec(self.core.frame_orientation(frame))
    }

    pub fn frame_orientation_by_key(&self, key: &str) -> Result<Vec<f64>, JsValue> {
        let frame = Frame::from_key(key)
            .ok_or_else(|| JsValue::from_str(&format!("unknown frame '{}'", key)))?;
        Ok(self.frame_orientation(frame))
    }

    /// Eased blend between two frames, `k` in `[0, 1]`
    pub fn frame_transition(&self, from: Frame, to: Frame, k: f64) -> Vec<f64> {
        quat_vec(self.core.frame_transition(from, to, k))
    }

    /// Blend for a transition that started at `start` and lasts `duration`
    pub fn frame_transition_at(
        &self,
        from: Frame,
        to: Frame,
        start: f64,
        duration: f64,
        now: f64,
    ) -> Vec<f64> {
        quat_vec(self.core.frame_transition_at(from, to, start, duration, now))
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::new()
    }
}

impl Spinner {
    pub fn core(&self) -> &SpinnerCore {
        &self.core
    }
}

fn quat_vec(q: DQuat) -> Vec<f64> {
    q.to_array().to_vec()
}
