use wasm_bindgen::prelude::*;

use crate::rigid_body_system::StepReport;

/// Snapshot of the last `step` call (zeros while metrics are off)
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) substeps: u32,
    pub(super) last_substep: f64,
    pub(super) dropped_time: f64,
    pub(super) clamped_steps: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        let clamped_steps = self.clamped_steps;
        *self = PerfStats::default();
        self.clamped_steps = clamped_steps;
    }

    pub(crate) fn record(&mut self, report: &StepReport, frame: u64) {
        self.substeps = report.substeps;
        self.last_substep = report.last_substep;
        self.dropped_time = report.dropped;
        if report.dropped > 0.0 {
            self.clamped_steps = self.clamped_steps.saturating_add(1);
        }
        self.frame = frame;
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    /// RK4 sub-steps run, remainder included
    #[wasm_bindgen(getter)]
    pub fn substeps(&self) -> u32 { self.substeps }
    #[wasm_bindgen(getter)]
    pub fn last_substep(&self) -> f64 { self.last_substep }
    /// Simulated time discarded by the per-call cap
    #[wasm_bindgen(getter)]
    pub fn dropped_time(&self) -> f64 { self.dropped_time }
    /// Clamped calls since metrics were enabled
    #[wasm_bindgen(getter)]
    pub fn clamped_steps(&self) -> u32 { self.clamped_steps }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
