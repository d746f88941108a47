use crate::domain::options::{InitialConditions, StepOptions};
use crate::rigid_body_system::RigidBodySystem;

use super::perf_stats::PerfStats;
use super::render_extract::SNAPSHOT_LEN;
use super::SpinnerCore;

pub(super) fn create_spinner_core(options: StepOptions) -> SpinnerCore {
    let initial = InitialConditions::default();
    let mut core = SpinnerCore {
        system: RigidBodySystem::new(options),
        initial,
        frame: 0,
        snapshot_buffer: vec![0.0; SNAPSHOT_LEN],
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    super::commands::restart(&mut core, initial);
    core
}
