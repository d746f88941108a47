use crate::domain::options::StepOptions;

use super::perf_stats::PerfStats;
use super::SpinnerCore;

pub(super) fn options(core: &SpinnerCore) -> StepOptions {
    *core.system.options()
}

pub(super) fn set_options(core: &mut SpinnerCore, options: StepOptions) -> Result<(), String> {
    options.validate()?;
    core.system.set_options(options);
    Ok(())
}

pub(super) fn load_options_json(core: &mut SpinnerCore, json: &str) -> Result<(), String> {
    match StepOptions::from_json(json) {
        Ok(options) => {
            core.system.set_options(options);
            console_log!(
                "step options: stepSize={} maxSteps={}",
                options.step_size,
                options.max_steps
            );
            Ok(())
        }
        Err(e) => {
            console_warn!("rejected step options: {}", e);
            Err(e)
        }
    }
}

pub(super) fn enable_perf_metrics(core: &mut SpinnerCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats = PerfStats::default();
    }
}

pub(super) fn get_perf_stats(core: &SpinnerCore) -> PerfStats {
    core.perf_stats.clone()
}
