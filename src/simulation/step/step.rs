use super::perf_timer::timed;
use super::SpinnerCore;

pub(super) fn step(core: &mut SpinnerCore, dt: f64) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }

    let (report, step_ms) = timed(perf_on, || core.system.step(dt));

    // A clamp means the host stalled (tab in background, debugger, ...)
    if report.dropped > 0.0 {
        console_log!(
            "step clamped: dt={} dropped={} (max {} per call)",
            dt,
            report.dropped,
            core.system.options().max_time()
        );
    }

    core.frame += 1;

    if perf_on {
        core.perf_stats.record(&report, core.frame);
        core.perf_stats.step_ms = step_ms;
    }
}
