use crate::domain::options::StepOptions;

/// Sub-step schedule for one `step(dt)` call.
///
/// Yields full `step_size` sub-steps followed by one shorter remainder
/// step. When `dt` exceeds `max_steps * step_size` only the most recent
/// `max_steps * step_size` of the interval is integrated; the older part is
/// dropped so a stalled host never triggers unbounded catch-up work.
///
/// The schedule is counted up front, so it ends after at most `max_steps`
/// items whatever the magnitude of the clock.
#[derive(Clone, Copy, Debug)]
pub struct SubSteps {
    full_steps: u32,
    remainder: f64,
    target: f64,
    step_size: f64,
    dropped: f64,
}

impl SubSteps {
    /// Plan the sub-steps taking the clock from `time` to `time + dt`.
    ///
    /// A zero, negative, infinite or NaN `dt` means "one default sub-step".
    pub fn plan(time: f64, dt: f64, options: &StepOptions) -> Self {
        let step_size = options.step_size;
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { step_size };

        let max_time = options.max_time();
        let window = dt.min(max_time);
        let dropped = dt - window;

        // Full steps while more than one step is left, then the rest
        let max_full = options.max_steps.saturating_sub(1) as f64;
        let full_steps = ((window / step_size).ceil() - 1.0).clamp(0.0, max_full) as u32;
        let remainder = window - full_steps as f64 * step_size;

        Self {
            full_steps,
            remainder,
            target: time + dt,
            step_size,
            dropped,
        }
    }

    /// Clock value once every sub-step has run
    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Simulated time skipped because of the per-call cap
    #[inline]
    pub fn dropped(&self) -> f64 {
        self.dropped
    }
}

impl Iterator for SubSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.full_steps > 0 {
            self.full_steps -= 1;
            return Some(self.step_size);
        }
        if self.remainder > 0.0 {
            let remainder = self.remainder;
            self.remainder = 0.0;
            return Some(remainder);
        }
        None
    }
}
