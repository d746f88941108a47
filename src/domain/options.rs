use serde::{Deserialize, Serialize};

/// Default sub-step length (host time units, usually milliseconds)
pub const DEFAULT_STEP_SIZE: f64 = 8.0;
/// Default cap on sub-steps integrated by a single `step` call
pub const DEFAULT_MAX_STEPS: u32 = 20;

/// Integrator stepping configuration.
///
/// No single `step` call integrates more than `max_steps * step_size` of
/// simulated time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StepOptions {
    pub step_size: f64,
    pub max_steps: u32,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl StepOptions {
    pub fn new(step_size: f64, max_steps: u32) -> Result<Self, String> {
        let options = Self { step_size, max_steps };
        options.validate()?;
        Ok(options)
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let options: StepOptions = serde_json::from_str(json).map_err(|e| e.to_string())?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(format!("stepSize must be a positive number, got {}", self.step_size));
        }
        if self.max_steps == 0 {
            return Err("maxSteps must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            console_warn!("step options serialization failed: {}", e);
            String::new()
        })
    }

    /// Most simulated time a single `step` call will integrate
    #[inline]
    pub fn max_time(&self) -> f64 {
        self.max_steps as f64 * self.step_size
    }
}

/// Initial conditions applied by a restart.
///
/// Angles are in degrees, `omega` is the angular velocity in the body frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    /// m2 / m1
    pub r: f64,
    /// m3 / m1
    pub q: f64,
    pub psi: f64,
    pub chi: f64,
    pub omega: [f64; 3],
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            r: 0.5,
            q: 0.0,
            psi: 90.0,
            chi: 90.0,
            omega: [1e-8, 0.0, 0.005],
        }
    }
}

impl InitialConditions {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            console_warn!("initial conditions serialization failed: {}", e);
            String::new()
        })
    }
}
