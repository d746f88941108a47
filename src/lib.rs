//! Spinner Engine - free rotation of a rigid body built from point masses
//!
//! The body is described by unit directions to its masses; their motion
//! under the constraint forces is integrated with RK4 and everything the
//! renderer shows (angular momentum, angular velocity, orientations of the
//! reference frames) is derived from them.
//!
//! Architecture:
//! - core/        - Crate-wide helpers (console logging macros)
//! - domain/      - Options, initial conditions, reference frames
//! - systems/     - Vector math, point-mass dynamics, integrator
//! - simulation/  - Orchestration and the wasm facade

// Logging macros must be in scope before the other modules
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Short paths for the physics modules
pub use systems::integrator;
pub use systems::math;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("spinner engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::frame::Frame;
pub use domain::options::{InitialConditions, StepOptions};
pub use rigid_body::Masses;
pub use rigid_body_system::{RigidBodySystem, StepReport};
pub use simulation::{PerfStats, Snapshot, SnapshotLayout, Spinner, SpinnerCore, SNAPSHOT_LEN};

/// Key of a reference frame as used in host URLs/settings ("world", "J", "body", "omega")
#[wasm_bindgen]
pub fn frame_key(frame: Frame) -> String {
    frame.key().to_string()
}
