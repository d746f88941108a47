//! Systems - the physics, free of any host/wasm concerns

pub mod integrator;
pub mod math;
pub mod rigid_body;
pub mod rigid_body_system;
