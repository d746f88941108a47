//! Integrator - fixed-size RK4 sub-stepping
//!
//! No adaptive step control and no error estimate: a `step(dt)` call is cut
//! into `step_size` pieces plus one shorter remainder, each advanced with
//! the same RK4 stencil.

mod rk4;
mod substep;

pub use rk4::Rk4;
pub use substep::SubSteps;
