//! Domain - host-facing configuration types

pub mod frame;
pub mod options;
