//! Utilities shared across the engine

#[macro_use]
mod log;
