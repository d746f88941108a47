//! Core - crate-wide helpers (must be declared first so macros are in scope)

#[macro_use]
pub mod utils;
