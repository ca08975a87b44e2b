//! Shared test utilities used across gnpgen crates.

pub mod dimacs;
pub mod tracing;
