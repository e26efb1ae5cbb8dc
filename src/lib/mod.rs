//! Shared library modules providing error types, path checks, and telemetry initialization.

pub mod errors;
pub mod paths;
pub mod telemetry;
