//! Observability subsystem
//!
//! Structured, deterministic logging for the CLI. Events are opt-in
//! (`--verbose`) and never interleave with result output.

mod logger;

pub use logger::{Logger, Severity};
