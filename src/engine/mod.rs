//! Search engine subsystem
//!
//! `SearchPipeline` orchestrates assembly, predicate matching, and
//! ranking. It is the only boundary the CLI layer calls and is fully
//! exercisable with in-memory rows.

mod search;

pub use search::{SearchOutcome, SearchPipeline};
