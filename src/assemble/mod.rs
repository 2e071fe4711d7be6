//! Record assembly subsystem
//!
//! Consumes already-parsed rows (column name → string value) from the
//! two tabular sources and produces fully-populated `Restaurant`
//! records. The caller performs all file I/O; nothing in this module
//! touches the filesystem.

mod assembler;
mod errors;
mod lookup;

use std::collections::HashMap;

/// An already-parsed tabular row: column name → string value.
pub type Row = HashMap<String, String>;

pub use assembler::RecordAssembler;
pub use errors::{AssembleResult, FormatError, SourceKind};
pub use lookup::CuisineTable;
