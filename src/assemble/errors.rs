//! Record assembly errors
//!
//! Assembly is fail-fast: the first malformed row aborts the whole
//! source, and no partial record set is ever emitted. Every error names
//! the offending source and its 1-based data row.
//!
//! Error codes:
//! - PLATE_MISSING_COLUMN
//! - PLATE_INVALID_NUMBER
//! - PLATE_UNKNOWN_CUISINE

use std::fmt;

use thiserror::Error;

/// Result type for assembly operations
pub type AssembleResult<T> = Result<T, FormatError>;

/// Which tabular source a row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// The primary restaurant source
    Restaurants,
    /// The cuisine lookup source
    Cuisines,
}

impl SourceKind {
    /// Returns the source name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Restaurants => "restaurants",
            SourceKind::Cuisines => "cuisines",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A row that cannot be parsed into a valid record.
///
/// Never recovered locally: the error propagates unchanged through the
/// search pipeline to its caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// A required column is absent from the row
    #[error("{origin} source, row {row}: required column '{column}' is missing")]
    MissingColumn {
        origin: SourceKind,
        row: usize,
        column: &'static str,
    },

    /// A numeric field does not parse
    #[error("{origin} source, row {row}: field '{field}' is not numeric: '{value}'")]
    InvalidNumber {
        origin: SourceKind,
        row: usize,
        field: &'static str,
        value: String,
    },

    /// A cuisine id has no entry in the lookup table
    #[error("{origin} source, row {row}: cuisine id '{id}' has no entry in the lookup table")]
    UnknownCuisine {
        origin: SourceKind,
        row: usize,
        id: String,
    },
}

impl FormatError {
    /// A required column was absent.
    pub fn missing_column(origin: SourceKind, row: usize, column: &'static str) -> Self {
        FormatError::MissingColumn {
            origin,
            row,
            column,
        }
    }

    /// A numeric field failed to parse.
    pub fn invalid_number(
        origin: SourceKind,
        row: usize,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        FormatError::InvalidNumber {
            origin,
            row,
            field,
            value: value.into(),
        }
    }

    /// A primary row referenced a cuisine id the lookup table does not
    /// contain.
    pub fn unknown_cuisine(row: usize, id: impl Into<String>) -> Self {
        FormatError::UnknownCuisine {
            origin: SourceKind::Restaurants,
            row,
            id: id.into(),
        }
    }

    /// Returns the stable machine code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            FormatError::MissingColumn { .. } => "PLATE_MISSING_COLUMN",
            FormatError::InvalidNumber { .. } => "PLATE_INVALID_NUMBER",
            FormatError::UnknownCuisine { .. } => "PLATE_UNKNOWN_CUISINE",
        }
    }

    /// Returns the source whose row failed.
    pub fn source_kind(&self) -> SourceKind {
        match self {
            FormatError::MissingColumn { origin, .. }
            | FormatError::InvalidNumber { origin, .. }
            | FormatError::UnknownCuisine { origin, .. } => *origin,
        }
    }

    /// Returns the 1-based data row that failed.
    pub fn row(&self) -> usize {
        match self {
            FormatError::MissingColumn { row, .. }
            | FormatError::InvalidNumber { row, .. }
            | FormatError::UnknownCuisine { row, .. } => *row,
        }
    }
}
