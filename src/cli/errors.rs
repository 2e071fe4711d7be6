//! CLI-specific error types
//!
//! Every CLI error aborts the invocation. Criteria range checks live
//! here, at the boundary; the core pipeline accepts any syntactically
//! valid criteria without re-validating them.

use std::fmt;
use std::io;
use std::path::Path;

use crate::assemble::FormatError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Criteria or path validation failure
    Validation,
    /// Input file does not exist
    FileNotFound,
    /// I/O or CSV framing error
    IoError,
    /// A FormatError crossed the pipeline boundary
    DataError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation => "PLATE_CLI_VALIDATION",
            Self::FileNotFound => "PLATE_CLI_FILE_NOT_FOUND",
            Self::IoError => "PLATE_CLI_IO_ERROR",
            Self::DataError => "PLATE_CLI_DATA_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Validation failure (bad flag value or non-CSV path)
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::Validation, msg)
    }

    /// Input file missing
    pub fn file_not_found(path: &Path) -> Self {
        Self::new(
            CliErrorCode::FileNotFound,
            format!("{} does not exist", path.display()),
        )
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        Self::io_error(format!("CSV error: {}", e))
    }
}

impl From<FormatError> for CliError {
    // The format error's own code and message survive verbatim
    fn from(e: FormatError) -> Self {
        Self::new(CliErrorCode::DataError, format!("{}: {}", e.code(), e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
