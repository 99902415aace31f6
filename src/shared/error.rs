use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Missing required flags and output-create failures deliberately exit
/// with `Success`; only input and configuration failures are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Normal completion, or a diagnostic that does not abort with failure
    Success = 0,
    /// The input could not be read or decoded, or the config is invalid
    Failure = 1,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
        }
    }
}

/// Application-specific errors for SBOM to CSV conversion.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Failed to read SBOM document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    InputReadError { path: PathBuf, details: String },

    #[error("Failed to decode SBOM document: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a CycloneDX JSON document")]
    DocumentDecodeError { path: PathBuf, details: String },

    #[error("Failed to create output file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    OutputCreateError { path: PathBuf, details: String },

    /// Validation error for value objects and config values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// A record that could not be written to the report.
///
/// Write failures never abort a conversion; they are collected and
/// returned to the caller alongside the rows that did succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteFailure {
    #[error("Failed to write header row: {details}")]
    Header { details: String },

    /// `row` is 1-based, counting component rows after the header
    #[error("Failed to write row {row} ({name}): {details}")]
    Row {
        row: usize,
        name: String,
        details: String,
    },

    #[error("Failed to flush output: {details}")]
    Flush { details: String },
}
