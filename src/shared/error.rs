use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts tell a rejected query apart from a broken one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the view was rendered (including empty results)
    Success = 0,
    /// The query was rejected before any lookup (e.g. empty software ID)
    ValidationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (dataset error, network error, file I/O error, etc.)
    ApplicationError = 3,
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
            ExitCode::ValidationFailed => write!(f, "Validation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for deployment tracking.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Dataset file not found: {path}\n\n💡 Hint: {suggestion}")]
    DatasetNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse dataset file: {path}\nDetails: {details}\n\n💡 Hint: The dataset must be a JSON object with \"software\" and \"deployments\" keys")]
    DatasetParseError { path: PathBuf, details: String },

    #[error("Deployment API request failed: {url}\nDetails: {details}\n\n💡 Hint: Check the --api-url value and your network connection")]
    ApiRequestError { url: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    /// Validation error for value objects
    #[error("Validation error: {message}")]
    Validation { message: String },
}
