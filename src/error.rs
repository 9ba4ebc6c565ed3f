//! Top-level error types and exit codes.

use thiserror::Error;

/// Exit code for a missing required argument.
pub const EXIT_MISSING_ARGUMENT: i32 = 2;

/// Exit code for any other failure.
pub const EXIT_FAILURE: i32 = 1;

/// Result type alias for appify operations
pub type Result<T> = std::result::Result<T, AppifyError>;

/// Main error type for appify operations
#[derive(Error, Debug)]
pub enum AppifyError {
    /// CLI argument errors
    #[error(transparent)]
    Cli(#[from] CliError),

    /// Bundler errors
    #[error(transparent)]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Missing required argument
    #[error("missing {argument} argument")]
    MissingArgument {
        /// Argument name
        argument: String,
    },

    /// Unknown flag, unexpected positional or malformed value
    #[error("{}", .0.to_string().trim_end())]
    InvalidArguments(#[from] clap::Error),
}

impl AppifyError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppifyError::Cli(CliError::MissingArgument { .. }) => EXIT_MISSING_ARGUMENT,
            AppifyError::Cli(CliError::InvalidArguments(_)) | AppifyError::Bundler(_) => EXIT_FAILURE,
        }
    }
}
