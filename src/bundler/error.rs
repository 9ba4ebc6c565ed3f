//! Error types for bundling operations.
//!
//! Provides contextual error chaining, filesystem-specific errors with the
//! offending path attached, and a coarse [`ErrorKind`] classification used by
//! callers that only care about which class of failure occurred.
//!
//! # Example
//!
//! ```no_run
//! use appify::bundler::{ErrorKind, Result};
//! # fn step() -> Result<()> { Ok(()) }
//!
//! if let Err(e) = step() {
//!     if e.kind() == ErrorKind::InputNotFound {
//!         eprintln!("check the path you passed: {e}");
//!     }
//! }
//! ```

use std::{fmt::Display, io, path::PathBuf};
use thiserror::Error as DeriveError;

/// Errors returned by the bundler.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum Error {
    /// Error with context. Created by the [`Context`] trait.
    #[error("{0}: {1}")]
    Context(String, Box<Self>),

    /// A required input file (executable or icon) does not exist.
    #[error("{what} not found: {}", path.display())]
    InputNotFound {
        /// What the missing input was supposed to be (e.g. "executable")
        what: &'static str,
        /// Path that was looked up
        path: PathBuf,
    },

    /// Icon file extension is not one of the supported formats.
    #[error("{extension} icons not supported")]
    UnsupportedIconFormat {
        /// The offending extension, lowercased and including the leading dot
        extension: String,
    },

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// Context describing the operation (e.g., "creating MacOS directory")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },

    /// Image decoding or resizing error.
    #[error("{0}")]
    ImageError(#[from] image::ImageError),

    /// ICNS container encoding error.
    #[error("encoding icns: {0}")]
    IcnsError(#[source] io::Error),

    /// Handlebars template rendering error.
    #[error("{0}")]
    HandleBarsError(#[from] handlebars::RenderError),

    /// Handlebars template parsing error.
    #[error("{0}")]
    Template(#[from] handlebars::TemplateError),

    /// Generic error with custom message.
    #[error("{0}")]
    GenericError(String),
}

/// Coarse classification of a bundler [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source executable or icon file is absent.
    InputNotFound,
    /// Icon extension not recognized.
    UnsupportedIconFormat,
    /// Any filesystem create, copy, permission or encode failure.
    WriteFailure,
    /// Info.plist template could not be parsed or rendered.
    TemplateFailure,
}

impl Error {
    /// Classify this error, looking through any [`Error::Context`] layers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Context(_, inner) => inner.kind(),
            Error::InputNotFound { .. } => ErrorKind::InputNotFound,
            Error::UnsupportedIconFormat { .. } => ErrorKind::UnsupportedIconFormat,
            Error::HandleBarsError(_) | Error::Template(_) => ErrorKind::TemplateFailure,
            Error::Fs { .. } | Error::ImageError(_) | Error::IcnsError(_) | Error::GenericError(_) => {
                ErrorKind::WriteFailure
            }
        }
    }
}

/// Convenient type alias for Result.
pub type Result<T> = std::result::Result<T, Error>;

/// Trait for adding context to errors.
///
/// Similar to `anyhow::Context` but integrated with the bundler's Error type.
pub trait Context<T> {
    /// Add context to an error.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;

    /// Add context to an error using a closure (lazy evaluation).
    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> Context<T> for Result<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context(context.to_string(), Box::new(e)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|e| Error::Context(f().to_string(), Box::new(e)))
    }
}

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "creating directory", "copying executable".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_sees_through_context() {
        let err: Result<()> = Err(Error::UnsupportedIconFormat {
            extension: ".bmp".into(),
        });
        let err = err.context("icon").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedIconFormat);
        assert_eq!(err.to_string(), "icon: .bmp icons not supported");
    }

    #[test]
    fn test_fs_context_is_write_failure() {
        let io: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = io.fs_context("creating MacOS directory", "/x/MacOS").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::WriteFailure);
        assert!(err.to_string().starts_with("creating MacOS directory /x/MacOS"));
    }

    #[test]
    fn test_kind_sees_through_nested_context() {
        let err: Result<()> = Err(Error::InputNotFound {
            what: "icon file",
            path: PathBuf::from("nope.png"),
        });
        let err = err.context("inner").context("outer").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputNotFound);
        assert_eq!(err.to_string(), "outer: inner: icon file not found: nope.png");
    }
}
