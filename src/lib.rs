//! # Appify
//!
//! Package any executable into a macOS application bundle.
//!
//! Given an executable, appify creates `<Name>.app` with the standard
//! `Contents/{MacOS,Resources}` layout, copies the executable in, optionally
//! converts an icon to ICNS, and writes `Info.plist` plus a README.
//!
//! ## Usage
//!
//! ```bash
//! appify ./myapp
//! appify --name "My App" --author "Example Inc." --icon icon.png ./myapp
//! ```
//!
//! ## Library
//!
//! ```no_run
//! use appify::bundler::{BundleConfig, Bundler};
//!
//! # fn main() -> appify::bundler::Result<()> {
//! let app = Bundler::new(BundleConfig::new("target/release/myapp").name("My App")).bundle()?;
//! assert!(app.bundle_path.ends_with("My App.app"));
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export main types for public API
pub use bundler::{BundleConfig, BundledApp, Bundler};
pub use cli::Args;
pub use error::{AppifyError, CliError, Result};
