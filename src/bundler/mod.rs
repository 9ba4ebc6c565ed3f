//! macOS application bundler.
//!
//! Packages a single executable into a `.app` directory tree:
//!
//! ```text
//! <dist>/<Name>.app/
//!   Contents/
//!     MacOS/<Name>.app        copied executable (rwxr-xr-x)
//!     Resources/icon.icns     only when an icon is configured
//!     Info.plist              rendered descriptor
//!     README                  attribution notice
//! ```
//!
//! # Icons
//!
//! `.icns` files are copied unchanged. `.png`, `.jpg`, `.jpeg` and `.gif`
//! images are converted through an [`IconCodec`]; [`IcnsCodec`] is the default
//! and can be replaced with [`Bundler::with_codec`].
//!
//! # Failure policy
//!
//! The workflow aborts on the first error and leaves whatever earlier steps
//! created in place. An existing bundle at the target path is never
//! overwritten.

#![warn(missing_docs)]

mod builder;
mod error;
mod layout;
pub mod macos;
pub mod resources;
mod settings;
mod utils;

// Public re-exports
pub use builder::Bundler;
pub use error::{Context, Error, ErrorExt, ErrorKind, Result};
pub use layout::{BundleLayout, ICON_FILE_NAME};
pub use macos::info_plist::README;
pub use resources::icons::{IcnsCodec, IconCodec};
pub use settings::{
    BundleConfig, BundleMetadata, DEFAULT_AUTHOR, DEFAULT_DIST, DEFAULT_NAME, DEFAULT_VERSION,
};

/// Result of a successful bundling run.
#[derive(Debug, Clone)]
pub struct BundledApp {
    /// Path to the created `<Name>.app` directory.
    pub bundle_path: std::path::PathBuf,

    /// Metadata rendered into Info.plist.
    pub metadata: BundleMetadata,

    /// Every file written, in the order it was written.
    pub files: Vec<std::path::PathBuf>,
}
