//! Configuration structures for bundling operations.
//!
//! [`BundleConfig`] is the value object the command line (or any other
//! caller) builds once and hands to the [`Bundler`](crate::bundler::Bundler).
//! [`BundleMetadata`] is the resolved descriptor derived from it, which is what
//! the Info.plist template is rendered from.

use serde::Serialize;
use std::path::PathBuf;

/// Default bundle display name.
pub const DEFAULT_NAME: &str = "My Go Application";

/// Default author, used for the derived identifier and info string.
pub const DEFAULT_AUTHOR: &str = "Appify by Machine Box";

/// Default version and short version string.
pub const DEFAULT_VERSION: &str = "1.0";

/// Default output directory.
pub const DEFAULT_DIST: &str = ".";

/// Input configuration for one bundling run.
///
/// # Examples
///
/// ```no_run
/// use appify::bundler::BundleConfig;
///
/// let config = BundleConfig::new("target/release/myapp")
///     .name("My App")
///     .author("Example Inc.")
///     .version("2.1")
///     .icon("assets/icon.png")
///     .dist("dist");
/// assert_eq!(config.name, "My App");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleConfig {
    /// Bundle display name. Also names the `.app` directory and the inner executable.
    pub name: String,

    /// Author, used to derive the identifier and info string.
    pub author: String,

    /// Version, used for both `CFBundleVersion` and `CFBundleShortVersionString`.
    pub version: String,

    /// Explicit bundle identifier.
    ///
    /// Default: None (derived as `<author>.<name>`)
    pub identifier: Option<String>,

    /// Icon image (`.icns`, `.png`, `.jpg`, `.jpeg` or `.gif`).
    ///
    /// Default: None (no icon is added)
    pub icon: Option<PathBuf>,

    /// Directory in which the `.app` bundle is created.
    pub dist: PathBuf,

    /// Executable copied into the bundle.
    pub executable: PathBuf,
}

impl BundleConfig {
    /// Create a configuration for `executable` with every other field at its default.
    pub fn new(executable: impl Into<PathBuf>) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            version: DEFAULT_VERSION.to_string(),
            identifier: None,
            icon: None,
            dist: PathBuf::from(DEFAULT_DIST),
            executable: executable.into(),
        }
    }

    /// Set the bundle display name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the version string.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set an explicit identifier. An empty string means "derive it".
    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into()).filter(|id| !id.is_empty());
        self
    }

    /// Set the icon path. An empty path means "no icon".
    pub fn icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.icon = Some(icon.into()).filter(|p| !p.as_os_str().is_empty());
        self
    }

    /// Set the output directory.
    pub fn dist(mut self, dist: impl Into<PathBuf>) -> Self {
        self.dist = dist.into();
        self
    }

    /// File name of the bundle directory (and of the inner executable).
    pub fn app_name(&self) -> String {
        format!("{}.app", self.name)
    }

    /// Bundle identifier, falling back to `<author>.<name>`.
    pub fn resolved_identifier(&self) -> String {
        match &self.identifier {
            Some(id) => id.clone(),
            None => format!("{}.{}", self.author, self.name),
        }
    }
}

/// Resolved bundle metadata, rendered into Info.plist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleMetadata {
    /// `CFBundleName`
    pub name: String,
    /// `CFBundleExecutable`, relative to `Contents`
    pub executable: String,
    /// `CFBundleIdentifier`
    pub identifier: String,
    /// `CFBundleVersion`
    pub version: String,
    /// `CFBundleGetInfoString`
    pub info_string: String,
    /// `CFBundleShortVersionString`
    pub short_version_string: String,
    /// `CFBundleIconFile`, only set once an icon has been written
    pub icon_file: Option<String>,
}

impl BundleMetadata {
    /// Derive the metadata for `config`. The icon file is filled in later by the icon step.
    pub fn resolve(config: &BundleConfig) -> Self {
        Self {
            name: config.name.clone(),
            executable: format!("MacOS/{}", config.app_name()),
            identifier: config.resolved_identifier(),
            version: config.version.clone(),
            info_string: format!("{} by {}", config.name, config.author),
            short_version_string: config.version.clone(),
            icon_file: None,
        }
    }
}
