//! Command line argument parsing.
//!
//! Every flag has a default, so the only thing a user must supply is the
//! executable to bundle. Flags can also be set through `APPIFY_*` environment
//! variables.

use crate::bundler::{BundleConfig, DEFAULT_AUTHOR, DEFAULT_DIST, DEFAULT_NAME, DEFAULT_VERSION};
use crate::error::CliError;
use clap::Parser;
use std::path::PathBuf;

/// Package an executable into a macOS application bundle
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "appify",
    disable_version_flag = true,
    about = "Package an executable into a macOS application bundle",
    long_about = "Create a macOS .app bundle around any executable.

Usage:
  appify ./myapp
  appify -n \"My App\" -a \"Example Inc.\" -v 2.0 --icon icon.png ./myapp
  appify --dist build --id com.example.myapp ./myapp"
)]
pub struct Args {
    /// App name
    #[arg(short, long, env = "APPIFY_NAME", default_value = DEFAULT_NAME)]
    pub name: String,

    /// Author, used for the derived bundle identifier and info string
    #[arg(short, long, env = "APPIFY_AUTHOR", default_value = DEFAULT_AUTHOR)]
    pub author: String,

    /// App version
    #[arg(short = 'v', long = "version", env = "APPIFY_VERSION", default_value = DEFAULT_VERSION)]
    pub app_version: String,

    /// Bundle identifier (defaults to "<author>.<name>")
    #[arg(long, env = "APPIFY_ID")]
    pub id: Option<String>,

    /// Icon image file (.icns|.png|.jpg|.jpeg|.gif)
    #[arg(long, env = "APPIFY_ICON")]
    pub icon: Option<PathBuf>,

    /// Directory in which to build the app
    #[arg(long, env = "APPIFY_DIST", default_value = DEFAULT_DIST)]
    pub dist: PathBuf,

    /// Suppress the success message
    #[arg(short, long)]
    pub quiet: bool,

    /// Executable to bundle
    #[arg(index = 1, value_name = "EXECUTABLE")]
    pub executable: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments, returning usage errors instead of exiting
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Build the bundling configuration, requiring the executable argument.
    pub fn to_config(&self) -> Result<BundleConfig, CliError> {
        let executable = self
            .executable
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| CliError::MissingArgument {
                argument: "executable".to_string(),
            })?;

        let mut config = BundleConfig::new(executable)
            .name(self.name.clone())
            .author(self.author.clone())
            .version(self.app_version.clone())
            .dist(self.dist.clone());
        if let Some(id) = &self.id {
            config = config.identifier(id.clone());
        }
        if let Some(icon) = &self.icon {
            config = config.icon(icon.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_bundle_config() {
        let args = Args::try_parse_from(["appify", "bin/app"]).unwrap();
        let config = args.to_config().unwrap();
        assert_eq!(config, BundleConfig::new("bin/app"));
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "appify",
            "--name",
            "Test",
            "--author",
            "a. gopher",
            "--version",
            "0.0.1",
            "--id",
            "test",
            "--icon",
            "machina-square.png",
            "--dist",
            "out",
            "bin/app",
        ])
        .unwrap();

        let config = args.to_config().unwrap();

        assert_eq!(config.name, "Test");
        assert_eq!(config.author, "a. gopher");
        assert_eq!(config.version, "0.0.1");
        assert_eq!(config.identifier.as_deref(), Some("test"));
        assert_eq!(config.icon, Some(PathBuf::from("machina-square.png")));
        assert_eq!(config.dist, PathBuf::from("out"));
        assert_eq!(config.executable, PathBuf::from("bin/app"));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let err = Args::try_parse_from(["appify", "--bogus", "x"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_missing_executable() {
        let args = Args::try_parse_from(["appify", "--name", "Test"]).unwrap();
        let err = args.to_config().unwrap_err();
        assert!(matches!(err, CliError::MissingArgument { .. }));
    }
}
