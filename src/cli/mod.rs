//! Command line interface for appify.
//!
//! Parses arguments into a [`BundleConfig`](crate::bundler::BundleConfig),
//! runs the [`Bundler`] and maps the outcome to a process exit code.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::bundler::{BundledApp, Bundler};
use crate::error::{AppifyError, CliError, Result};
use clap::error::ErrorKind;

/// Main CLI entry point. Returns the process exit code.
pub fn run() -> i32 {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let err = AppifyError::from(CliError::from(e));
            OutputManager::new(false).error(&err.to_string());
            return err.exit_code();
        }
    };
    let output = OutputManager::new(args.quiet);

    match execute(&args) {
        Ok(app) => {
            let _ = output.success(&format!("Created {}", app.bundle_path.display()));
            for file in &app.files {
                let _ = output.indent(&file.display().to_string());
            }
            0
        }
        Err(e) => {
            output.error(&e.to_string());
            e.exit_code()
        }
    }
}

/// Bundle according to already-parsed arguments.
pub fn execute(args: &Args) -> Result<BundledApp> {
    let config = args.to_config()?;
    log::debug!("Resolved configuration: {:?}", config);
    Ok(Bundler::new(config).bundle()?)
}
