//! Appify - package an executable into a macOS application bundle.

use appify::cli;
use std::process;

fn main() {
    env_logger::init();

    process::exit(cli::run());
}
