//! trialodds CLI - repeated-trial probability calculator
//!
//! Thin wrapper around the library's CLI module.

use std::process::ExitCode;

use tracing::Level;
use trialodds::cli::{run_cli, Args};

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.options.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run_cli(args)
}
