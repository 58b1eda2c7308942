//! CLI module for trialodds.
//!
//! All CLI logic lives here rather than in main.rs so it can be tested.
//! The entry point `run_cli` is called from main.rs with parsed arguments.

mod args;
mod commands;
mod output;

pub use args::{Args, Command, GlobalOptions};
pub use commands::{execute, load_config, run_cli};
pub use output::{
    print_error, print_help, print_report, print_version, render_json, render_json_error,
    render_text, version_line, Report,
};
