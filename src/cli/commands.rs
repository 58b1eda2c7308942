//! CLI command handlers.
//!
//! [`execute`] turns a parsed command into a [`Report`] without printing, so
//! the handlers are testable; [`run_cli`] adds configuration loading, output
//! and exit codes.

use std::process::ExitCode;

use tracing::debug;

use super::output::{print_error, print_help, print_report, print_version, Report};
use super::{Args, Command};
use crate::config::{CalcConfig, UnreachablePolicy};
use crate::engine::ProbabilityEngine;
use crate::error::{ProbError, ProbResult};
use crate::input::{parse_count, parse_percent, parse_signed};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    let json = args.options.json;

    match args.command {
        Command::Help => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            print_version();
            return ExitCode::SUCCESS;
        }
        _ => {}
    }

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e.to_string(), json);
            return ExitCode::from(1);
        }
    };
    let decimals = config.display.decimals;

    let mut engine = match ProbabilityEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            print_error(&e.to_string(), json);
            return ExitCode::from(1);
        }
    };

    match execute(&args.command, &mut engine) {
        Ok(Some(report)) => {
            print_report(&report, decimals, json);
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e.to_string(), json);
            ExitCode::from(1)
        }
    }
}

/// Load the configuration file (if any) and apply command-line overrides.
///
/// # Errors
///
/// Returns error if the file cannot be read or parsed.
pub fn load_config(args: &Args) -> ProbResult<CalcConfig> {
    let mut config = match &args.options.config_path {
        Some(path) => {
            debug!(path = %path.display(), "loading configuration");
            CalcConfig::load(path)?
        }
        None => CalcConfig::default(),
    };

    match &args.command {
        Command::TrialsNeeded {
            max_trials, strict, ..
        } => {
            if let Some(n) = max_trials {
                config.search.max_trials = *n;
            }
            if *strict {
                config.search.on_unreachable = UnreachablePolicy::Error;
            }
        }
        Command::Simulate { seed, samples, .. } => {
            if let Some(seed) = seed {
                config.simulation.seed = *seed;
            }
            if let Some(samples) = samples {
                config.simulation.samples = *samples;
            }
        }
        _ => {}
    }

    Ok(config)
}

/// Run a command against an engine.
///
/// Returns `Ok(None)` for commands that produce no report (help, version).
///
/// # Errors
///
/// Returns the first validation error for the command's operands.
pub fn execute(command: &Command, engine: &mut ProbabilityEngine) -> ProbResult<Option<Report>> {
    let report = match command {
        Command::AtLeastOne {
            target_percent,
            trials,
        } => {
            let target_probability = parse_percent(target_percent);
            let trials = parse_count(trials).unwrap_or(0);
            let probability = engine.at_least_one(target_probability, trials)?;
            Report::AtLeastOne {
                target_probability,
                trials,
                probability,
            }
        }
        Command::TrialsNeeded {
            target_percent,
            quantity,
            goal_percent,
            ..
        } => {
            let target_probability = parse_percent(target_percent);
            let desired_quantity = parse_count(quantity).unwrap_or(0);
            let goal_probability = parse_percent(goal_percent);
            let trials =
                engine.trials_needed(target_probability, desired_quantity, goal_probability)?;
            Report::TrialsNeeded {
                target_probability,
                desired_quantity,
                goal_probability,
                trials,
            }
        }
        Command::Probability { favorable, total } => {
            let total = parse_outcomes("Total outcomes", total)?;
            let favorable = match parse_signed(favorable) {
                Some(favorable) => favorable,
                // total is validated first
                None if total <= 0 => return Err(ProbError::InvalidTotalOutcomes { total }),
                None => return Err(not_a_whole_number("Favorable outcomes", favorable)),
            };
            let probability = engine.probability(favorable, total)?;
            Report::Probability {
                favorable,
                total,
                probability,
            }
        }
        Command::Simulate {
            probability_percent,
            trials,
            ..
        } => {
            let probability = parse_percent(probability_percent);
            let trials = parse_count(trials).unwrap_or(0);
            let successes = engine.simulate(probability, trials)?;
            let estimate = engine.estimate_at_least_one(probability, trials)?;
            let exact = engine.at_least_one(probability, trials)?;
            Report::Simulation {
                probability,
                trials,
                successes,
                seed: engine.config().simulation.seed,
                at_least_one_estimate: estimate.estimate,
                at_least_one_std_error: estimate.std_error,
                at_least_one_exact: exact,
            }
        }
        Command::Help | Command::Version => return Ok(None),
    };

    Ok(Some(report))
}

fn parse_outcomes(field: &'static str, text: &str) -> ProbResult<i64> {
    parse_signed(text).ok_or_else(|| not_a_whole_number(field, text))
}

fn not_a_whole_number(field: &'static str, text: &str) -> ProbError {
    ProbError::NotAWholeNumber {
        field,
        text: text.trim().to_string(),
    }
}
