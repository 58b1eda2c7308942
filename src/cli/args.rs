//! CLI argument parsing.
//!
//! Hand-rolled so that parsing is a pure function of the argument list and
//! can be tested without touching the process environment. Numeric operands
//! are kept as text; converting and validating them is the calculator's job.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
    /// Flags accepted anywhere on the command line.
    pub options: GlobalOptions,
}

/// Flags shared by every command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    /// YAML configuration file.
    pub config_path: Option<PathBuf>,
    /// Emit JSON instead of text.
    pub json: bool,
    /// Enable debug logging.
    pub verbose: bool,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Chance of at least one success.
    AtLeastOne {
        /// Per-trial probability as a percentage.
        target_percent: String,
        /// Number of trials.
        trials: String,
    },
    /// Trials needed to reach a goal.
    TrialsNeeded {
        /// Per-trial probability as a percentage.
        target_percent: String,
        /// Successes wanted.
        quantity: String,
        /// Goal probability as a percentage.
        goal_percent: String,
        /// Override for the search bound.
        max_trials: Option<u64>,
        /// Fail instead of saturating when the goal is out of reach.
        strict: bool,
    },
    /// Favorable / total ratio.
    Probability {
        /// Favorable outcomes.
        favorable: String,
        /// Total outcomes.
        total: String,
    },
    /// Monte Carlo run.
    Simulate {
        /// Per-trial probability as a percentage.
        probability_percent: String,
        /// Number of trials.
        trials: String,
        /// Seed override.
        seed: Option<u64>,
        /// Sample-count override for the at-least-one estimate.
        samples: Option<u64>,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        let (options, rest) = Self::split_global_options(args);

        if rest.len() < 2 {
            return Self {
                command: Command::Help,
                options,
            };
        }

        let command = match rest[1].as_str() {
            "at-least-one" => Self::parse_at_least_one_command(&rest),
            "trials-needed" => Self::parse_trials_needed_command(&rest),
            "probability" => Self::parse_probability_command(&rest),
            "simulate" => Self::parse_simulate_command(&rest),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command, options }
    }

    /// Pull out `--config`, `--json` and `--verbose` wherever they appear.
    fn split_global_options(args: &[String]) -> (GlobalOptions, Vec<String>) {
        let mut options = GlobalOptions::default();
        let mut rest = Vec::with_capacity(args.len());

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" => {
                    if i + 1 < args.len() {
                        options.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        eprintln!("Error: '--config' requires a file path");
                        i += 1;
                    }
                }
                "--json" => {
                    options.json = true;
                    i += 1;
                }
                "-v" | "--verbose" => {
                    options.verbose = true;
                    i += 1;
                }
                _ => {
                    rest.push(args[i].clone());
                    i += 1;
                }
            }
        }

        (options, rest)
    }

    /// Parse the number following a numeric flag, reporting anything else.
    pub(super) fn parse_flag_value(flag: &str, text: &str) -> Option<u64> {
        match text.trim().parse() {
            Ok(n) => Some(n),
            Err(_) => {
                eprintln!("Error: '{flag}' expects a non-negative integer, got '{text}'; ignoring it");
                None
            }
        }
    }

    /// Parse the 'at-least-one' command arguments.
    fn parse_at_least_one_command(args: &[String]) -> Command {
        if args.len() < 4 {
            eprintln!("Error: 'at-least-one' requires <target%> <trials>");
            return Command::Help;
        }

        Command::AtLeastOne {
            target_percent: args[2].clone(),
            trials: args[3].clone(),
        }
    }

    /// Parse the 'trials-needed' command arguments.
    fn parse_trials_needed_command(args: &[String]) -> Command {
        if args.len() < 5 {
            eprintln!("Error: 'trials-needed' requires <target%> <quantity> <goal%>");
            return Command::Help;
        }

        let mut max_trials = None;
        let mut strict = false;

        let mut i = 5;
        while i < args.len() {
            match args[i].as_str() {
                "--max-trials" => {
                    if i + 1 < args.len() {
                        max_trials = Self::parse_flag_value("--max-trials", &args[i + 1]).or(max_trials);
                        i += 2;
                    } else {
                        eprintln!("Error: '--max-trials' requires a number");
                        i += 1;
                    }
                }
                "--strict" => {
                    strict = true;
                    i += 1;
                }
                _ => i += 1,
            }
        }

        Command::TrialsNeeded {
            target_percent: args[2].clone(),
            quantity: args[3].clone(),
            goal_percent: args[4].clone(),
            max_trials,
            strict,
        }
    }

    /// Parse the 'probability' command arguments.
    fn parse_probability_command(args: &[String]) -> Command {
        if args.len() < 4 {
            eprintln!("Error: 'probability' requires <favorable> <total>");
            return Command::Help;
        }

        Command::Probability {
            favorable: args[2].clone(),
            total: args[3].clone(),
        }
    }

    /// Parse the 'simulate' command arguments.
    fn parse_simulate_command(args: &[String]) -> Command {
        if args.len() < 4 {
            eprintln!("Error: 'simulate' requires <probability%> <trials>");
            return Command::Help;
        }

        let mut seed = None;
        let mut samples = None;

        let mut i = 4;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    if i + 1 < args.len() {
                        seed = Self::parse_flag_value("--seed", &args[i + 1]).or(seed);
                        i += 2;
                    } else {
                        eprintln!("Error: '--seed' requires a number");
                        i += 1;
                    }
                }
                "--samples" => {
                    if i + 1 < args.len() {
                        samples = Self::parse_flag_value("--samples", &args[i + 1]).or(samples);
                        i += 2;
                    } else {
                        eprintln!("Error: '--samples' requires a number");
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }

        Command::Simulate {
            probability_percent: args[2].clone(),
            trials: args[3].clone(),
            seed,
            samples,
        }
    }
}
