//! CLI output formatting.
//!
//! Rendering is split from printing so the text and JSON forms can be tested
//! as plain strings.

use serde::Serialize;

use crate::input::format_percent;

/// Result of one CLI command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Report {
    /// Chance of at least one success.
    AtLeastOne {
        /// Per-trial probability as a fraction.
        target_probability: f64,
        /// Number of trials.
        trials: u64,
        /// Resulting probability.
        probability: f64,
    },
    /// Trials needed to reach a goal.
    TrialsNeeded {
        /// Per-trial probability as a fraction.
        target_probability: f64,
        /// Successes wanted.
        desired_quantity: u64,
        /// Goal probability as a fraction.
        goal_probability: f64,
        /// Minimum number of trials.
        trials: u64,
    },
    /// Favorable / total ratio.
    Probability {
        /// Favorable outcomes.
        favorable: i64,
        /// Total outcomes.
        total: i64,
        /// Resulting probability.
        probability: f64,
    },
    /// Monte Carlo run.
    Simulation {
        /// Per-trial probability as a fraction.
        probability: f64,
        /// Number of trials.
        trials: u64,
        /// Successful trials.
        successes: u64,
        /// Seed used.
        seed: u64,
        /// Estimated chance of at least one success in `trials` trials.
        at_least_one_estimate: f64,
        /// Standard error of that estimate.
        at_least_one_std_error: f64,
        /// Closed-form chance of at least one success.
        at_least_one_exact: f64,
    },
}

/// Print version information.
pub fn print_version() {
    println!("{}", version_line());
}

/// Version string, with the git hash when the build captured one.
#[must_use]
pub fn version_line() -> String {
    match option_env!("GIT_HASH") {
        Some(hash) if !hash.is_empty() => {
            format!("trialodds {} ({hash})", env!("CARGO_PKG_VERSION"))
        }
        _ => format!("trialodds {}", env!("CARGO_PKG_VERSION")),
    }
}

/// Print help message.
pub fn print_help() {
    println!(
        r"trialodds - Repeated-trial probability calculator

USAGE:
    trialodds <COMMAND> [OPTIONS]

COMMANDS:
    at-least-one <target%> <trials>
                                Chance of at least one success

    trials-needed <target%> <quantity> <goal%>
                                Trials needed to get <quantity> successes
                                with at least <goal%> probability
        --max-trials <N>        Search bound for quantity > 1 (default: 1000)
        --strict                Fail instead of returning the bound

    probability <favorable> <total>
                                Ratio of favorable to total outcomes

    simulate <probability%> <trials>
                                Monte Carlo run compared with the closed form
        --seed <N>              RNG seed (default: 42)
        --samples <N>           Experiments for the estimate (default: 10000)

    help                        Show this help message
    version                     Show version information

GLOBAL OPTIONS:
    --config <file.yaml>        Load settings from a YAML file
    --json                      Print results as JSON
    -v, --verbose               Debug logging on stderr

EXAMPLES:
    trialodds at-least-one 10 10
    trialodds trials-needed 1 1 50
    trialodds trials-needed 10 3 80 --max-trials 5000
    trialodds simulate 3 100 --seed 7
"
    );
}

/// Render a report as human-readable text.
#[must_use]
pub fn render_text(report: &Report, decimals: u32) -> String {
    match report {
        Report::AtLeastOne {
            target_probability,
            trials,
            probability,
        } => format!(
            "{}\n(chance of at least one {} outcome in {trials} trials)",
            format_percent(*probability, decimals),
            format_percent(*target_probability, decimals),
        ),
        Report::TrialsNeeded {
            target_probability,
            desired_quantity,
            goal_probability,
            trials,
        } => format!(
            "{trials} trials\n(needed to get {desired_quantity} of a {} outcome with {} probability)",
            format_percent(*target_probability, decimals),
            format_percent(*goal_probability, decimals),
        ),
        Report::Probability {
            favorable,
            total,
            probability,
        } => format!(
            "{}\n({favorable} of {total} outcomes)",
            format_percent(*probability, decimals)
        ),
        Report::Simulation {
            probability,
            trials,
            successes,
            seed,
            at_least_one_estimate,
            at_least_one_std_error,
            at_least_one_exact,
        } => format!(
            "Seed: {seed}\n\
             Successes: {successes} / {trials} (rate {}, expected {})\n\
             At least one success: {} ± {} simulated, {} exact",
            format_percent(*successes as f64 / *trials as f64, decimals),
            format_percent(*probability, decimals),
            format_percent(*at_least_one_estimate, decimals),
            format_percent(*at_least_one_std_error, decimals),
            format_percent(*at_least_one_exact, decimals),
        ),
    }
}

/// Render a report as a JSON object.
///
/// # Errors
///
/// Returns the serializer error; only non-string map keys can cause one,
/// which `Report` does not have.
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Render an error message as a JSON object.
#[must_use]
pub fn render_json_error(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Print a report in the requested format.
pub fn print_report(report: &Report, decimals: u32, json: bool) {
    if json {
        match render_json(report) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    } else {
        println!("{}", render_text(report, decimals));
    }
}

/// Print an error in the requested format.
pub fn print_error(message: &str, json: bool) {
    if json {
        println!("{}", render_json_error(message));
    } else {
        eprintln!("Error: {message}");
    }
}
