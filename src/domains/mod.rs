//! Probability calculators.
//!
//! - Binomial: combinations, PMF and upper tail
//! - Probability: closed-form and searched answers for repeated trials
//! - Simulation: Bernoulli draws against an injected uniform source

pub mod binomial;
pub mod probability;
pub mod simulation;

pub use binomial::{combinations, pmf, upper_tail};
pub use probability::{at_least_one_success, calculate_probability, trials_needed, TrialSolver};
pub use simulation::{estimate_at_least_one, run_simulations, simulate_event, MonteCarloResult};
