//! Probability engine.
//!
//! Bundles a validated [`CalcConfig`] with the pieces it configures:
//! - Deterministic RNG (PCG seeded from the config)
//! - Trial solver with the configured search bound and policy
//! - Percentage formatting at the configured precision
//!
//! The free functions in [`crate::domains`] remain usable on their own; the
//! engine is what a front end holds on to.

pub mod guard;
pub mod rng;

use validator::Validate;

pub use rng::{ScriptedSource, SimRng, UniformSource};

use crate::config::CalcConfig;
use crate::domains::probability::{self, TrialSolver};
use crate::domains::simulation::{self, MonteCarloResult};
use crate::error::ProbResult;
use crate::input::format_percent;

/// Configured calculator front end.
#[derive(Debug, Clone)]
pub struct ProbabilityEngine {
    /// Trial solver built from `config.search`.
    solver: TrialSolver,
    /// Random number generator seeded from `config.simulation.seed`.
    rng: SimRng,
    /// Configuration the engine was built from.
    config: CalcConfig,
}

impl ProbabilityEngine {
    /// Create a new engine from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if configuration validation fails.
    pub fn new(config: CalcConfig) -> ProbResult<Self> {
        config.validate()?;
        Ok(Self {
            solver: TrialSolver::new(config.search.clone()),
            rng: SimRng::new(config.simulation.seed),
            config,
        })
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Get the trial solver.
    #[must_use]
    pub const fn solver(&self) -> &TrialSolver {
        &self.solver
    }

    /// Get mutable reference to RNG.
    #[must_use]
    pub fn rng_mut(&mut self) -> &mut SimRng {
        &mut self.rng
    }

    /// See [`probability::calculate_probability`].
    ///
    /// # Errors
    ///
    /// Propagates the outcome-count validation errors.
    pub fn probability(&self, favorable: i64, total: i64) -> ProbResult<f64> {
        probability::calculate_probability(favorable, total)
    }

    /// See [`probability::at_least_one_success`].
    ///
    /// # Errors
    ///
    /// Propagates target-probability and trial-count validation errors.
    pub fn at_least_one(&self, target_probability: f64, trials: u64) -> ProbResult<f64> {
        probability::at_least_one_success(target_probability, trials)
    }

    /// Solve for trials with the configured bound and policy.
    ///
    /// # Errors
    ///
    /// See [`TrialSolver::solve`].
    pub fn trials_needed(
        &self,
        target_probability: f64,
        desired_quantity: u64,
        goal_probability: f64,
    ) -> ProbResult<u64> {
        self.solver
            .solve(target_probability, desired_quantity, goal_probability)
    }

    /// Count successes over `trials` draws from the engine's RNG.
    ///
    /// # Errors
    ///
    /// See [`simulation::run_simulations`].
    pub fn simulate(&mut self, probability: f64, trials: u64) -> ProbResult<u64> {
        simulation::run_simulations(probability, trials, &mut self.rng)
    }

    /// Monte Carlo estimate of at-least-one success using the configured
    /// sample count.
    ///
    /// # Errors
    ///
    /// See [`simulation::estimate_at_least_one`].
    pub fn estimate_at_least_one(
        &mut self,
        target_probability: f64,
        trials: u64,
    ) -> ProbResult<MonteCarloResult> {
        simulation::estimate_at_least_one(
            target_probability,
            trials,
            self.config.simulation.samples,
            &mut self.rng,
        )
    }

    /// Render a probability as a percentage at the configured precision.
    #[must_use]
    pub fn format_probability(&self, probability: f64) -> String {
        format_percent(probability, self.config.display.decimals)
    }
}
