//! Bernoulli trial simulation.
//!
//! Monte Carlo counterparts of the analytic calculators, used to check them
//! empirically. Every function draws from a caller-supplied
//! [`UniformSource`], so a scripted source makes results exact and a seeded
//! [`SimRng`](crate::engine::rng::SimRng) makes them reproducible.
//!
//! # Convergence
//!
//! By the Central Limit Theorem the estimate's standard error shrinks as
//! O(n^{-1/2}) in the number of samples.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::guard;
use crate::engine::rng::UniformSource;
use crate::error::ProbResult;

/// Result of a Monte Carlo estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonteCarloResult {
    /// Point estimate.
    pub estimate: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Number of samples used.
    pub samples: u64,
    /// 95% confidence interval (estimate ± 1.96 * `std_error`).
    pub confidence_interval: (f64, f64),
}

impl MonteCarloResult {
    /// Create a new Monte Carlo result.
    #[must_use]
    pub fn new(estimate: f64, std_error: f64, samples: u64) -> Self {
        let ci_half = 1.96 * std_error;
        Self {
            estimate,
            std_error,
            samples,
            confidence_interval: (estimate - ci_half, estimate + ci_half),
        }
    }

    /// Build from a success count, treating each sample as a Bernoulli outcome.
    #[must_use]
    pub fn from_successes(successes: u64, samples: u64) -> Self {
        let n = samples as f64;
        let estimate = successes as f64 / n;
        let std_error = (estimate * (1.0 - estimate) / n).sqrt();
        Self::new(estimate, std_error, samples)
    }

    /// Check if value is within confidence interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.confidence_interval.0 && value <= self.confidence_interval.1
    }

    /// Distance from `value` in standard errors.
    ///
    /// Zero when the estimate matches exactly, infinite when the standard
    /// error is zero and it does not.
    #[must_use]
    pub fn sigma_distance(&self, value: f64) -> f64 {
        let diff = (self.estimate - value).abs();
        if diff == 0.0 {
            0.0
        } else {
            diff / self.std_error
        }
    }
}

/// Simulate one trial: true iff a uniform draw `u` satisfies `u <= probability`.
///
/// With `probability == 1` the result is always true; with `0` it is true only
/// for the measure-zero draw `u == 0`.
///
/// # Errors
///
/// [`ProbError::ProbabilityOutOfRange`](crate::error::ProbError::ProbabilityOutOfRange)
/// outside `[0, 1]`. No value is drawn in that case.
pub fn simulate_event<R: UniformSource + ?Sized>(probability: f64, rng: &mut R) -> ProbResult<bool> {
    let p = guard::probability(probability)?;
    Ok(rng.next_f64() <= p)
}

/// Run `trials` simulated events and count the successes.
///
/// # Errors
///
/// [`ProbError::InvalidTrialCount`](crate::error::ProbError::InvalidTrialCount)
/// if `trials == 0`, then the errors of [`simulate_event`].
///
/// # Example
///
/// ```rust
/// use trialodds::domains::simulation::run_simulations;
/// use trialodds::engine::rng::ScriptedSource;
///
/// let mut source = ScriptedSource::new(vec![0.1, 0.6, 0.7, 0.2, 0.8]).unwrap();
/// assert_eq!(run_simulations(0.5, 5, &mut source).unwrap(), 2);
/// ```
pub fn run_simulations<R: UniformSource + ?Sized>(
    probability: f64,
    trials: u64,
    rng: &mut R,
) -> ProbResult<u64> {
    let n = guard::trials(trials)?;
    let p = guard::probability(probability)?;

    let mut successes = 0;
    for _ in 0..n {
        if simulate_event(p, rng)? {
            successes += 1;
        }
    }
    Ok(successes)
}

/// Estimate the chance of at least one success in `trials` trials.
///
/// Runs `samples` independent experiments of `trials` draws each; an
/// experiment counts as a hit once any draw succeeds, and its remaining draws
/// are skipped.
///
/// # Errors
///
/// In order: target probability outside `[0, 1]`, `trials == 0`,
/// `samples == 0`.
pub fn estimate_at_least_one<R: UniformSource + ?Sized>(
    target_probability: f64,
    trials: u64,
    samples: u64,
    rng: &mut R,
) -> ProbResult<MonteCarloResult> {
    let p = guard::target_probability(target_probability)?;
    let n = guard::trials(trials)?;
    let samples = guard::samples(samples)?;

    let mut hits = 0;
    for _ in 0..samples {
        if (0..n).any(|_| rng.next_f64() <= p) {
            hits += 1;
        }
    }

    let result = MonteCarloResult::from_successes(hits, samples);
    debug!(
        p,
        trials = n,
        samples,
        estimate = result.estimate,
        std_error = result.std_error,
        "at-least-one estimate"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::probability::at_least_one_success;
    use crate::engine::rng::{ScriptedSource, SimRng};
    use crate::error::ProbError;

    // ===== simulate_event =====

    #[test]
    fn test_simulate_event_scripted() {
        let mut source = ScriptedSource::new(vec![0.3, 0.7]).unwrap();
        assert!(simulate_event(0.5, &mut source).unwrap());
        assert!(!simulate_event(0.5, &mut source).unwrap());
    }

    #[test]
    fn test_simulate_event_boundary_draw_counts_as_success() {
        let mut source = ScriptedSource::constant(0.5).unwrap();
        assert!(simulate_event(0.5, &mut source).unwrap());
    }

    #[test]
    fn test_simulate_event_certain() {
        let mut rng = SimRng::new(42);
        assert!((0..1000).all(|_| simulate_event(1.0, &mut rng).unwrap()));
    }

    #[test]
    fn test_simulate_event_impossible() {
        let mut rng = SimRng::new(42);
        assert!((0..1000).all(|_| !simulate_event(0.0, &mut rng).unwrap()));
    }

    #[test]
    fn test_simulate_event_zero_draw_edge() {
        let mut source = ScriptedSource::constant(0.0).unwrap();
        assert!(simulate_event(0.0, &mut source).unwrap());
    }

    #[test]
    fn test_simulate_event_rejects_bad_probability() {
        let mut source = ScriptedSource::constant(0.5).unwrap();
        assert!(matches!(
            simulate_event(-0.1, &mut source),
            Err(ProbError::ProbabilityOutOfRange { .. })
        ));
        assert!(matches!(
            simulate_event(1.1, &mut source),
            Err(ProbError::ProbabilityOutOfRange { .. })
        ));
        assert_eq!(source.draws(), 0);
    }

    // ===== run_simulations =====

    #[test]
    fn test_run_simulations_scripted_pattern() {
        let mut source = ScriptedSource::new(vec![0.1, 0.6, 0.7, 0.2, 0.8]).unwrap();
        assert_eq!(run_simulations(0.5, 5, &mut source).unwrap(), 2);
        assert_eq!(source.draws(), 5);
    }

    #[test]
    fn test_run_simulations_draws_once_per_trial() {
        let mut source = ScriptedSource::constant(0.0).unwrap();
        assert_eq!(run_simulations(0.5, 100, &mut source).unwrap(), 100);
        assert_eq!(source.draws(), 100);
    }

    #[test]
    fn test_run_simulations_errors() {
        let mut source = ScriptedSource::constant(0.5).unwrap();
        assert!(matches!(
            run_simulations(0.5, 0, &mut source),
            Err(ProbError::InvalidTrialCount)
        ));
        assert!(matches!(
            run_simulations(1.5, 10, &mut source),
            Err(ProbError::ProbabilityOutOfRange { .. })
        ));
        // Trial count is checked first.
        assert!(matches!(
            run_simulations(1.5, 0, &mut source),
            Err(ProbError::InvalidTrialCount)
        ));
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn test_run_simulations_reproducible() {
        let a = run_simulations(0.3, 10_000, &mut SimRng::new(9)).unwrap();
        let b = run_simulations(0.3, 10_000, &mut SimRng::new(9)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_simulations_rate_near_probability() {
        let mut rng = SimRng::new(42);
        let n = 100_000;
        let successes = run_simulations(0.3, n, &mut rng).unwrap();
        let result = MonteCarloResult::from_successes(successes, n);
        assert!(
            result.sigma_distance(0.3) < 5.0,
            "rate {} too far from 0.3",
            result.estimate
        );
    }

    // ===== estimate_at_least_one =====

    #[test]
    fn test_estimate_matches_analytic() {
        let mut rng = SimRng::new(7);
        let result = estimate_at_least_one(0.1, 10, 50_000, &mut rng).unwrap();
        let analytic = at_least_one_success(0.1, 10).unwrap();
        assert!(
            result.sigma_distance(analytic) < 5.0,
            "estimate {} vs analytic {}",
            result.estimate,
            analytic
        );
    }

    #[test]
    fn test_estimate_degenerate_probabilities() {
        let mut rng = SimRng::new(1);
        let sure = estimate_at_least_one(1.0, 3, 100, &mut rng).unwrap();
        assert_eq!(sure.estimate, 1.0);
        assert_eq!(sure.std_error, 0.0);

        let never = estimate_at_least_one(0.0, 3, 100, &mut rng).unwrap();
        assert_eq!(never.estimate, 0.0);
        assert!(never.contains(0.0));
    }

    #[test]
    fn test_estimate_stops_experiment_at_first_hit() {
        // First experiment hits on draw one; second misses all three draws.
        let mut source = ScriptedSource::new(vec![0.1, 0.9, 0.9, 0.9]).unwrap();
        let result = estimate_at_least_one(0.5, 3, 2, &mut source).unwrap();
        assert_eq!(result.estimate, 0.5);
        assert_eq!(source.draws(), 4);
    }

    #[test]
    fn test_estimate_errors() {
        let mut rng = SimRng::new(1);
        assert!(matches!(
            estimate_at_least_one(1.2, 3, 10, &mut rng),
            Err(ProbError::TargetProbabilityOutOfRange { .. })
        ));
        assert!(matches!(
            estimate_at_least_one(0.2, 0, 10, &mut rng),
            Err(ProbError::InvalidTrialCount)
        ));
        assert!(matches!(
            estimate_at_least_one(0.2, 3, 0, &mut rng),
            Err(ProbError::InvalidSampleCount)
        ));
    }

    // ===== MonteCarloResult =====

    #[test]
    fn test_mc_result_confidence_interval() {
        let result = MonteCarloResult::new(0.5, 0.01, 1000);
        assert!(result.contains(0.5));
        assert!(result.contains(0.515));
        assert!(!result.contains(0.53));
        assert!((result.confidence_interval.0 - 0.4804).abs() < 1e-12);
    }

    #[test]
    fn test_mc_result_from_successes() {
        let result = MonteCarloResult::from_successes(25, 100);
        assert_eq!(result.estimate, 0.25);
        assert!((result.std_error - (0.25_f64 * 0.75 / 100.0).sqrt()).abs() < 1e-15);
        assert_eq!(result.samples, 100);
    }

    #[test]
    fn test_sigma_distance() {
        let exact = MonteCarloResult::new(1.0, 0.0, 10);
        assert_eq!(exact.sigma_distance(1.0), 0.0);
        assert!(exact.sigma_distance(0.9).is_infinite());

        let noisy = MonteCarloResult::new(0.5, 0.1, 10);
        assert!((noisy.sigma_distance(0.7) - 2.0).abs() < 1e-12);
    }
}
