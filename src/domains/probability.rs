//! Analytic probability calculators.
//!
//! - [`calculate_probability`]: favorable / total ratio
//! - [`at_least_one_success`]: `1 - (1 - p)^n`
//! - [`trials_needed`]: smallest `n` whose chance of `k` or more successes
//!   reaches a goal
//!
//! All functions are pure. Arguments are checked in a fixed order and the
//! first violated constraint is reported.

use tracing::{debug, warn};

use super::binomial;
use crate::config::{SearchConfig, UnreachablePolicy};
use crate::engine::guard;
use crate::error::{ProbError, ProbResult};

/// Probability of an event with `favorable` of `total` equally likely outcomes.
///
/// # Errors
///
/// In order: [`ProbError::InvalidTotalOutcomes`] if `total <= 0`,
/// [`ProbError::NegativeFavorableOutcomes`] if `favorable < 0`,
/// [`ProbError::FavorableExceedsTotal`] if `favorable > total`.
///
/// # Example
///
/// ```rust
/// use trialodds::domains::probability::calculate_probability;
///
/// assert_eq!(calculate_probability(1, 2).unwrap(), 0.5);
/// ```
pub fn calculate_probability(favorable: i64, total: i64) -> ProbResult<f64> {
    if total <= 0 {
        return Err(ProbError::InvalidTotalOutcomes { total });
    }
    if favorable < 0 {
        return Err(ProbError::NegativeFavorableOutcomes { favorable });
    }
    if favorable > total {
        return Err(ProbError::FavorableExceedsTotal { favorable, total });
    }
    Ok(favorable as f64 / total as f64)
}

/// Probability of at least one success in `trials` independent trials.
///
/// Computes `1 - (1 - target_probability)^trials`, the complement of every
/// trial failing.
///
/// # Errors
///
/// [`ProbError::TargetProbabilityOutOfRange`] outside `[0, 1]`, then
/// [`ProbError::InvalidTrialCount`] if `trials == 0`.
///
/// # Example
///
/// ```rust
/// use trialodds::domains::probability::at_least_one_success;
///
/// let p = at_least_one_success(0.5, 2).unwrap();
/// assert!((p - 0.75).abs() < 1e-12);
/// ```
pub fn at_least_one_success(target_probability: f64, trials: u64) -> ProbResult<f64> {
    let p = guard::target_probability(target_probability)?;
    let n = guard::trials(trials)?;
    Ok(1.0 - (1.0 - p).powf(n as f64))
}

/// Steps the one-success estimate may move to absorb rounding.
const MAX_SETTLE_STEPS: u32 = 4;

/// Minimum trials to obtain `desired_quantity` successes with probability at
/// least `goal_probability`.
///
/// Uses the default search bound of 1000 and returns the bound when the goal
/// cannot be reached within it. See [`TrialSolver`] to change either.
///
/// # Errors
///
/// In order: [`ProbError::TargetProbabilityOutOfRange`],
/// [`ProbError::InvalidDesiredQuantity`], [`ProbError::GoalProbabilityOutOfRange`].
///
/// # Example
///
/// ```rust
/// use trialodds::domains::probability::trials_needed;
///
/// assert_eq!(trials_needed(0.25, 1, 0.9).unwrap(), 9);
/// ```
pub fn trials_needed(
    target_probability: f64,
    desired_quantity: u64,
    goal_probability: f64,
) -> ProbResult<u64> {
    TrialSolver::default().solve(target_probability, desired_quantity, goal_probability)
}

/// Inverse solver for the number of trials needed to reach a goal.
///
/// - One success wanted: closed form `ceil(ln(1 - g) / ln(1 - p))`.
/// - More than one: binary search for the smallest `n` in
///   `[k, max(k, max_trials)]` with `P(X >= k) >= g`. The tail is
///   non-decreasing in `n`, so the search is valid.
#[derive(Debug, Clone, Default)]
pub struct TrialSolver {
    config: SearchConfig,
}

impl TrialSolver {
    /// Create a solver with the given search settings.
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Search settings in use.
    #[must_use]
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Solve for the minimum number of trials.
    ///
    /// # Errors
    ///
    /// The validation errors listed on [`trials_needed`], plus
    /// [`ProbError::GoalUnreachable`] under [`UnreachablePolicy::Error`].
    pub fn solve(
        &self,
        target_probability: f64,
        desired_quantity: u64,
        goal_probability: f64,
    ) -> ProbResult<u64> {
        let p = guard::target_probability(target_probability)?;
        let k = guard::desired_quantity(desired_quantity)?;
        let g = guard::goal_probability(goal_probability)?;

        if k == 1 {
            self.solve_single(p, g)
        } else {
            self.solve_multiple(p, k, g)
        }
    }

    fn solve_single(&self, p: f64, g: f64) -> ProbResult<u64> {
        if p >= 1.0 {
            return Ok(1);
        }
        // ln_1p keeps p below f64::EPSILON away from a zero denominator
        let ratio = (-g).ln_1p() / (-p).ln_1p();
        if !ratio.is_finite() {
            debug!(p, g, "closed form has no finite solution");
            return self.unreachable(self.config.max_trials);
        }
        let estimate = (ratio.ceil() as u64).max(1);
        let trials = Self::settle_single(p, g, estimate);
        debug!(p, g, estimate, trials, "closed-form solve");
        Ok(trials)
    }

    /// Move the closed-form estimate onto the smallest `t` whose evaluated
    /// chance `1 - (1 - p)^t` reaches `g`.
    ///
    /// The quotient can round to either side of an exact tie. Once `1 - p`
    /// rounds to 1 the evaluated chance is flat, so the estimate stands.
    fn settle_single(p: f64, g: f64, estimate: u64) -> u64 {
        if 1.0 - p >= 1.0 {
            return estimate;
        }
        let reached = |t: u64| 1.0 - (1.0 - p).powf(t as f64) >= g;

        let mut trials = estimate;
        for _ in 0..MAX_SETTLE_STEPS {
            if trials > 1 && reached(trials - 1) {
                trials -= 1;
            } else if !reached(trials) {
                trials += 1;
            } else {
                break;
            }
        }
        trials
    }

    fn solve_multiple(&self, p: f64, k: u64, g: f64) -> ProbResult<u64> {
        let upper = self.config.max_trials.max(k);
        let mut low = k;
        let mut high = upper;

        while low < high {
            let mid = low + (high - low) / 2;
            let tail = binomial::upper_tail(mid, k, p);
            debug!(mid, tail, "search step");
            if tail >= g {
                high = mid;
            } else {
                low = mid + 1;
            }
        }

        if low == upper && binomial::upper_tail(upper, k, p) < g {
            return self.unreachable(upper);
        }
        Ok(low)
    }

    fn unreachable(&self, bound: u64) -> ProbResult<u64> {
        match self.config.on_unreachable {
            UnreachablePolicy::Saturate => {
                warn!(bound, "goal not reachable within bound, returning bound");
                Ok(bound)
            }
            UnreachablePolicy::Error => Err(ProbError::GoalUnreachable { max_trials: bound }),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification: the closed form matches its definition.
        #[test]
        fn prop_at_least_one_formula(p in 0.0f64..=1.0, n in 1u64..5000) {
            let got = at_least_one_success(p, n).unwrap();
            let expected = 1.0 - (1.0 - p).powf(n as f64);
            prop_assert_eq!(got.to_bits(), expected.to_bits());
            prop_assert!((0.0..=1.0).contains(&got));
        }

        /// Falsification: more trials never lowers the chance.
        #[test]
        fn prop_at_least_one_monotone_in_n(p in 0.0f64..=1.0, n in 1u64..5000) {
            let a = at_least_one_success(p, n).unwrap();
            let b = at_least_one_success(p, n + 1).unwrap();
            prop_assert!(b >= a);
        }

        /// Falsification: a likelier event never lowers the chance.
        #[test]
        fn prop_at_least_one_monotone_in_p(p in 0.0f64..0.99, dp in 0.0f64..0.01, n in 1u64..5000) {
            let a = at_least_one_success(p, n).unwrap();
            let b = at_least_one_success(p + dp, n).unwrap();
            prop_assert!(b >= a);
        }

        /// Falsification: multi-success answers are minimal within the bound.
        #[test]
        fn prop_trials_needed_minimal(p in 0.05f64..0.95, k in 2u64..8, g in 0.05f64..0.99) {
            let n = trials_needed(p, k, g).unwrap();
            prop_assert!(n >= k);
            if n < 1000 {
                prop_assert!(binomial::upper_tail(n, k, p) >= g);
            }
            if n > k {
                prop_assert!(binomial::upper_tail(n - 1, k, p) < g);
            }
        }
    }
}
