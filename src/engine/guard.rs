//! Input guards (Poka-Yoke).
//!
//! Every public calculation runs its arguments through these checks before
//! doing any arithmetic. Each guard maps one violated constraint to exactly
//! one [`ProbError`] variant. NaN never passes a range guard.

use crate::error::{ProbError, ProbResult};

/// Closed unit interval `[0, 1]`.
#[must_use]
pub fn in_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Half-open interval `(0, 1]`.
#[must_use]
pub fn in_goal_interval(value: f64) -> bool {
    value > 0.0 && value <= 1.0
}

/// Per-draw probability used by the simulator.
///
/// # Errors
///
/// [`ProbError::ProbabilityOutOfRange`] outside `[0, 1]`.
pub fn probability(value: f64) -> ProbResult<f64> {
    if in_unit_interval(value) {
        Ok(value)
    } else {
        Err(ProbError::ProbabilityOutOfRange { value })
    }
}

/// Per-trial target probability.
///
/// # Errors
///
/// [`ProbError::TargetProbabilityOutOfRange`] outside `[0, 1]`.
pub fn target_probability(value: f64) -> ProbResult<f64> {
    if in_unit_interval(value) {
        Ok(value)
    } else {
        Err(ProbError::TargetProbabilityOutOfRange { value })
    }
}

/// Cumulative goal probability.
///
/// # Errors
///
/// [`ProbError::GoalProbabilityOutOfRange`] outside `(0, 1]`.
pub fn goal_probability(value: f64) -> ProbResult<f64> {
    if in_goal_interval(value) {
        Ok(value)
    } else {
        Err(ProbError::GoalProbabilityOutOfRange { value })
    }
}

/// Number of trials.
///
/// # Errors
///
/// [`ProbError::InvalidTrialCount`] when zero.
pub const fn trials(count: u64) -> ProbResult<u64> {
    if count == 0 {
        Err(ProbError::InvalidTrialCount)
    } else {
        Ok(count)
    }
}

/// Number of successes wanted.
///
/// # Errors
///
/// [`ProbError::InvalidDesiredQuantity`] when zero.
pub const fn desired_quantity(count: u64) -> ProbResult<u64> {
    if count == 0 {
        Err(ProbError::InvalidDesiredQuantity)
    } else {
        Ok(count)
    }
}

/// Number of Monte Carlo samples.
///
/// # Errors
///
/// [`ProbError::InvalidSampleCount`] when zero.
pub const fn samples(count: u64) -> ProbResult<u64> {
    if count == 0 {
        Err(ProbError::InvalidSampleCount)
    } else {
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_interval_bounds() {
        assert!(in_unit_interval(0.0));
        assert!(in_unit_interval(1.0));
        assert!(!in_unit_interval(-f64::MIN_POSITIVE));
        assert!(!in_unit_interval(1.0 + f64::EPSILON));
        assert!(!in_unit_interval(f64::NAN));
        assert!(!in_unit_interval(f64::INFINITY));
    }

    #[test]
    fn test_goal_interval_excludes_zero() {
        assert!(!in_goal_interval(0.0));
        assert!(in_goal_interval(f64::MIN_POSITIVE));
        assert!(in_goal_interval(1.0));
        assert!(!in_goal_interval(f64::NAN));
    }

    #[test]
    fn test_probability_guards_pick_their_variant() {
        assert!(matches!(
            probability(1.5),
            Err(ProbError::ProbabilityOutOfRange { .. })
        ));
        assert!(matches!(
            target_probability(-0.1),
            Err(ProbError::TargetProbabilityOutOfRange { .. })
        ));
        assert!(matches!(
            goal_probability(0.0),
            Err(ProbError::GoalProbabilityOutOfRange { .. })
        ));
        assert_eq!(target_probability(0.25).ok(), Some(0.25));
    }

    #[test]
    fn test_count_guards() {
        assert!(matches!(trials(0), Err(ProbError::InvalidTrialCount)));
        assert!(matches!(
            desired_quantity(0),
            Err(ProbError::InvalidDesiredQuantity)
        ));
        assert!(matches!(samples(0), Err(ProbError::InvalidSampleCount)));
        assert_eq!(trials(3).ok(), Some(3));
    }
}
