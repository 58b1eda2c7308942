//! Error types for trialodds.
//!
//! Every public operation returns `Result<T, ProbError>` instead of panicking.
//! Input errors carry one fixed message per violated constraint so callers can
//! display them verbatim.

use thiserror::Error;

/// Result type alias for trialodds operations.
pub type ProbResult<T> = Result<T, ProbError>;

/// Unified error type for all trialodds operations.
#[derive(Debug, Error)]
pub enum ProbError {
    // ===== Input Validation =====
    /// Total outcomes was zero or negative.
    #[error("Total outcomes must be a positive number")]
    InvalidTotalOutcomes {
        /// Rejected total.
        total: i64,
    },

    /// Favorable outcomes was negative.
    #[error("Favorable outcomes cannot be negative")]
    NegativeFavorableOutcomes {
        /// Rejected favorable count.
        favorable: i64,
    },

    /// Favorable outcomes exceeded the total.
    #[error("Favorable outcomes cannot exceed total outcomes")]
    FavorableExceedsTotal {
        /// Favorable count.
        favorable: i64,
        /// Total count.
        total: i64,
    },

    /// Outcome count given as text that is not a whole number.
    #[error("{field} must be a whole number")]
    NotAWholeNumber {
        /// Which count was rejected.
        field: &'static str,
        /// Text as given.
        text: String,
    },

    /// Per-draw probability outside [0, 1].
    #[error("Probability must be between 0 and 1")]
    ProbabilityOutOfRange {
        /// Rejected probability.
        value: f64,
    },

    /// Trial count was not a positive integer.
    #[error("Number of trials must be a positive integer")]
    InvalidTrialCount,

    /// Target probability outside [0, 1].
    #[error("Target probability must be between 0 and 1")]
    TargetProbabilityOutOfRange {
        /// Rejected target probability.
        value: f64,
    },

    /// Desired quantity was not a positive integer.
    #[error("Desired quantity must be a positive integer")]
    InvalidDesiredQuantity,

    /// Goal probability outside (0, 1].
    #[error("Goal probability must be between 0 and 1")]
    GoalProbabilityOutOfRange {
        /// Rejected goal probability.
        value: f64,
    },

    /// Monte Carlo sample count was zero.
    #[error("Number of samples must be a positive integer")]
    InvalidSampleCount,

    // ===== Search =====
    /// No trial count within the search bound reaches the goal.
    ///
    /// Only produced under [`UnreachablePolicy::Error`](crate::config::UnreachablePolicy).
    #[error("Goal probability not reachable within {max_trials} trials")]
    GoalUnreachable {
        /// Upper bound that was searched.
        max_trials: u64,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProbError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error came from rejecting caller-supplied numbers.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTotalOutcomes { .. }
                | Self::NegativeFavorableOutcomes { .. }
                | Self::FavorableExceedsTotal { .. }
                | Self::NotAWholeNumber { .. }
                | Self::ProbabilityOutOfRange { .. }
                | Self::InvalidTrialCount
                | Self::TargetProbabilityOutOfRange { .. }
                | Self::InvalidDesiredQuantity
                | Self::GoalProbabilityOutOfRange { .. }
                | Self::InvalidSampleCount
        )
    }
}
