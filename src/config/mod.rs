//! Configuration system with YAML schema and validation.
//!
//! Implements Poka-Yoke (mistake-proofing) through:
//! - Type-safe configuration structs
//! - `deny_unknown_fields` so typos fail loudly
//! - Range validation via `validator`

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::ProbResult;

/// Default upper bound for the multi-success trial search.
pub const DEFAULT_MAX_TRIALS: u64 = 1000;

/// Largest search bound accepted from configuration.
pub const MAX_SEARCH_BOUND: u64 = 100_000;

/// Top-level calculator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CalcConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Trial-count search settings.
    #[validate(nested)]
    #[serde(default)]
    pub search: SearchConfig,

    /// Monte Carlo settings.
    #[validate(nested)]
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Output formatting.
    #[validate(nested)]
    #[serde(default)]
    pub display: DisplayConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl CalcConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> ProbResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> ProbResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> CalcConfigBuilder {
        CalcConfigBuilder::default()
    }
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            search: SearchConfig::default(),
            simulation: SimulationConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct CalcConfigBuilder {
    max_trials: Option<u64>,
    on_unreachable: Option<UnreachablePolicy>,
    seed: Option<u64>,
    samples: Option<u64>,
    decimals: Option<u32>,
}

impl CalcConfigBuilder {
    /// Set the search upper bound.
    #[must_use]
    pub const fn max_trials(mut self, max_trials: u64) -> Self {
        self.max_trials = Some(max_trials);
        self
    }

    /// Set what happens when the goal cannot be reached within the bound.
    #[must_use]
    pub const fn on_unreachable(mut self, policy: UnreachablePolicy) -> Self {
        self.on_unreachable = Some(policy);
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the Monte Carlo sample count.
    #[must_use]
    pub const fn samples(mut self, samples: u64) -> Self {
        self.samples = Some(samples);
        self
    }

    /// Set the number of decimal places for percentages.
    #[must_use]
    pub const fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any value is out of range.
    pub fn build(self) -> ProbResult<CalcConfig> {
        let mut config = CalcConfig::default();

        if let Some(max_trials) = self.max_trials {
            config.search.max_trials = max_trials;
        }
        if let Some(policy) = self.on_unreachable {
            config.search.on_unreachable = policy;
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = seed;
        }
        if let Some(samples) = self.samples {
            config.simulation.samples = samples;
        }
        if let Some(decimals) = self.decimals {
            config.display.decimals = decimals;
        }

        config.validate()?;
        Ok(config)
    }
}

/// What the trial search returns when no count within the bound meets the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnreachablePolicy {
    /// Return the bound itself.
    #[default]
    Saturate,
    /// Return [`ProbError::GoalUnreachable`](crate::error::ProbError::GoalUnreachable).
    Error,
}

/// Trial-count search settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchConfig {
    /// Upper bound of the binary search over trial counts.
    #[validate(range(min = 1, max = 100_000))]
    #[serde(default = "default_max_trials")]
    pub max_trials: u64,
    /// Behaviour when the goal is out of reach.
    #[serde(default)]
    pub on_unreachable: UnreachablePolicy,
}

const fn default_max_trials() -> u64 {
    DEFAULT_MAX_TRIALS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_trials: DEFAULT_MAX_TRIALS,
            on_unreachable: UnreachablePolicy::default(),
        }
    }
}

/// Monte Carlo settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimulationConfig {
    /// Master seed for the simulation RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Experiments per estimate.
    #[validate(range(min = 1))]
    #[serde(default = "default_samples")]
    pub samples: u64,
}

const fn default_seed() -> u64 {
    42
}

const fn default_samples() -> u64 {
    10_000
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            samples: default_samples(),
        }
    }
}

/// Output formatting.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DisplayConfig {
    /// Decimal places when rendering a probability as a percentage.
    #[validate(range(max = 6))]
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

const fn default_decimals() -> u32 {
    1
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
        }
    }
}
