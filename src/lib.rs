//! # trialodds
//!
//! Probability calculator for repeated independent trials.
//!
//! - Chance of at least one success in `n` trials
//! - Minimum trials for `k` successes at a goal probability
//! - Favorable / total outcome ratios
//! - Seeded Bernoulli simulation for cross-checking the closed forms
//!
//! ## Example
//!
//! ```rust
//! use trialodds::prelude::*;
//!
//! let p = at_least_one_success(0.1, 10).unwrap();
//! assert!((p - 0.651_321_559_9).abs() < 1e-9);
//!
//! assert_eq!(trials_needed(0.01, 1, 0.5).unwrap(), 69);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,
    clippy::imprecise_flops,
    clippy::missing_const_for_fn,
    clippy::manual_midpoint,
)]

pub mod cli;
pub mod config;
pub mod domains;
pub mod engine;
pub mod error;
pub mod input;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CalcConfig, CalcConfigBuilder, UnreachablePolicy};
    pub use crate::domains::{
        at_least_one_success, calculate_probability, estimate_at_least_one, run_simulations,
        simulate_event, trials_needed, MonteCarloResult, TrialSolver,
    };
    pub use crate::engine::{ProbabilityEngine, ScriptedSource, SimRng, UniformSource};
    pub use crate::error::{ProbError, ProbResult};
}

/// Re-export for public API
pub use error::{ProbError, ProbResult};
