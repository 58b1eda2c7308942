//! Uniform random sources.
//!
//! Simulation code never reaches for a process-wide generator. It takes a
//! `&mut impl UniformSource`, so tests can substitute a scripted sequence and
//! seeded runs stay bitwise-reproducible.

use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::error::{ProbError, ProbResult};

/// Capability providing uniform draws in `[0, 1)`.
pub trait UniformSource {
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Deterministic, reproducible random number generator.
///
/// Based on PCG (Permuted Congruential Generator): the same master seed
/// yields the same sequence on every run and platform.
#[derive(Debug, Clone)]
pub struct SimRng {
    /// Master seed for reproducibility.
    master_seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl SimRng {
    /// Create a new RNG with the given master seed.
    #[must_use]
    pub fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            rng: Pcg64::seed_from_u64(master_seed),
        }
    }

    /// Get the master seed.
    #[must_use]
    pub const fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    /// Generate n random f64 samples in [0, 1).
    #[must_use]
    pub fn sample_n(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.gen_f64()).collect()
    }
}

impl UniformSource for SimRng {
    fn next_f64(&mut self) -> f64 {
        self.gen_f64()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// # Example
///
/// ```rust
/// use trialodds::engine::rng::{ScriptedSource, UniformSource};
///
/// let mut source = ScriptedSource::new(vec![0.1, 0.6]).unwrap();
/// assert_eq!(source.next_f64(), 0.1);
/// assert_eq!(source.next_f64(), 0.6);
/// assert_eq!(source.next_f64(), 0.1);
/// assert_eq!(source.draws(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    draws: usize,
}

impl ScriptedSource {
    /// Create a source from the values it should return, in order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `values` is empty or any value lies
    /// outside `[0, 1)`.
    pub fn new(values: Vec<f64>) -> ProbResult<Self> {
        if values.is_empty() {
            return Err(ProbError::config("scripted source needs at least one value"));
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(ProbError::config(format!(
                "scripted value {bad} is outside [0, 1)"
            )));
        }
        Ok(Self { values, draws: 0 })
    }

    /// A source that always returns `value`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `value` lies outside `[0, 1)`.
    pub fn constant(value: f64) -> ProbResult<Self> {
        Self::new(vec![value])
    }

    /// Number of values handed out so far.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }
}

impl UniformSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.draws % self.values.len()];
        self.draws += 1;
        value
    }
}
