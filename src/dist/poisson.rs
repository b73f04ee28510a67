//! Poisson distribution
//!
//! Event counts with rate λ, sampled with Knuth's multiplication
//! algorithm: multiply fresh uniforms into a running product until it
//! drops below e^(−λ). The expected number of iterations is λ + 1, so
//! large rates are slow; the loop is left uncapped because no fixed
//! bound is correct for every λ.

use super::Variate;
use crate::source::UniformSource;

/// Poisson distribution with rate λ > 0
pub struct Poisson {
    lambda: f64,
    source: UniformSource,
}

impl Poisson {
    /// Create a new Poisson sampler with a random seed
    ///
    /// # Panics
    ///
    /// Panics if lambda <= 0.
    pub fn new(lambda: f64) -> Self {
        assert!(lambda > 0.0, "Rate lambda must be positive");

        Self {
            lambda,
            source: UniformSource::new(),
        }
    }

    /// Create a new Poisson sampler with a specific seed
    pub fn with_seed(lambda: f64, seed: u64) -> Self {
        assert!(lambda > 0.0, "Rate lambda must be positive");

        Self {
            lambda,
            source: UniformSource::with_seed(seed),
        }
    }
}

impl Variate for Poisson {
    type Output = u64;

    fn sample(&mut self) -> u64 {
        let l = (-self.lambda).exp();
        let mut k = 0u64;
        let mut p = 1.0;

        loop {
            k += 1;
            p *= self.source.float();
            if p <= l {
                break;
            }
        }

        k - 1
    }
}
