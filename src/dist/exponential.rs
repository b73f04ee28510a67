//! Exponential distribution
//!
//! Memoryless waiting-time distribution with rate parameter lambda.
//! Sampled by inversion: −ln(u)/λ for uniform u.
//!
//! # Example
//!
//! ```
//! use variate::dist::{Exponential, Variate};
//!
//! let mut e = Exponential::with_seed(2.0, 42);
//! assert!(e.sample() >= 0.0);
//! ```

use super::Variate;
use crate::source::UniformSource;

/// Exponential distribution with rate λ > 0
pub struct Exponential {
    lambda: f64,
    source: UniformSource,
}

impl Exponential {
    /// Create a new exponential sampler with a random seed
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

    /// Create a new exponential sampler with a specific seed
    pub fn with_seed(lambda: f64, seed: u64) -> Self {
        assert!(lambda > 0.0, "Rate lambda must be positive");

        Self {
            lambda,
            source: UniformSource::with_seed(seed),
        }
    }
}

impl Variate for Exponential {
    type Output = f64;

    #[inline]
    fn sample(&mut self) -> f64 {
        -self.source.float().ln() / self.lambda
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_nonnegative() {
        let mut e = Exponential::new(1.5);

        for _ in 0..1000 {
            assert!(e.sample() >= 0.0);
        }
    }

    #[test]
    fn test_exponential_seeded() {
        let mut e1 = Exponential::with_seed(2.0, 12345);
        let mut e2 = Exponential::with_seed(2.0, 12345);

        // Same seed should produce same sequence
        for _ in 0..10 {
            assert_eq!(e1.sample().to_bits(), e2.sample().to_bits());
        }
    }

    #[test]
    fn test_exponential_mean() {
        let mut e = Exponential::with_seed(4.0, 42);
        let xs = e.sample_many(100000);
        let mean: f64 = xs.iter().sum::<f64>() / xs.len() as f64;

        // Mean of Exp(4) is 0.25
        assert!((mean - 0.25).abs() < 0.01, "mean {} too far from 0.25", mean);
    }

    #[test]
    #[should_panic(expected = "Rate lambda must be positive")]
    fn test_exponential_invalid_lambda() {
        let _ = Exponential::new(0.0);
    }

    #[test]
    #[should_panic(expected = "Rate lambda must be positive")]
    fn test_exponential_negative_lambda() {
        let _ = Exponential::new(-1.0);
    }
}
