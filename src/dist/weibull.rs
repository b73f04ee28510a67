//! Weibull distribution
//!
//! Stretched-exponential lifetime distribution with scale λ and shape k.
//! Sampled by inversion: λ·(−ln u)^(1/k).
//!
//! k = 1 reduces to the exponential distribution with rate 1/λ; k > 1
//! models wear-out failures, k < 1 infant mortality.

use super::Variate;
use crate::source::UniformSource;

/// Weibull distribution with scale λ > 0 and shape k > 0
pub struct Weibull {
    lambda: f64,
    k: f64,
    source: UniformSource,
}

impl Weibull {
    /// Create a new Weibull sampler with a random seed
    ///
    /// # Panics
    ///
    /// Panics if lambda <= 0 or k <= 0.
    pub fn new(lambda: f64, k: f64) -> Self {
        assert!(lambda > 0.0, "Scale lambda must be positive");
        assert!(k > 0.0, "Shape k must be positive");

        Self {
            lambda,
            k,
            source: UniformSource::new(),
        }
    }

    /// Create a new Weibull sampler with a specific seed
    pub fn with_seed(lambda: f64, k: f64, seed: u64) -> Self {
        assert!(lambda > 0.0, "Scale lambda must be positive");
        assert!(k > 0.0, "Shape k must be positive");

        Self {
            lambda,
            k,
            source: UniformSource::with_seed(seed),
        }
    }
}

impl Variate for Weibull {
    type Output = f64;

    #[inline]
    fn sample(&mut self) -> f64 {
        self.lambda * (-self.source.float().ln()).powf(1.0 / self.k)
    }
}
