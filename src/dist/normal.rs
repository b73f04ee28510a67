//! Normal and log-normal distributions
//!
//! Gaussian sampling via the Box--Muller transform. Each transform consumes
//! two uniform draws and yields two independent standard normals; the spare
//! deviate is cached for the next call. The log-normal sampler exponentiates
//! a normal draw with the same parameters.
//!
//! # Example
//!
//! ```
//! use variate::dist::{Normal, Variate};
//!
//! let mut n = Normal::with_seed(0.0, 1.0, 42);
//! let z = n.sample();
//! assert!(z.is_finite());
//! ```

use super::Variate;
use crate::source::UniformSource;
use std::f64::consts::PI;

/// Normal distribution with mean μ and standard deviation σ > 0
pub struct Normal {
    mu: f64,
    sigma: f64,
    source: UniformSource,

    /// Cached spare value from the Box--Muller transform
    spare: Option<f64>,
}

impl Normal {
    /// Create a new normal sampler with a random seed
    ///
    /// # Panics
    ///
    /// Panics if sigma <= 0.
    pub fn new(mu: f64, sigma: f64) -> Self {
        assert!(sigma > 0.0, "Standard deviation must be positive");

        Self {
            mu,
            sigma,
            source: UniformSource::new(),
            spare: None,
        }
    }

    /// Create a new normal sampler with a specific seed
    ///
    /// Useful for reproducible tests.
    pub fn with_seed(mu: f64, sigma: f64, seed: u64) -> Self {
        assert!(sigma > 0.0, "Standard deviation must be positive");

        Self {
            mu,
            sigma,
            source: UniformSource::with_seed(seed),
            spare: None,
        }
    }

    /// Generate a standard normal deviate
    ///
    /// Box--Muller produces two independent N(0,1) values per pair of
    /// uniforms; the second is cached and handed out on the next call.
    fn standard(&mut self) -> f64 {
        if let Some(spare) = self.spare.take() {
            return spare;
        }

        let u1 = self.source.float();
        let u2 = self.source.float();

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        let z0 = r * theta.cos();
        let z1 = r * theta.sin();

        self.spare = Some(z1);

        z0
    }
}

impl Variate for Normal {
    type Output = f64;

    #[inline]
    fn sample(&mut self) -> f64 {
        self.mu + self.sigma * self.standard()
    }
}

/// Log-normal distribution: exp of a Normal(μ, σ) draw
///
/// μ and σ parameterize the underlying normal, not the log-normal's own
/// mean and deviation.
pub struct LogNormal {
    normal: Normal,
}

impl LogNormal {
    /// Create a new log-normal sampler with a random seed
    ///
    /// # Panics
    ///
    /// Panics if sigma <= 0.
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self {
            normal: Normal::new(mu, sigma),
        }
    }

    /// Create a new log-normal sampler with a specific seed
    pub fn with_seed(mu: f64, sigma: f64, seed: u64) -> Self {
        Self {
            normal: Normal::with_seed(mu, sigma, seed),
        }
    }
}

impl Variate for LogNormal {
    type Output = f64;

    #[inline]
    fn sample(&mut self) -> f64 {
        self.normal.sample().exp()
    }
}
