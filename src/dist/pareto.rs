//! Pareto distributions
//!
//! Heavy-tailed power-law distributions, in two flavors: the classic
//! Pareto with support [xmin, ∞) and a bounded variant truncated to
//! [xmin, xmax]. Both are sampled by inverting the CDF.
//!
//! # Characteristics
//!
//! - Small alpha: heavier tail, more extreme values
//! - Large alpha: mass concentrated near xmin
//! - The bounded variant renormalizes the truncated tail, so every draw
//!   lands inside [xmin, xmax]
//!
//! # Example
//!
//! ```
//! use variate::dist::{Pareto, Variate};
//!
//! let mut p = Pareto::with_seed(1.0, 2.5, 42);
//! assert!(p.sample() >= 1.0);
//! ```

use super::Variate;
use crate::source::UniformSource;

/// Pareto distribution with scale xmin > 0 and shape α > 0
pub struct Pareto {
    xmin: f64,
    alpha: f64,
    source: UniformSource,
}

impl Pareto {
    /// Create a new Pareto sampler with a random seed
    ///
    /// # Panics
    ///
    /// Panics if xmin <= 0 or alpha <= 0.
    pub fn new(xmin: f64, alpha: f64) -> Self {
        assert!(xmin > 0.0, "Scale xmin must be positive");
        assert!(alpha > 0.0, "Shape alpha must be positive");

        Self {
            xmin,
            alpha,
            source: UniformSource::new(),
        }
    }

    /// Create a new Pareto sampler with a specific seed
    pub fn with_seed(xmin: f64, alpha: f64, seed: u64) -> Self {
        assert!(xmin > 0.0, "Scale xmin must be positive");
        assert!(alpha > 0.0, "Shape alpha must be positive");

        Self {
            xmin,
            alpha,
            source: UniformSource::with_seed(seed),
        }
    }
}

impl Variate for Pareto {
    type Output = f64;

    #[inline]
    fn sample(&mut self) -> f64 {
        self.xmin / self.source.float().powf(1.0 / self.alpha)
    }
}

/// Bounded Pareto distribution on [xmin, xmax] with shape α > 0
///
/// Requires 0 < xmin < xmax.
pub struct BoundedPareto {
    xmin: f64,
    xmax: f64,
    alpha: f64,
    source: UniformSource,
}

impl BoundedPareto {
    /// Create a new bounded Pareto sampler with a random seed
    ///
    /// # Panics
    ///
    /// Panics if xmin <= 0, xmin >= xmax, or alpha <= 0.
    pub fn new(xmin: f64, xmax: f64, alpha: f64) -> Self {
        assert!(xmin > 0.0, "Lower bound xmin must be positive");
        assert!(xmin < xmax, "Bounds must satisfy xmin < xmax");
        assert!(alpha > 0.0, "Shape alpha must be positive");

        Self {
            xmin,
            xmax,
            alpha,
            source: UniformSource::new(),
        }
    }

    /// Create a new bounded Pareto sampler with a specific seed
    pub fn with_seed(xmin: f64, xmax: f64, alpha: f64, seed: u64) -> Self {
        assert!(xmin > 0.0, "Lower bound xmin must be positive");
        assert!(xmin < xmax, "Bounds must satisfy xmin < xmax");
        assert!(alpha > 0.0, "Shape alpha must be positive");

        Self {
            xmin,
            xmax,
            alpha,
            source: UniformSource::with_seed(seed),
        }
    }
}

impl Variate for BoundedPareto {
    type Output = f64;

    #[inline]
    fn sample(&mut self) -> f64 {
        let l = self.xmin.powf(self.alpha);
        let h = self.xmax.powf(self.alpha);
        let u = self.source.float();

        ((h + u * (l - h)) / (l * h)).powf(-1.0 / self.alpha)
    }
}
