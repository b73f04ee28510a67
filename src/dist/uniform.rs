//! Uniform distribution
//!
//! Flat density between two bounds. This is the simplest member of the
//! catalog and the default choice when no particular shape is wanted.
//!
//! # Example
//!
//! ```
//! use variate::dist::{Uniform, Variate};
//!
//! let mut u = Uniform::with_seed(-1.0, 1.0, 42);
//! let x = u.sample();
//! assert!(x >= -1.0 && x < 1.0);
//! ```

use super::Variate;
use crate::source::UniformSource;

/// Uniform distribution over [min, max)
///
/// The bounds may be given in either order; reversed bounds draw from the
/// same interval.
pub struct Uniform {
    min: f64,
    max: f64,
    source: UniformSource,
}

impl Uniform {
    /// Create a new uniform sampler with a random seed
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            source: UniformSource::new(),
        }
    }

    /// Create a new uniform sampler with a specific seed
    ///
    /// Useful for reproducible tests.
    pub fn with_seed(min: f64, max: f64, seed: u64) -> Self {
        Self {
            min,
            max,
            source: UniformSource::with_seed(seed),
        }
    }
}

impl Variate for Uniform {
    type Output = f64;

    #[inline]
    fn sample(&mut self) -> f64 {
        self.source.float_in(self.min, self.max)
    }
}
