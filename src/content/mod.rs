//! Randomized content generators
//!
//! Generators for syntactically valid CSS and SVG attribute value strings.
//! Useful for fuzzing style parsers and producing randomized test documents.
//!
//! Every generator draws exclusively through [`crate::source::UniformSource`]
//! primitives, so a seeded source reproduces the exact same strings.
//!
//! # Example
//!
//! ```
//! use variate::source::UniformSource;
//! use variate::content::css;
//!
//! let mut src = UniformSource::with_seed(42);
//! let color = css::color(&mut src);
//! assert!(!color.is_empty());
//! ```

pub mod css;
pub mod svg;
