//! Variate - Random-variate generation library
//!
//! Variate produces uniformly distributed primitives and layers a catalog of
//! named probability distributions on top of them, together with generators
//! for randomized CSS and SVG attribute values.
//!
//! # Architecture
//!
//! - **Uniform source**: xoshiro256++ backed generator with the basic
//!   primitives (floats, integers, choice, shuffle, coin flips)
//! - **Special functions**: Gamma (Lanczos), lower incomplete Gamma, erf
//! - **Distribution catalog**: uniform, exponential, Pareto, bounded Pareto,
//!   normal, log-normal, Weibull, gamma, Poisson, alias-table discrete
//! - **Content generators**: syntactically valid CSS/SVG value strings
//! - **Statistics**: summary and goodness-of-fit helpers for acceptance
//!   testing and CLI reports

pub mod config;
pub mod content;
pub mod dist;
pub mod output;
pub mod source;
pub mod special;
pub mod stats;

// Re-export commonly used types
pub use dist::Variate;
pub use source::UniformSource;

/// Result type used throughout Variate
pub type Result<T> = anyhow::Result<T>;
