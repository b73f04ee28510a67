//! Configuration module
//!
//! Handles CLI argument parsing, TOML scenario files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A batch of sampling jobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

/// One sampling job: a distribution, a sample count, and an optional seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// Optional label shown in reports (defaults to the distribution name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Distribution and its parameters
    #[serde(flatten)]
    pub distribution: DistributionSpec,

    /// Number of samples to draw
    #[serde(default = "default_count")]
    pub count: usize,

    /// Seed for reproducible runs; random when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_count() -> usize {
    1000
}

/// Distribution selection with parameters
///
/// In TOML the variant is chosen by the `distribution` key:
///
/// ```toml
/// [[jobs]]
/// distribution = "normal"
/// mu = 0.0
/// sigma = 1.0
/// count = 10000
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "distribution", rename_all = "snake_case")]
pub enum DistributionSpec {
    Uniform { min: f64, max: f64 },
    Exponential { lambda: f64 },
    Pareto { xmin: f64, alpha: f64 },
    BoundedPareto { xmin: f64, xmax: f64, alpha: f64 },
    Normal { mu: f64, sigma: f64 },
    LogNormal { mu: f64, sigma: f64 },
    Weibull { lambda: f64, k: f64 },
    Gamma { alpha: f64, beta: f64 },
    Poisson { lambda: f64 },
    Custom { weights: Vec<f64> },
}

impl DistributionSpec {
    /// Distribution name as used in configs and reports
    pub fn name(&self) -> &'static str {
        match self {
            DistributionSpec::Uniform { .. } => "uniform",
            DistributionSpec::Exponential { .. } => "exponential",
            DistributionSpec::Pareto { .. } => "pareto",
            DistributionSpec::BoundedPareto { .. } => "bounded_pareto",
            DistributionSpec::Normal { .. } => "normal",
            DistributionSpec::LogNormal { .. } => "log_normal",
            DistributionSpec::Weibull { .. } => "weibull",
            DistributionSpec::Gamma { .. } => "gamma",
            DistributionSpec::Poisson { .. } => "poisson",
            DistributionSpec::Custom { .. } => "custom",
        }
    }
}

/// Scenario validation failure
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario contains no jobs")]
    Empty,

    #[error("job {index} ({name}): {message}")]
    InvalidJob {
        index: usize,
        name: &'static str,
        message: String,
    },
}
