//! Scenario validation
//!
//! Every parameter constraint the samplers assert at construction is
//! checked here first, so CLI users get a structured error instead of a
//! panic.

use super::{DistributionSpec, JobConfig, Scenario, ScenarioError};

/// Validate a complete scenario
pub fn validate_scenario(scenario: &Scenario) -> Result<(), ScenarioError> {
    if scenario.jobs.is_empty() {
        return Err(ScenarioError::Empty);
    }

    for (index, job) in scenario.jobs.iter().enumerate() {
        validate_job(index, job)?;
    }

    Ok(())
}

/// Validate a single job
pub fn validate_job(index: usize, job: &JobConfig) -> Result<(), ScenarioError> {
    let fail = |message: String| ScenarioError::InvalidJob {
        index,
        name: job.distribution.name(),
        message,
    };

    if job.count == 0 {
        return Err(fail("count must be at least 1".into()));
    }

    match &job.distribution {
        DistributionSpec::Uniform { min, max } => {
            if !min.is_finite() || !max.is_finite() {
                return Err(fail("bounds must be finite".into()));
            }
        }
        DistributionSpec::Exponential { lambda } | DistributionSpec::Poisson { lambda } => {
            if !(*lambda > 0.0) {
                return Err(fail(format!("lambda must be positive, got {}", lambda)));
            }
        }
        DistributionSpec::Pareto { xmin, alpha } => {
            if !(*xmin > 0.0) {
                return Err(fail(format!("xmin must be positive, got {}", xmin)));
            }
            if !(*alpha > 0.0) {
                return Err(fail(format!("alpha must be positive, got {}", alpha)));
            }
        }
        DistributionSpec::BoundedPareto { xmin, xmax, alpha } => {
            if !(*xmin > 0.0) {
                return Err(fail(format!("xmin must be positive, got {}", xmin)));
            }
            if !(*xmin < *xmax) {
                return Err(fail(format!(
                    "bounds must satisfy xmin < xmax, got {} >= {}",
                    xmin, xmax
                )));
            }
            if !(*alpha > 0.0) {
                return Err(fail(format!("alpha must be positive, got {}", alpha)));
            }
        }
        DistributionSpec::Normal { sigma, .. } | DistributionSpec::LogNormal { sigma, .. } => {
            if !(*sigma > 0.0) {
                return Err(fail(format!("sigma must be positive, got {}", sigma)));
            }
        }
        DistributionSpec::Weibull { lambda, k } => {
            if !(*lambda > 0.0) {
                return Err(fail(format!("lambda must be positive, got {}", lambda)));
            }
            if !(*k > 0.0) {
                return Err(fail(format!("k must be positive, got {}", k)));
            }
        }
        DistributionSpec::Gamma { alpha, beta } => {
            if !(*alpha > 0.0) {
                return Err(fail(format!("alpha must be positive, got {}", alpha)));
            }
            if !(*beta > 0.0) {
                return Err(fail(format!("beta must be positive, got {}", beta)));
            }
        }
        DistributionSpec::Custom { weights } => {
            if weights.iter().any(|w| !w.is_finite()) {
                return Err(fail("weights must be finite".into()));
            }
            if !weights.is_empty() && !weights.iter().any(|&w| w > 0.0) {
                return Err(fail("at least one weight must be positive".into()));
            }
        }
    }

    Ok(())
}
