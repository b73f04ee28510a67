//! Conversion from CLI flags to a sampling job

use super::cli::{Cli, DistributionKind};
use super::{DistributionSpec, JobConfig};
use anyhow::{bail, Result};

/// Build a single-job configuration from flag-based CLI options
///
/// Flags that the selected distribution requires must be present; anything
/// else is ignored.
pub fn job_from_cli(cli: &Cli) -> Result<JobConfig> {
    let distribution = match cli.distribution {
        DistributionKind::Uniform => DistributionSpec::Uniform {
            min: cli.min,
            max: cli.max,
        },
        DistributionKind::Exponential => DistributionSpec::Exponential {
            lambda: require(cli.lambda, "--lambda", "exponential")?,
        },
        DistributionKind::Pareto => DistributionSpec::Pareto {
            xmin: require(cli.xmin, "--xmin", "pareto")?,
            alpha: require(cli.alpha, "--alpha", "pareto")?,
        },
        DistributionKind::BoundedPareto => DistributionSpec::BoundedPareto {
            xmin: require(cli.xmin, "--xmin", "bounded-pareto")?,
            xmax: require(cli.xmax, "--xmax", "bounded-pareto")?,
            alpha: require(cli.alpha, "--alpha", "bounded-pareto")?,
        },
        DistributionKind::Normal => DistributionSpec::Normal {
            mu: require(cli.mu, "--mu", "normal")?,
            sigma: require(cli.sigma, "--sigma", "normal")?,
        },
        DistributionKind::LogNormal => DistributionSpec::LogNormal {
            mu: require(cli.mu, "--mu", "log-normal")?,
            sigma: require(cli.sigma, "--sigma", "log-normal")?,
        },
        DistributionKind::Weibull => DistributionSpec::Weibull {
            lambda: require(cli.lambda, "--lambda", "weibull")?,
            k: require(cli.shape, "--shape", "weibull")?,
        },
        DistributionKind::Gamma => DistributionSpec::Gamma {
            alpha: require(cli.alpha, "--alpha", "gamma")?,
            beta: require(cli.beta, "--beta", "gamma")?,
        },
        DistributionKind::Poisson => DistributionSpec::Poisson {
            lambda: require(cli.lambda, "--lambda", "poisson")?,
        },
        DistributionKind::Custom => DistributionSpec::Custom {
            weights: match &cli.weights {
                Some(w) => w.clone(),
                None => bail!("custom distribution requires --weights"),
            },
        },
    };

    Ok(JobConfig {
        label: None,
        distribution,
        count: cli.count,
        seed: cli.seed,
    })
}

fn require(value: Option<f64>, flag: &str, dist: &str) -> Result<f64> {
    match value {
        Some(v) => Ok(v),
        None => bail!("{} distribution requires {}", dist, flag),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_uniform_from_defaults() {
        let cli = Cli::parse_from(["variate"]);
        let job = job_from_cli(&cli).unwrap();
        assert!(matches!(
            job.distribution,
            DistributionSpec::Uniform { min, max } if min == 0.0 && max == 1.0
        ));
    }

    #[test]
    fn test_missing_parameter_rejected() {
        let cli = Cli::parse_from(["variate", "--distribution", "exponential"]);
        let err = job_from_cli(&cli).unwrap_err();
        assert!(err.to_string().contains("--lambda"));
    }

    #[test]
    fn test_weibull_parameters() {
        let cli = Cli::parse_from([
            "variate",
            "--distribution",
            "weibull",
            "--lambda",
            "2.0",
            "--shape",
            "1.5",
        ]);
        let job = job_from_cli(&cli).unwrap();
        assert!(matches!(
            job.distribution,
            DistributionSpec::Weibull { lambda, k } if lambda == 2.0 && k == 1.5
        ));
    }

    #[test]
    fn test_custom_requires_weights() {
        let cli = Cli::parse_from(["variate", "--distribution", "custom"]);
        assert!(job_from_cli(&cli).is_err());
    }
}
