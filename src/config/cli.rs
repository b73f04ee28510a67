//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Machine-readable JSON report
    Json,
}

/// Distribution selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistributionKind {
    Uniform,
    Exponential,
    Pareto,
    BoundedPareto,
    Normal,
    LogNormal,
    Weibull,
    Gamma,
    Poisson,
    Custom,
}

/// Variate - random-variate generation tool
#[derive(Parser, Debug)]
#[command(name = "variate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// TOML scenario file; when given, flag-based job options are ignored
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Distribution to sample
    #[arg(long, value_enum, default_value = "uniform")]
    pub distribution: DistributionKind,

    /// Number of samples to draw
    #[arg(short = 'n', long, default_value = "1000")]
    pub count: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    // === Distribution parameters ===
    /// Lower bound (uniform)
    #[arg(long, default_value = "0.0")]
    pub min: f64,

    /// Upper bound (uniform)
    #[arg(long, default_value = "1.0")]
    pub max: f64,

    /// Rate parameter (exponential, poisson) or scale (weibull)
    #[arg(long)]
    pub lambda: Option<f64>,

    /// Mean of the (underlying) normal (normal, log-normal)
    #[arg(long)]
    pub mu: Option<f64>,

    /// Standard deviation of the (underlying) normal (normal, log-normal)
    #[arg(long)]
    pub sigma: Option<f64>,

    /// Lower support bound (pareto, bounded-pareto)
    #[arg(long)]
    pub xmin: Option<f64>,

    /// Upper support bound (bounded-pareto)
    #[arg(long)]
    pub xmax: Option<f64>,

    /// Shape parameter (pareto, bounded-pareto, gamma)
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Rate parameter (gamma)
    #[arg(long)]
    pub beta: Option<f64>,

    /// Shape parameter (weibull)
    #[arg(long)]
    pub shape: Option<f64>,

    /// Comma-separated weights (custom)
    #[arg(long, value_delimiter = ',')]
    pub weights: Option<Vec<f64>>,

    // === Output options ===
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Include raw sample values in the report
    #[arg(long)]
    pub values: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["variate"]);
        assert_eq!(cli.count, 1000);
        assert_eq!(cli.distribution, DistributionKind::Uniform);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.values);
    }

    #[test]
    fn test_distribution_flags() {
        let cli = Cli::parse_from([
            "variate",
            "--distribution",
            "normal",
            "--mu",
            "3.5",
            "--sigma",
            "0.5",
            "-n",
            "500",
            "--seed",
            "42",
        ]);
        assert_eq!(cli.distribution, DistributionKind::Normal);
        assert_eq!(cli.mu, Some(3.5));
        assert_eq!(cli.sigma, Some(0.5));
        assert_eq!(cli.count, 500);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_weights_delimiter() {
        let cli = Cli::parse_from(["variate", "--distribution", "custom", "--weights", "1,2,3.5"]);
        assert_eq!(cli.weights, Some(vec![1.0, 2.0, 3.5]));
    }

    #[test]
    fn test_kebab_case_variants() {
        let cli = Cli::parse_from(["variate", "--distribution", "bounded-pareto"]);
        assert_eq!(cli.distribution, DistributionKind::BoundedPareto);

        let cli = Cli::parse_from(["variate", "--distribution", "log-normal"]);
        assert_eq!(cli.distribution, DistributionKind::LogNormal);
    }
}
