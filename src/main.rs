//! Variate CLI entry point

use anyhow::Result;
use variate::config::cli::{Cli, OutputFormat};
use variate::config::{self, DistributionSpec, JobConfig, Scenario};
use variate::dist::{
    Alias, BoundedPareto, Exponential, Gamma, LogNormal, Normal, Pareto, Poisson, Uniform,
    Variate, Weibull,
};
use variate::output::{self, JobReport, Report, Summary};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // A scenario file replaces the flag-based single job
    let scenario = if let Some(path) = &cli.config {
        config::toml::parse_toml_file(path)?
    } else {
        Scenario {
            jobs: vec![config::cli_convert::job_from_cli(&cli)?],
        }
    };

    // Validate before sampling so bad parameters surface as errors, not
    // panics from the sampler constructors
    config::validator::validate_scenario(&scenario)?;

    let report = run_scenario(&scenario, cli.values);

    match cli.format {
        OutputFormat::Text => output::text::print_report(&report),
        OutputFormat::Json => println!("{}", output::json::render_report(&report)?),
    }

    Ok(())
}

/// Execute every job in the scenario and collect a report
fn run_scenario(scenario: &Scenario, include_values: bool) -> Report {
    let jobs = scenario
        .jobs
        .iter()
        .map(|job| run_job(job, include_values))
        .collect();

    Report::new(jobs)
}

/// Execute a single sampling job
fn run_job(job: &JobConfig, include_values: bool) -> JobReport {
    let seed = job.seed.unwrap_or_else(rand::random);
    let values = draw(&job.distribution, job.count, seed);

    JobReport {
        label: job
            .label
            .clone()
            .unwrap_or_else(|| job.distribution.name().to_string()),
        distribution: job.distribution.name().to_string(),
        count: values.len(),
        seed,
        summary: Summary::from_samples(&values),
        values: if include_values { Some(values) } else { None },
    }
}

/// Draw `count` samples from the configured distribution
///
/// Integer-valued distributions are widened to f64 for reporting.
fn draw(spec: &DistributionSpec, count: usize, seed: u64) -> Vec<f64> {
    match spec {
        DistributionSpec::Uniform { min, max } => {
            Uniform::with_seed(*min, *max, seed).sample_many(count)
        }
        DistributionSpec::Exponential { lambda } => {
            Exponential::with_seed(*lambda, seed).sample_many(count)
        }
        DistributionSpec::Pareto { xmin, alpha } => {
            Pareto::with_seed(*xmin, *alpha, seed).sample_many(count)
        }
        DistributionSpec::BoundedPareto { xmin, xmax, alpha } => {
            BoundedPareto::with_seed(*xmin, *xmax, *alpha, seed).sample_many(count)
        }
        DistributionSpec::Normal { mu, sigma } => {
            Normal::with_seed(*mu, *sigma, seed).sample_many(count)
        }
        DistributionSpec::LogNormal { mu, sigma } => {
            LogNormal::with_seed(*mu, *sigma, seed).sample_many(count)
        }
        DistributionSpec::Weibull { lambda, k } => {
            Weibull::with_seed(*lambda, *k, seed).sample_many(count)
        }
        DistributionSpec::Gamma { alpha, beta } => {
            Gamma::with_seed(*alpha, *beta, seed).sample_many(count)
        }
        DistributionSpec::Poisson { lambda } => Poisson::with_seed(*lambda, seed)
            .sample_many(count)
            .into_iter()
            .map(|k| k as f64)
            .collect(),
        DistributionSpec::Custom { weights } => Alias::with_seed(weights, seed)
            .sample_many(count)
            .into_iter()
            .map(|i| i as f64)
            .collect(),
    }
}
