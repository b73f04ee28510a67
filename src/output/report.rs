//! Report data model
//!
//! Serializable structures describing the outcome of a sampling run.
//! Integer-valued samples (Poisson counts, alias indices) are reported as
//! f64; the conversion is exact for any count below 2^53.

use crate::stats;
use serde::{Deserialize, Serialize};

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Tool version
    pub version: String,

    /// RFC 3339 timestamp of report creation
    pub timestamp: String,

    /// One entry per executed job
    pub jobs: Vec<JobReport>,
}

impl Report {
    /// Create a report for a set of finished jobs, stamped with the
    /// current time
    pub fn new(jobs: Vec<JobReport>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            jobs,
        }
    }
}

/// Result of one sampling job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobReport {
    /// Job label (distribution name unless overridden)
    pub label: String,

    /// Distribution name
    pub distribution: String,

    /// Number of samples drawn
    pub count: usize,

    /// Seed the job ran with
    pub seed: u64,

    /// Summary statistics over the drawn samples
    pub summary: Summary,

    /// Raw samples, included on request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<f64>>,
}

/// Summary statistics for a sample batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Compute summary statistics for a batch
    ///
    /// A batch is never empty (the replication contract yields at least
    /// one value), so extrema always exist.
    pub fn from_samples(xs: &[f64]) -> Self {
        let (min, max) = stats::extrema(xs).unwrap_or((f64::NAN, f64::NAN));
        let variance = if xs.len() > 1 { stats::variance(xs) } else { 0.0 };

        Self {
            mean: stats::mean(xs),
            variance,
            std_dev: variance.sqrt(),
            min,
            max,
        }
    }
}
